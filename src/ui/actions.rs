use manimovies_rating::icon_at;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::components::{row_at, watched_row_at};
use super::{App, Focus};

fn contains(area: Option<Rect>, column: u16, row: u16) -> bool {
	area.is_some_and(|area| {
		column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
	})
}

impl App<'_> {
	/// Process a keyboard event.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			self.should_quit = true;
			return;
		}
		self.controller.clear_status();

		match key.code {
			KeyCode::Esc => {
				self.controller.close_detail();
			}
			KeyCode::Enter if self.focus != Focus::Search => {
				self.focus = Focus::Search;
				if self.input.clear() {
					self.controller.set_query("");
				}
			}
			KeyCode::Tab => self.cycle_focus(),
			KeyCode::F(2) => self.results.open = !self.results.open,
			KeyCode::F(3) => self.watched.open = !self.watched.open,
			_ => match self.focus {
				Focus::Search => {
					if self.input.input(key) {
						self.controller.set_query(self.input.text());
						self.results.table_state.select(Some(0));
					}
				}
				Focus::Results => self.handle_results_key(key),
				Focus::Detail => self.handle_detail_key(key),
				Focus::Watched => self.handle_watched_key(key),
			},
		}
		self.sync();
	}

	fn cycle_focus(&mut self) {
		let side = if self.controller.detail().is_some() {
			Focus::Detail
		} else {
			Focus::Watched
		};
		self.focus = match self.focus {
			Focus::Search => Focus::Results,
			Focus::Results => side,
			Focus::Detail | Focus::Watched => Focus::Search,
		};
	}

	fn handle_results_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Up => self.results.move_up(),
			KeyCode::Down => self.results.move_down(self.controller.result_count()),
			KeyCode::Char(' ' | 'o') => {
				if let Some(index) = self.results.selected() {
					self.open_result(index);
				}
			}
			KeyCode::Char('a') => self.add_watched(),
			KeyCode::Char('q') => self.should_quit = true,
			_ => {}
		}
	}

	fn handle_detail_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Left => self.controller.hover_previous(),
			KeyCode::Right => self.controller.hover_next(),
			KeyCode::Char(' ') => {
				self.controller.rate_hovered();
			}
			KeyCode::Char(digit @ '1'..='9') => {
				let value = digit as u8 - b'0';
				self.controller.rate(value);
			}
			KeyCode::Char('0') => {
				self.controller.rate(10);
			}
			KeyCode::Char('a') => self.add_watched(),
			KeyCode::Char('q') => self.should_quit = true,
			_ => {}
		}
	}

	fn handle_watched_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Up => self.watched.move_up(),
			KeyCode::Down => self.watched.move_down(self.controller.watched().len()),
			KeyCode::Char('d') | KeyCode::Delete => {
				let id = self
					.watched
					.selected()
					.and_then(|index| self.controller.watched().entries().get(index))
					.map(|entry| entry.id.clone());
				if let Some(id) = id {
					self.controller.remove_watched(&id);
				}
			}
			KeyCode::Char('q') => self.should_quit = true,
			_ => {}
		}
	}

	/// Toggle the detail view for the result at `index`.
	fn open_result(&mut self, index: usize) {
		let Some(id) = self
			.controller
			.movies()
			.get(index)
			.map(|movie| movie.id.clone())
		else {
			return;
		};
		self.controller.select(&id);
		if self.controller.detail().is_some() {
			self.focus = Focus::Detail;
		}
	}

	fn add_watched(&mut self) {
		match self.controller.add_watched() {
			Ok(true) => self.focus = Focus::Results,
			Ok(false) => {}
			Err(err) => {
				log::warn!("could not add to the watched list: {err}");
				self.controller.report(err.to_string());
			}
		}
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let (column, row) = (mouse.column, mouse.row);
		let star = self
			.rating_area
			.and_then(|area| icon_at(self.controller.rating_config(), area, column, row));

		match mouse.kind {
			MouseEventKind::Moved => match star {
				Some(icon) => {
					self.pointer_on_rating = self.controller.hover_rating(icon);
				}
				None if self.pointer_on_rating => {
					self.pointer_on_rating = false;
					self.controller.leave_rating();
				}
				None => {}
			},
			MouseEventKind::Down(MouseButton::Left) if star.is_some() => {
				if let Some(icon) = star {
					self.focus = Focus::Detail;
					self.controller.rate(icon);
				}
			}
			MouseEventKind::Down(MouseButton::Left)
				if self.results.open && contains(self.results.area, column, row) =>
			{
				self.focus = Focus::Results;
				let clicked = self.results.area.and_then(|area| {
					row_at(area, self.results.table_state.offset(), column, row)
				});
				if let Some(index) = clicked
					&& index < self.controller.result_count()
					&& !self.controller.is_searching()
				{
					self.results.table_state.select(Some(index));
					self.open_result(index);
				}
			}
			MouseEventKind::Down(MouseButton::Left)
				if self.watched.open && contains(self.watched.area, column, row) =>
			{
				self.focus = Focus::Watched;
				let clicked = self.watched.area.and_then(|area| {
					watched_row_at(area, self.watched.table_state.offset(), column, row)
				});
				if let Some(index) = clicked
					&& index < self.controller.watched().len()
				{
					self.watched.table_state.select(Some(index));
				}
			}
			MouseEventKind::ScrollUp if contains(self.results.area, column, row) => {
				self.results.move_up();
			}
			MouseEventKind::ScrollDown if contains(self.results.area, column, row) => {
				self.results.move_down(self.controller.result_count());
			}
			MouseEventKind::ScrollUp if contains(self.watched.area, column, row) => {
				self.watched.move_up();
			}
			MouseEventKind::ScrollDown if contains(self.watched.area, column, row) => {
				self.watched.move_down(self.controller.watched().len());
			}
			_ => {}
		}
		self.sync();
	}
}
