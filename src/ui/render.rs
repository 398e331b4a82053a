use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin};

use super::components::{
	DetailContext, NavbarContext, ResultsView, WatchedView, render_detail, render_footer,
	render_navbar, render_results, render_watched,
};
use super::{App, Focus};

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(3),
				Constraint::Min(3),
				Constraint::Length(1),
			])
			.split(area);

		let controller = &self.controller;
		render_navbar(
			frame,
			rows[0],
			NavbarContext {
				app_title: &controller.config().app_title,
				input: &self.input,
				focused: self.focus == Focus::Search,
				result_count: controller.result_count(),
				searching: controller.is_searching(),
				throbber_state: &self.throbber_state,
				theme: &self.theme,
			},
		);

		let columns = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
			.split(rows[1]);

		self.results.area = Some(columns[0]);
		render_results(
			frame,
			columns[0],
			&mut self.results.table_state,
			ResultsView {
				movies: controller.movies(),
				open_id: controller.open_id(),
				searching: controller.is_searching(),
				error: controller.error(),
				open: self.results.open,
				focused: self.focus == Focus::Results,
				throbber_state: &self.throbber_state,
				theme: &self.theme,
			},
		);

		match controller.detail() {
			Some(session) => {
				self.watched.area = None;
				self.rating_area = render_detail(
					frame,
					columns[1],
					DetailContext {
						session,
						watched_rating: controller.watched_rating(),
						can_add: controller.can_add(),
						rating: controller.rating_config(),
						focused: self.focus == Focus::Detail,
						throbber_state: &self.throbber_state,
						theme: &self.theme,
					},
				);
			}
			None => {
				self.rating_area = None;
				self.watched.area = Some(columns[1]);
				render_watched(
					frame,
					columns[1],
					&mut self.watched.table_state,
					WatchedView {
						entries: controller.watched().entries(),
						summary: controller.summary(),
						open: self.watched.open,
						focused: self.focus == Focus::Watched,
						theme: &self.theme,
					},
				);
			}
		}

		render_footer(frame, rows[2], self.focus, controller.status(), &self.theme);
	}
}
