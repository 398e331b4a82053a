//! State of the terminal front-end.

use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use crate::controller::Controller;
use crate::ui::input::QueryInput;
use crate::ui::style::Theme;

/// Pane that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Search,
	Results,
	Detail,
	Watched,
}

/// A collapsible list box.
#[derive(Debug)]
pub(crate) struct ListPane {
	pub(crate) table_state: TableState,
	pub(crate) open: bool,
	/// Where the pane was last drawn, for mouse hit testing.
	pub(crate) area: Option<Rect>,
}

impl Default for ListPane {
	fn default() -> Self {
		Self {
			table_state: TableState::default(),
			open: true,
			area: None,
		}
	}
}

impl ListPane {
	/// Keep the selection inside `len` rows.
	pub(crate) fn clamp(&mut self, len: usize) {
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			None => self.table_state.select(Some(0)),
			Some(_) => {}
		}
	}

	pub(crate) fn move_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	pub(crate) fn move_down(&mut self, len: usize) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < len
		{
			self.table_state.select(Some(selected + 1));
		}
	}

	pub(crate) fn selected(&self) -> Option<usize> {
		self.table_state.selected()
	}
}

/// Everything the event loop and renderer share.
pub struct App<'a> {
	pub(crate) controller: Controller,
	pub(crate) input: QueryInput<'a>,
	pub(crate) focus: Focus,
	pub(crate) results: ListPane,
	pub(crate) watched: ListPane,
	/// Where the rating row was last drawn, for mouse hit testing.
	pub(crate) rating_area: Option<Rect>,
	/// Whether the rating hover came from the mouse.
	pub(crate) pointer_on_rating: bool,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) should_quit: bool,
}

impl<'a> App<'a> {
	pub fn new(controller: Controller, theme: Theme) -> Self {
		let input = QueryInput::new(controller.query().to_string());
		let mut app = Self {
			controller,
			input,
			focus: Focus::Search,
			results: ListPane::default(),
			watched: ListPane::default(),
			rating_area: None,
			pointer_on_rating: false,
			theme,
			throbber_state: ThrobberState::default(),
			should_quit: false,
		};
		app.input.set_style(theme.highlight, theme.empty);
		app.sync();
		app
	}

	#[must_use]
	pub fn controller(&self) -> &Controller {
		&self.controller
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	#[must_use]
	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	/// Apply pending replies and repair focus and selections afterwards.
	pub fn tick(&mut self) -> bool {
		let changed = self.controller.pump();
		self.sync();
		changed
	}

	pub(crate) fn sync(&mut self) {
		if self.focus == Focus::Detail && self.controller.detail().is_none() {
			self.focus = Focus::Results;
		}
		if self.focus == Focus::Watched && self.controller.detail().is_some() {
			self.focus = Focus::Detail;
		}
		self.results.clamp(self.controller.result_count());
		self.watched.clamp(self.controller.watched().len());
		self.input.show_cursor(self.focus == Focus::Search);
	}
}
