use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Single-line search box.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text("Search movies...");
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self { textarea }
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key to the editor. Returns whether the text changed.
	///
	/// Keys that would add a line or belong to navigation are refused.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let refused = match key.code {
			KeyCode::Enter
			| KeyCode::Tab
			| KeyCode::BackTab
			| KeyCode::Esc
			| KeyCode::Up
			| KeyCode::Down
			| KeyCode::PageUp
			| KeyCode::PageDown => true,
			KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
			_ => false,
		};
		if refused {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn clear(&mut self) -> bool {
		if self.text().is_empty() {
			return false;
		}
		self.textarea.move_cursor(tui_textarea::CursorMove::End);
		self.textarea.delete_line_by_head()
	}

	pub fn set_style(&mut self, style: Style, placeholder: Style) {
		self.textarea.set_style(style);
		self.textarea.set_placeholder_style(placeholder);
	}

	pub fn show_cursor(&mut self, visible: bool) {
		let style = if visible {
			Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_edits_single_line() {
		let mut input = QueryInput::new("");
		assert!(input.input(key(KeyCode::Char('a'))));
		assert!(input.input(key(KeyCode::Char('b'))));
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "a");
	}

	#[test]
	fn clear_reports_change() {
		let mut input = QueryInput::new("dune");
		assert!(input.clear());
		assert!(!input.clear());
		assert_eq!(input.text(), "");
	}
}
