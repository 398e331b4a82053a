use ratatui::style::{Color, Modifier, Style};

/// Styles for the UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Borders, titles and table headers.
	pub header: Style,
	/// Highlighted table rows.
	pub row_highlight: Style,
	/// Search prompt and focused pane borders.
	pub prompt: Style,
	/// Placeholder and secondary text.
	pub empty: Style,
	/// Emphasised values such as movie titles.
	pub highlight: Style,
	/// Error messages.
	pub error: Style,
}

impl Theme {
	/// Border style for a pane, brighter when it has focus.
	#[must_use]
	pub fn border(&self, focused: bool) -> Style {
		if focused {
			self.prompt
		} else {
			Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
		}
	}
}

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(203, 213, 225))
		.bg(Color::Rgb(30, 41, 59)),
	row_highlight: Style::new()
		.bg(Color::Rgb(51, 65, 85))
		.fg(Color::Rgb(248, 250, 252)),
	prompt: Style::new().fg(Color::Rgb(103, 65, 217)),
	empty: Style::new().fg(Color::Rgb(100, 116, 139)),
	highlight: Style::new()
		.fg(Color::Rgb(248, 250, 252))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(250, 82, 82)),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(190, 18, 60)),
};

const BUILTINS: &[(&str, Theme)] = &[("slate", SLATE), ("light", LIGHT)];

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "slate";

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Names of the bundled themes.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILTINS.iter().map(|(name, _)| *name)
}

/// Look up a bundled theme, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	BUILTINS
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
		.map(|(_, theme)| *theme)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_ignores_case() {
		assert_eq!(by_name("Light"), Some(LIGHT));
		assert_eq!(by_name(" slate "), Some(SLATE));
		assert_eq!(by_name("solarized"), None);
	}

	#[test]
	fn default_is_listed() {
		assert!(names().any(|name| name == DEFAULT_THEME));
		assert_eq!(by_name(DEFAULT_THEME), Some(default_theme()));
	}
}
