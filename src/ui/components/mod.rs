//! Widgets composing the main screen.

mod detail;
mod footer;
mod navbar;
mod results;
mod watched;

pub(crate) use detail::{DetailContext, render_detail};
pub(crate) use footer::render_footer;
pub(crate) use navbar::{NavbarContext, render_navbar};
pub(crate) use results::{ResultsView, render_results, row_at};
pub(crate) use watched::{WatchedView, render_watched, watched_row_at};

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::symbols::border;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::style::Theme;

/// Rounded box with a collapse marker in its title.
pub(crate) fn pane_block<'a>(title: &'a str, open: bool, focused: bool, theme: &Theme) -> Block<'a> {
	let marker = if open { "[-]" } else { "[+]" };
	Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(theme.border(focused))
		.title(Line::from(format!(" {title} ")))
		.title(Line::from(format!(" {marker} ")).alignment(Alignment::Right))
}

/// Single centered message inside `area`.
pub(crate) fn centered_message(frame: &mut ratatui::Frame, area: Rect, text: &str, style: Style) {
	if area.height == 0 {
		return;
	}
	let row = Rect {
		y: area.y + area.height / 2,
		height: 1,
		..area
	};
	let message = Paragraph::new(text.to_string())
		.style(style)
		.alignment(Alignment::Center);
	frame.render_widget(message, row);
}
