use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::Focus;
use crate::ui::style::Theme;

fn hints(focus: Focus) -> &'static str {
	match focus {
		Focus::Search => "type to search  Tab results  Esc close  Ctrl-C quit",
		Focus::Results => "↑↓ move  Space/o open  F2 collapse  Enter search  q quit",
		Focus::Detail => "←→ hover  Space/1-9 rate  a add  Esc back  q quit",
		Focus::Watched => "↑↓ move  d remove  F3 collapse  Enter search  q quit",
	}
}

/// Status message if there is one, key hints otherwise.
pub(crate) fn render_footer(
	frame: &mut Frame,
	area: Rect,
	focus: Focus,
	status: Option<&str>,
	theme: &Theme,
) {
	let line = match status {
		Some(status) => Line::from(Span::styled(status.to_string(), theme.highlight)),
		None => Line::from(Span::styled(hints(focus), theme.empty)),
	};
	frame.render_widget(Paragraph::new(line), area);
}
