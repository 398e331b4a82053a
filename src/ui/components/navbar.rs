use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::ui::input::QueryInput;
use crate::ui::style::Theme;

pub(crate) struct NavbarContext<'a> {
	pub app_title: &'a str,
	pub input: &'a QueryInput<'a>,
	pub focused: bool,
	pub result_count: usize,
	pub searching: bool,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Logo, search box and result count.
pub(crate) fn render_navbar(frame: &mut Frame, area: Rect, ctx: NavbarContext<'_>) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(ctx.theme.border(ctx.focused))
		.style(ctx.theme.header);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let logo = format!("🍿 {}", ctx.app_title);
	let count = format!("Found {} results", ctx.result_count);
	let logo_width = u16::try_from(logo.width()).unwrap_or(u16::MAX);
	let count_width = u16::try_from(count.width()).unwrap_or(u16::MAX).saturating_add(2);

	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(logo_width.saturating_add(2)),
			Constraint::Min(8),
			Constraint::Length(count_width),
		])
		.split(inner);

	let logo = Paragraph::new(Line::from(Span::styled(
		logo,
		ctx.theme.highlight.add_modifier(Modifier::BOLD),
	)));
	frame.render_widget(logo, columns[0]);

	ctx.input.render(frame, columns[1]);

	let mut line = Line::default();
	if ctx.searching {
		let spinner = Throbber::default()
			.style(ctx.theme.empty)
			.throbber_style(ctx.theme.empty);
		line.spans.push(spinner.to_symbol_span(ctx.throbber_state));
	}
	line.spans.push(Span::styled(count, ctx.theme.empty));
	frame.render_widget(Paragraph::new(line).right_aligned(), columns[2]);
}
