use manimovies_catalog::{WatchSummary, WatchedEntry};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use super::pane_block;
use super::results::{HIGHLIGHT_SYMBOL, row_at};
use crate::ui::style::Theme;

/// Lines taken by the summary above the table.
const SUMMARY_ROWS: u16 = 3;

pub(crate) struct WatchedView<'a> {
	pub entries: &'a [WatchedEntry],
	pub summary: WatchSummary,
	pub open: bool,
	pub focused: bool,
	pub theme: &'a Theme,
}

fn summary_lines(summary: &WatchSummary, theme: &Theme) -> Vec<Line<'static>> {
	vec![
		Line::from(Span::styled("MOVIES YOU WATCHED", theme.highlight)),
		Line::from(vec![
			Span::raw(format!("# {} movies", summary.count)),
			Span::styled("  ⭐ ", theme.empty),
			Span::raw(format!("{:.2}", summary.avg_imdb_rating)),
			Span::styled("  🌟 ", theme.empty),
			Span::raw(format!("{:.2}", summary.avg_user_rating)),
			Span::styled("  ⏳ ", theme.empty),
			Span::raw(format!("{:.0} min", summary.avg_runtime)),
		]),
	]
}

fn entry_row(entry: &WatchedEntry) -> Row<'static> {
	let imdb = entry
		.imdb_rating
		.map(|rating| format!("{rating:.1}"))
		.unwrap_or_else(|| "-".to_string());
	let runtime = entry
		.runtime
		.map(|minutes| format!("{minutes} min"))
		.unwrap_or_else(|| "-".to_string());
	Row::new(vec![
		Cell::from(entry.title.clone()),
		Cell::from(imdb),
		Cell::from(entry.user_rating.to_string()),
		Cell::from(runtime),
	])
}

/// Right box while no title is open: summary plus the watched table.
pub(crate) fn render_watched(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	view: WatchedView<'_>,
) {
	let block = pane_block("Watched", view.open, view.focused, view.theme);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if !view.open {
		return;
	}

	let sections = Layout::default()
		.direction(Direction::Vertical)
		.constraints([Constraint::Length(SUMMARY_ROWS), Constraint::Min(0)])
		.split(inner);
	frame.render_widget(
		Paragraph::new(summary_lines(&view.summary, view.theme)),
		sections[0],
	);

	if view.entries.is_empty() {
		return;
	}

	let header = Row::new(vec!["Title", "IMDb", "Yours", "Runtime"])
		.style(view.theme.header)
		.bottom_margin(1);
	let rows = view.entries.iter().map(entry_row);
	let table = Table::new(
		rows,
		[
			Constraint::Fill(1),
			Constraint::Length(5),
			Constraint::Length(5),
			Constraint::Length(8),
		],
	)
	.header(header)
	.column_spacing(1)
	.highlight_spacing(HighlightSpacing::WhenSelected)
	.row_highlight_style(view.theme.row_highlight)
	.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, sections[1], table_state);
}

/// Watched entry under a click, given the pane's outer area.
pub(crate) fn watched_row_at(area: Rect, offset: usize, column: u16, row: u16) -> Option<usize> {
	let table = Rect {
		y: area.y.saturating_add(SUMMARY_ROWS),
		height: area.height.saturating_sub(SUMMARY_ROWS),
		..area
	};
	row_at(table, offset, column, row)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn row_hit_skips_summary_and_header() {
		let area = Rect::new(0, 0, 30, 12);
		assert_eq!(watched_row_at(area, 0, 5, 3), None);
		assert_eq!(watched_row_at(area, 0, 5, 5), None);
		assert_eq!(watched_row_at(area, 0, 5, 6), Some(0));
		assert_eq!(watched_row_at(area, 2, 5, 7), Some(3));
		assert_eq!(watched_row_at(area, 0, 5, 11), None);
	}
}
