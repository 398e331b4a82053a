use manimovies_catalog::MovieSummary;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Cell, HighlightSpacing, Row, Table, TableState};
use throbber_widgets_tui::{Throbber, ThrobberState};

use super::{centered_message, pane_block};
use crate::ui::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Header row plus its bottom margin.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

pub(crate) struct ResultsView<'a> {
	pub movies: &'a [MovieSummary],
	pub open_id: Option<&'a str>,
	pub searching: bool,
	pub error: Option<&'a str>,
	pub open: bool,
	pub focused: bool,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Left box: loader, error, or the result table.
pub(crate) fn render_results(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	view: ResultsView<'_>,
) {
	let block = pane_block("Results", view.open, view.focused, view.theme);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if !view.open {
		return;
	}

	if view.searching {
		let loader = Throbber::default()
			.label("Loading...")
			.style(view.theme.empty)
			.throbber_style(view.theme.prompt);
		let row = Rect {
			y: inner.y + inner.height / 2,
			height: inner.height.min(1),
			..inner
		};
		frame.render_widget(loader.to_line(view.throbber_state).centered(), row);
		return;
	}

	if let Some(error) = view.error {
		centered_message(frame, inner, &format!("⛔ {error}"), view.theme.error);
		return;
	}

	if view.movies.is_empty() {
		centered_message(frame, inner, "Search for a movie", view.theme.empty);
		return;
	}

	let header = Row::new(vec![Cell::from("Title"), Cell::from("Year")])
		.style(view.theme.header)
		.bottom_margin(1);
	let rows = view.movies.iter().map(|movie| {
		let title = if view.open_id == Some(movie.id.as_str()) {
			Span::styled(movie.title.clone(), view.theme.highlight)
		} else {
			Span::raw(movie.title.clone())
		};
		Row::new(vec![Cell::from(title), Cell::from(movie.year.clone())])
	});
	let table = Table::new(rows, [Constraint::Fill(1), Constraint::Length(11)])
		.header(header)
		.column_spacing(1)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(view.theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, table_state);
}

/// Row index under a click, given the pane's outer area.
pub(crate) fn row_at(area: Rect, offset: usize, column: u16, row: u16) -> Option<usize> {
	let inner = Rect {
		x: area.x.saturating_add(1),
		y: area.y.saturating_add(1),
		width: area.width.saturating_sub(2),
		height: area.height.saturating_sub(2),
	};
	let first = inner.y.saturating_add(TABLE_HEADER_ROWS);
	if column < inner.x || column >= inner.right() || row < first || row >= inner.bottom() {
		return None;
	}
	Some(offset + usize::from(row - first))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn row_hit_skips_border_and_header() {
		let area = Rect::new(0, 0, 20, 10);
		assert_eq!(row_at(area, 0, 5, 0), None);
		assert_eq!(row_at(area, 0, 5, 2), None);
		assert_eq!(row_at(area, 0, 5, 3), Some(0));
		assert_eq!(row_at(area, 4, 5, 5), Some(6));
		assert_eq!(row_at(area, 0, 0, 5), None);
		assert_eq!(row_at(area, 0, 5, 9), None);
	}
}
