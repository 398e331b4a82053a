use manimovies_catalog::MovieDetail;
use manimovies_rating::{RatingConfig, StarRating, row_width};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};

use super::{centered_message, pane_block};
use crate::controller::DetailSession;
use crate::ui::style::Theme;

pub(crate) struct DetailContext<'a> {
	pub session: &'a DetailSession,
	pub watched_rating: Option<u8>,
	pub can_add: bool,
	pub rating: &'a RatingConfig,
	pub focused: bool,
	pub throbber_state: &'a ThrobberState,
	pub theme: &'a Theme,
}

/// Right box while a title is open. Returns where the rating row was drawn.
pub(crate) fn render_detail(frame: &mut Frame, area: Rect, ctx: DetailContext<'_>) -> Option<Rect> {
	let block = pane_block("Movie", true, ctx.focused, ctx.theme);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if let Some(error) = ctx.session.error() {
		centered_message(frame, inner, &format!("⛔ {error}"), ctx.theme.error);
		return None;
	}
	let Some(movie) = ctx.session.movie() else {
		let loader = Throbber::default()
			.label("Loading...")
			.style(ctx.theme.empty)
			.throbber_style(ctx.theme.prompt);
		let row = Rect {
			y: inner.y + inner.height / 2,
			height: inner.height.min(1),
			..inner
		};
		frame.render_widget(loader.to_line(ctx.throbber_state).centered(), row);
		return None;
	};

	let sections = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(5),
			Constraint::Length(1),
			Constraint::Length(2),
			Constraint::Min(0),
		])
		.split(inner);

	frame.render_widget(Paragraph::new(header_lines(movie, ctx.theme)), sections[0]);

	let rating_area = match ctx.watched_rating {
		Some(rated) => {
			let line = Line::from(vec![
				Span::raw(format!("You've already rated this movie {rated} ")),
				Span::styled("★", ratatui::style::Style::new().fg(ctx.rating.color)),
			]);
			frame.render_widget(Paragraph::new(line), sections[1]);
			None
		}
		None => {
			let row = Rect {
				width: row_width(ctx.rating).min(sections[1].width),
				..sections[1]
			};
			let mut state = *ctx.session.rating();
			frame.render_stateful_widget(StarRating::new(ctx.rating), row, &mut state);
			if ctx.can_add {
				let add = Line::from(Span::styled("[a] + Add to list", ctx.theme.prompt));
				frame.render_widget(Paragraph::new(add), sections[2]);
			}
			Some(row)
		}
	};

	frame.render_widget(
		Paragraph::new(body_lines(movie, ctx.theme)).wrap(Wrap { trim: true }),
		sections[3],
	);

	rating_area
}

fn header_lines<'a>(movie: &'a MovieDetail, theme: &Theme) -> Vec<Line<'a>> {
	let released = movie.released.as_deref().unwrap_or("Unknown release");
	let mut facts = released.to_string();
	if let Some(runtime) = &movie.runtime {
		facts.push_str(" • ");
		facts.push_str(runtime);
	}
	let imdb = movie
		.imdb_rating
		.map(|rating| format!("⭐ {rating} IMDb rating"))
		.unwrap_or_else(|| "⭐ no IMDb rating".to_string());

	vec![
		Line::from(Span::styled(
			movie.title.as_str(),
			theme.highlight.add_modifier(Modifier::BOLD),
		)),
		Line::from(Span::styled(facts, theme.empty)),
		Line::from(movie.genre.as_deref().unwrap_or_default()),
		Line::from(imdb),
		Line::default(),
	]
}

fn body_lines<'a>(movie: &'a MovieDetail, theme: &Theme) -> Vec<Line<'a>> {
	let mut lines = Vec::new();
	if let Some(plot) = &movie.plot {
		lines.push(Line::from(Span::styled(
			plot.as_str(),
			theme.empty.add_modifier(Modifier::ITALIC),
		)));
	}
	if let Some(actors) = &movie.actors {
		lines.push(Line::from(format!("Starring {actors}")));
	}
	if let Some(director) = &movie.director {
		lines.push(Line::from(format!("Directed by {director}")));
	}
	lines
}
