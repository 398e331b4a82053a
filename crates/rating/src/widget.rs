use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::StatefulWidget;
use unicode_width::UnicodeWidthStr;

use crate::{RatingConfig, RatingState};

pub const FILLED_ICON: &str = "★";
pub const EMPTY_ICON: &str = "☆";

/// Gap between the last icon slot and the readout.
const READOUT_GAP: u16 = 1;

/// A row of rating icons followed by an optional readout.
pub struct StarRating<'a> {
	config: &'a RatingConfig,
	style: Style,
	filled: &'a str,
	empty: &'a str,
	readout: bool,
}

impl<'a> StarRating<'a> {
	#[must_use]
	pub fn new(config: &'a RatingConfig) -> Self {
		Self {
			config,
			style: Style::default(),
			filled: FILLED_ICON,
			empty: EMPTY_ICON,
			readout: true,
		}
	}

	/// Base style; the configured colour and classes are layered on top.
	#[must_use]
	pub fn style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	#[must_use]
	pub fn icons(mut self, filled: &'a str, empty: &'a str) -> Self {
		self.filled = filled;
		self.empty = empty;
		self
	}

	#[must_use]
	pub fn readout(mut self, show: bool) -> Self {
		self.readout = show;
		self
	}
}

impl StatefulWidget for StarRating<'_> {
	type State = RatingState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		if area.is_empty() {
			return;
		}

		let style = self
			.style
			.fg(self.config.color)
			.add_modifier(self.config.modifiers());
		let slot = self.config.icon_width();
		let right = area.right();

		for icon in 1..=state.max_rating() {
			let x = area.x.saturating_add(u16::from(icon - 1).saturating_mul(slot));
			if x >= right {
				return;
			}
			let symbol = if state.is_filled(icon) {
				self.filled
			} else {
				self.empty
			};
			let width = slot.min(right - x);
			buf.set_stringn(x, area.y, symbol, usize::from(width), style);
		}

		if !self.readout {
			return;
		}
		let Some(text) = state.readout(self.config) else {
			return;
		};
		let x = area
			.x
			.saturating_add(stars_width(self.config))
			.saturating_add(READOUT_GAP);
		if x >= right || text.width() == 0 {
			return;
		}
		buf.set_stringn(x, area.y, text, usize::from(right - x), style);
	}
}

fn stars_width(config: &RatingConfig) -> u16 {
	u16::from(config.scale()).saturating_mul(config.icon_width())
}

/// Cells needed to draw the icons and the widest possible readout.
#[must_use]
pub fn row_width(config: &RatingConfig) -> u16 {
	let widest = (1..=config.scale())
		.filter_map(|value| config.readout_for(value))
		.map(|text| text.width())
		.max()
		.unwrap_or(0);
	let readout = u16::try_from(widest).unwrap_or(u16::MAX);
	stars_width(config)
		.saturating_add(READOUT_GAP)
		.saturating_add(readout)
}

/// Map a terminal cell to the 1-indexed icon drawn there, if any.
#[must_use]
pub fn icon_at(config: &RatingConfig, area: Rect, column: u16, row: u16) -> Option<u8> {
	if area.is_empty() || row != area.y || column < area.x || column >= area.right() {
		return None;
	}
	let slot = (column - area.x) / config.icon_width();
	let icon = u8::try_from(slot).ok()?.checked_add(1)?;
	(icon <= config.scale()).then_some(icon)
}
