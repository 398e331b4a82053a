use ratatui::style::{Color, Modifier};

/// Number of icons drawn when the owner does not ask for another scale.
pub const DEFAULT_MAX_RATING: u8 = 5;
/// Amber used for both filled and empty icons.
pub const DEFAULT_COLOR: Color = Color::Rgb(0xfc, 0xc4, 0x19);
/// Terminal cells reserved for every icon, including its trailing gap.
pub const DEFAULT_ICON_SIZE: u16 = 2;

/// Static configuration of a rating row.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingConfig {
	/// Total icon count; the scale runs from 1 to this value.
	pub max_rating: u8,
	/// Foreground colour for every icon and the readout.
	pub color: Color,
	/// Width in cells of a single icon slot.
	pub size: u16,
	/// Optional label per rating value, indexed from 1.
	pub messages: Vec<String>,
	/// Committed value a fresh [`RatingState`](crate::RatingState) starts with.
	pub default_rating: u8,
	/// Space separated modifier classes applied to the row.
	pub class_name: Option<String>,
}

impl Default for RatingConfig {
	fn default() -> Self {
		Self {
			max_rating: DEFAULT_MAX_RATING,
			color: DEFAULT_COLOR,
			size: DEFAULT_ICON_SIZE,
			messages: Vec::new(),
			default_rating: 0,
			class_name: None,
		}
	}
}

impl RatingConfig {
	/// Create a configuration for a scale of `max_rating` icons.
	///
	/// A scale always has at least one icon.
	#[must_use]
	pub fn new(max_rating: u8) -> Self {
		Self {
			max_rating: max_rating.max(1),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_color(mut self, color: Color) -> Self {
		self.color = color;
		self
	}

	#[must_use]
	pub fn with_size(mut self, size: u16) -> Self {
		self.size = size;
		self
	}

	#[must_use]
	pub fn with_messages<I, S>(mut self, messages: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.messages = messages.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_default_rating(mut self, rating: u8) -> Self {
		self.default_rating = rating;
		self
	}

	#[must_use]
	pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
		let class_name = class_name.into();
		self.class_name = if class_name.trim().is_empty() {
			None
		} else {
			Some(class_name)
		};
		self
	}

	/// Icon count, never zero.
	#[must_use]
	pub fn scale(&self) -> u8 {
		self.max_rating.max(1)
	}

	/// Width of one icon slot, never zero.
	#[must_use]
	pub fn icon_width(&self) -> u16 {
		self.size.max(1)
	}

	/// Whether a message exists for every value on the scale.
	#[must_use]
	pub fn has_full_message_set(&self) -> bool {
		!self.messages.is_empty() && self.messages.len() == usize::from(self.scale())
	}

	/// Text shown next to the icons for a rendered value.
	///
	/// Falls back to the number itself unless a complete message set is
	/// configured. A value of zero has no readout.
	#[must_use]
	pub fn readout_for(&self, value: u8) -> Option<String> {
		if value == 0 || value > self.scale() {
			return None;
		}
		if self.has_full_message_set() {
			return self.messages.get(usize::from(value - 1)).cloned();
		}
		Some(value.to_string())
	}

	/// Modifiers derived from [`class_name`](Self::class_name).
	#[must_use]
	pub fn modifiers(&self) -> Modifier {
		self.class_name
			.as_deref()
			.map(class_modifiers)
			.unwrap_or_else(Modifier::empty)
	}
}

/// Translate a space separated class list into text modifiers.
pub fn class_modifiers(class_name: &str) -> Modifier {
	class_name
		.split_whitespace()
		.fold(Modifier::empty(), |acc, class| {
			let modifier = match class.to_ascii_lowercase().as_str() {
				"bold" => Modifier::BOLD,
				"dim" => Modifier::DIM,
				"italic" => Modifier::ITALIC,
				"underlined" | "underline" => Modifier::UNDERLINED,
				"reversed" => Modifier::REVERSED,
				other => {
					log::debug!("ignoring unknown rating class `{other}`");
					Modifier::empty()
				}
			};
			acc | modifier
		})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn verdicts() -> RatingConfig {
		RatingConfig::new(5).with_messages(["terrible", "bad", "okay", "good", "amazing"])
	}

	#[test]
	fn readout_prefers_messages_when_complete() {
		let config = verdicts();
		assert_eq!(config.readout_for(4).as_deref(), Some("good"));
		assert_eq!(config.readout_for(1).as_deref(), Some("terrible"));
		assert_eq!(config.readout_for(0), None);
	}

	#[test]
	fn partial_message_sets_fall_back_to_numbers() {
		let config = RatingConfig::new(5).with_messages(["meh", "fine"]);
		assert!(!config.has_full_message_set());
		assert_eq!(config.readout_for(2).as_deref(), Some("2"));
		assert_eq!(config.readout_for(0), None);
	}

	#[test]
	fn zero_scale_is_promoted_to_one_icon() {
		let config = RatingConfig::new(0);
		assert_eq!(config.scale(), 1);
		assert_eq!(config.with_size(0).icon_width(), 1);
	}

	#[test]
	fn classes_map_to_modifiers() {
		let modifiers = class_modifiers("bold  Italic sparkly");
		assert!(modifiers.contains(Modifier::BOLD));
		assert!(modifiers.contains(Modifier::ITALIC));
		assert!(!modifiers.contains(Modifier::DIM));
	}

	#[test]
	fn blank_class_name_is_dropped() {
		let config = RatingConfig::default().with_class_name("   ");
		assert_eq!(config.class_name, None);
		assert_eq!(config.modifiers(), Modifier::empty());
	}
}
