use crate::RatingConfig;

/// Interaction state of a rating row.
///
/// `committed` survives until the next activation or until the owner builds a
/// new state. `hovered` only drives the preview and is cleared when the
/// pointer leaves the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingState {
	max: u8,
	committed: u8,
	hovered: u8,
}

impl Default for RatingState {
	fn default() -> Self {
		Self::new(&RatingConfig::default())
	}
}

impl RatingState {
	/// Fresh state seeded with the configured default rating.
	#[must_use]
	pub fn new(config: &RatingConfig) -> Self {
		let max = config.scale();
		Self {
			max,
			committed: config.default_rating.min(max),
			hovered: 0,
		}
	}

	#[must_use]
	pub fn max_rating(&self) -> u8 {
		self.max
	}

	#[must_use]
	pub fn committed(&self) -> u8 {
		self.committed
	}

	#[must_use]
	pub fn hovered(&self) -> u8 {
		self.hovered
	}

	/// Value currently shown: the hover preview if any, else the committed one.
	#[must_use]
	pub fn rendered(&self) -> u8 {
		if self.hovered != 0 {
			self.hovered
		} else {
			self.committed
		}
	}

	/// Whether the 1-indexed `icon` draws filled.
	#[must_use]
	pub fn is_filled(&self, icon: u8) -> bool {
		icon >= 1 && icon <= self.rendered()
	}

	fn contains(&self, icon: u8) -> bool {
		(1..=self.max).contains(&icon)
	}

	/// Pointer entered `icon`. Returns `false` when the icon is off the scale.
	pub fn pointer_enter(&mut self, icon: u8) -> bool {
		if !self.contains(icon) {
			return false;
		}
		self.hovered = icon;
		true
	}

	/// Pointer left the row.
	pub fn pointer_leave(&mut self) {
		self.hovered = 0;
	}

	/// Commit `icon` and report it to `on_rate`.
	///
	/// The callback runs synchronously, exactly once, and only for icons on the
	/// scale.
	pub fn activate<F>(&mut self, icon: u8, on_rate: F) -> bool
	where
		F: FnOnce(u8),
	{
		if !self.contains(icon) {
			return false;
		}
		self.committed = icon;
		on_rate(icon);
		true
	}

	/// Commit whatever is currently rendered, typically after keyboard hovering.
	pub fn activate_rendered<F>(&mut self, on_rate: F) -> bool
	where
		F: FnOnce(u8),
	{
		let icon = self.rendered();
		self.activate(icon, on_rate)
	}

	/// Move the hover preview one icon to the right.
	pub fn hover_next(&mut self) {
		let next = self.rendered().saturating_add(1).min(self.max);
		self.hovered = next;
	}

	/// Move the hover preview one icon to the left, stopping at the first.
	pub fn hover_previous(&mut self) {
		let previous = self.rendered().saturating_sub(1).max(1);
		self.hovered = previous;
	}

	/// Readout text for the rendered value.
	#[must_use]
	pub fn readout(&self, config: &RatingConfig) -> Option<String> {
		config.readout_for(self.rendered())
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;

	#[test]
	fn activation_commits_and_notifies_once_for_every_scale() {
		for max in 1..=10u8 {
			let config = RatingConfig::new(max);
			for icon in 1..=max {
				let mut state = RatingState::new(&config);
				let calls = RefCell::new(Vec::new());
				assert!(state.activate(icon, |value| calls.borrow_mut().push(value)));
				assert_eq!(state.committed(), icon);
				assert_eq!(calls.into_inner(), vec![icon]);
			}
		}
	}

	#[test]
	fn activation_off_the_scale_is_ignored() {
		let config = RatingConfig::new(5);
		let mut state = RatingState::new(&config);
		let mut calls = 0;
		assert!(!state.activate(0, |_| calls += 1));
		assert!(!state.activate(6, |_| calls += 1));
		assert_eq!(calls, 0);
		assert_eq!(state.committed(), 0);
	}

	#[test]
	fn leaving_restores_committed_value() {
		let config = RatingConfig::new(5);
		let mut state = RatingState::new(&config);

		state.pointer_enter(3);
		assert_eq!(state.rendered(), 3);
		state.pointer_leave();
		assert_eq!(state.rendered(), 0);

		state.activate(2, |_| {});
		state.pointer_enter(5);
		assert_eq!(state.rendered(), 5);
		assert!(state.is_filled(5));
		state.pointer_leave();
		assert_eq!(state.rendered(), 2);
		assert!(state.is_filled(2));
		assert!(!state.is_filled(3));
	}

	#[test]
	fn default_rating_is_clamped_to_scale() {
		let config = RatingConfig::new(3).with_default_rating(9);
		let state = RatingState::new(&config);
		assert_eq!(state.committed(), 3);
	}

	#[test]
	fn readout_follows_rendered_value() {
		let config =
			RatingConfig::new(5).with_messages(["terrible", "bad", "okay", "good", "amazing"]);
		let mut state = RatingState::new(&config);
		assert_eq!(state.readout(&config), None);

		let mut received = None;
		state.activate(4, |value| received = Some(value));
		assert_eq!(received, Some(4));
		assert_eq!(state.rendered(), 4);
		assert_eq!(state.readout(&config).as_deref(), Some("good"));

		state.pointer_enter(1);
		assert_eq!(state.readout(&config).as_deref(), Some("terrible"));
	}

	#[test]
	fn keyboard_hover_walks_the_scale() {
		let config = RatingConfig::new(3);
		let mut state = RatingState::new(&config);

		state.hover_previous();
		assert_eq!(state.hovered(), 1);
		state.hover_next();
		state.hover_next();
		state.hover_next();
		assert_eq!(state.hovered(), 3);

		let mut received = 0;
		assert!(state.activate_rendered(|value| received = value));
		assert_eq!(received, 3);
		assert_eq!(state.committed(), 3);
	}
}
