//! Interactive star rating input for ratatui applications.
//!
//! The crate is split into the immutable [`RatingConfig`], the interaction
//! state in [`RatingState`] and the [`StarRating`] widget that draws a row of
//! icons for that state. Owners feed pointer and keyboard events into the state
//! and receive committed ratings through the callback passed to
//! [`RatingState::activate`].

mod config;
mod state;
mod widget;

pub use config::{
	DEFAULT_COLOR, DEFAULT_ICON_SIZE, DEFAULT_MAX_RATING, RatingConfig, class_modifiers,
};
pub use state::RatingState;
pub use widget::{EMPTY_ICON, FILLED_ICON, StarRating, icon_at, row_width};
