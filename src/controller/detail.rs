use manimovies_catalog::MovieDetail;
use manimovies_rating::RatingState;

use crate::chrome::TitleGuard;

/// State of the open detail view.
///
/// Dropping the session releases everything it holds: its pending request is
/// cancelled by the controller and the title guard restores the window title.
pub struct DetailSession {
	pub(super) id: String,
	pub(super) request: u64,
	pub(super) movie: Option<MovieDetail>,
	pub(super) error: Option<String>,
	pub(super) rating: RatingState,
	pub(super) user_rating: u8,
	pub(super) revisions: u32,
	pub(super) title_guard: Option<TitleGuard>,
}

impl DetailSession {
	pub(super) fn new(id: String, request: u64, rating: RatingState) -> Self {
		Self {
			id,
			request,
			movie: None,
			error: None,
			rating,
			user_rating: rating.committed(),
			revisions: 0,
			title_guard: None,
		}
	}

	#[must_use]
	pub fn id(&self) -> &str {
		&self.id
	}

	#[must_use]
	pub fn movie(&self) -> Option<&MovieDetail> {
		self.movie.as_ref()
	}

	#[must_use]
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.movie.is_none() && self.error.is_none()
	}

	#[must_use]
	pub fn rating(&self) -> &RatingState {
		&self.rating
	}

	/// Last value reported by the rating row.
	#[must_use]
	pub fn user_rating(&self) -> u8 {
		self.user_rating
	}

	/// How many times the reported rating changed.
	#[must_use]
	pub fn revisions(&self) -> u32 {
		self.revisions
	}

	pub(super) fn record_rating(&mut self, value: u8) {
		if value != self.user_rating {
			self.revisions = self.revisions.saturating_add(1);
		}
		self.user_rating = value;
	}
}
