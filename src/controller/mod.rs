//! Search and detail orchestration.
//!
//! The [`Controller`] owns the query, the result list, the open detail view
//! and the watched list. Network work runs on two [`Lane`]s; the controller
//! applies their replies on the UI thread through [`Controller::pump`].

mod detail;

use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use manimovies_catalog::{
	FetchError, MovieDetail, MovieSource, MovieSummary, WatchSummary, WatchedEntry, Watchlist,
	WatchlistError, WatchlistStore,
};
use manimovies_rating::{RatingConfig, RatingState};

pub use detail::DetailSession;

use crate::chrome::{SharedChrome, TitleGuard};
use crate::fetch::Lane;

pub const DEFAULT_MIN_QUERY_LEN: usize = 3;
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);
pub const DEFAULT_APP_TITLE: &str = "ManiMovies";

/// Whether `query` is too short to be worth a search request once trimmed.
#[must_use]
pub fn query_too_short(query: &str, min_query_len: usize) -> bool {
	query.trim().chars().count() < min_query_len
}

type SearchLane = Lane<String, Result<Vec<MovieSummary>, FetchError>>;
type DetailLane = Lane<String, Result<MovieDetail, FetchError>>;

/// Tunables for the [`Controller`].
#[derive(Debug, Clone)]
pub struct ControllerConfig {
	/// Trimmed queries shorter than this never reach the network.
	pub min_query_len: usize,
	pub search_debounce: Duration,
	pub rating: RatingConfig,
	/// Window title while no detail is open.
	pub app_title: String,
}

impl Default for ControllerConfig {
	fn default() -> Self {
		Self {
			min_query_len: DEFAULT_MIN_QUERY_LEN,
			search_debounce: DEFAULT_SEARCH_DEBOUNCE,
			rating: RatingConfig::default(),
			app_title: DEFAULT_APP_TITLE.to_string(),
		}
	}
}

pub struct Controller {
	config: ControllerConfig,
	query: String,
	movies: Vec<MovieSummary>,
	error: Option<String>,
	search: SearchLane,
	details: DetailLane,
	detail: Option<DetailSession>,
	watched: Watchlist,
	store: Box<dyn WatchlistStore>,
	chrome: SharedChrome,
	status: Option<String>,
}

impl Controller {
	/// Start both request lanes and read the watched list from `store`.
	pub fn new(
		config: ControllerConfig,
		source: Arc<dyn MovieSource>,
		store: Box<dyn WatchlistStore>,
		chrome: SharedChrome,
	) -> Result<Self> {
		let watched = store.load().context("failed to load the watched list")?;
		log::info!("loaded {} watched entries", watched.len());

		let search_source = Arc::clone(&source);
		let search = Lane::spawn("search", config.search_debounce, move |query: String| {
			search_source.search(&query)
		})
		.context("failed to start the search worker")?;
		let details = Lane::spawn("details", Duration::ZERO, move |id: String| {
			source.details(&id)
		})
		.context("failed to start the details worker")?;

		chrome.borrow_mut().set_title(&config.app_title);

		Ok(Self {
			config,
			query: String::new(),
			movies: Vec::new(),
			error: None,
			search,
			details,
			detail: None,
			watched,
			store,
			chrome,
			status: None,
		})
	}

	#[must_use]
	pub fn config(&self) -> &ControllerConfig {
		&self.config
	}

	#[must_use]
	pub fn rating_config(&self) -> &RatingConfig {
		&self.config.rating
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn movies(&self) -> &[MovieSummary] {
		&self.movies
	}

	#[must_use]
	pub fn result_count(&self) -> usize {
		self.movies.len()
	}

	#[must_use]
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	#[must_use]
	pub fn is_searching(&self) -> bool {
		self.search.is_in_flight()
	}

	#[must_use]
	pub fn detail(&self) -> Option<&DetailSession> {
		self.detail.as_ref()
	}

	#[must_use]
	pub fn open_id(&self) -> Option<&str> {
		self.detail.as_ref().map(DetailSession::id)
	}

	#[must_use]
	pub fn watched(&self) -> &Watchlist {
		&self.watched
	}

	#[must_use]
	pub fn summary(&self) -> WatchSummary {
		self.watched.summary()
	}

	/// One-line message about the last watched list change, if any.
	#[must_use]
	pub fn status(&self) -> Option<&str> {
		self.status.as_deref()
	}

	pub fn clear_status(&mut self) {
		self.status = None;
	}

	/// Show `message` in the status line.
	pub fn report(&mut self, message: impl Into<String>) {
		self.status = Some(message.into());
	}

	/// Rating previously given to the open title, when it is already watched.
	#[must_use]
	pub fn watched_rating(&self) -> Option<u8> {
		let id = self.open_id()?;
		self.watched.get(id).map(|entry| entry.user_rating)
	}

	/// React to an edit of the search box.
	pub fn set_query(&mut self, query: &str) {
		if query == self.query {
			return;
		}
		self.query = query.to_string();

		if query_too_short(&self.query, self.config.min_query_len) {
			self.search.cancel();
			self.movies.clear();
			self.error = None;
			return;
		}

		let trimmed = self.query.trim().to_string();
		self.close_detail();
		self.error = None;
		let id = self.search.issue(trimmed);
		log::debug!("issued search {id} for {:?}", self.query.trim());
	}

	/// Apply replies from both lanes. Returns whether anything changed.
	pub fn pump(&mut self) -> bool {
		let mut changed = false;

		while let Some(reply) = self.search.try_recv() {
			changed = true;
			match reply.outcome {
				Ok(movies) => {
					log::debug!("search {} returned {} movies", reply.id, movies.len());
					self.movies = movies;
					self.error = None;
				}
				Err(err) if err.is_cancelled() => {}
				Err(err) => {
					log::warn!("search {} failed: {err}", reply.id);
					self.movies.clear();
					self.error = Some(err.search_message());
				}
			}
		}

		while let Some(reply) = self.details.try_recv() {
			let Some(session) = self.detail.as_mut() else {
				continue;
			};
			if session.request != reply.id {
				continue;
			}
			changed = true;
			match reply.outcome {
				Ok(movie) => {
					session.title_guard = Some(TitleGuard::new(
						Rc::clone(&self.chrome),
						&movie.title,
						self.config.app_title.clone(),
					));
					session.movie = Some(movie);
				}
				Err(err) if err.is_cancelled() => {}
				Err(err) => {
					log::warn!("details for {} failed: {err}", session.id);
					session.error = Some(err.detail_message());
				}
			}
		}

		changed
	}

	/// Open the detail view for `id`, or close it when `id` is already open.
	pub fn select(&mut self, id: &str) {
		if self.open_id() == Some(id) {
			self.close_detail();
			return;
		}

		self.close_detail();
		let request = self.details.issue(id.to_string());
		let rating = RatingState::new(&self.config.rating);
		self.detail = Some(DetailSession::new(id.to_string(), request, rating));
	}

	/// Close the detail view. Returns `false` when nothing was open.
	pub fn close_detail(&mut self) -> bool {
		match self.detail.take() {
			Some(session) => {
				self.details.cancel();
				log::debug!("closed detail {}", session.id);
				true
			}
			None => false,
		}
	}

	fn rateable_session(&mut self) -> Option<&mut DetailSession> {
		let session = self.detail.as_mut()?;
		if session.movie.is_none() || self.watched.contains(&session.id) {
			return None;
		}
		Some(session)
	}

	pub fn hover_rating(&mut self, icon: u8) -> bool {
		self.rateable_session()
			.is_some_and(|session| session.rating.pointer_enter(icon))
	}

	pub fn leave_rating(&mut self) {
		if let Some(session) = self.rateable_session() {
			session.rating.pointer_leave();
		}
	}

	pub fn hover_next(&mut self) {
		if let Some(session) = self.rateable_session() {
			session.rating.hover_next();
		}
	}

	pub fn hover_previous(&mut self) {
		if let Some(session) = self.rateable_session() {
			session.rating.hover_previous();
		}
	}

	/// Commit `icon` as the rating of the open title.
	pub fn rate(&mut self, icon: u8) -> bool {
		let Some(session) = self.rateable_session() else {
			return false;
		};
		let mut reported = None;
		session.rating.activate(icon, |value| reported = Some(value));
		match reported {
			Some(value) => {
				session.record_rating(value);
				true
			}
			None => false,
		}
	}

	/// Commit whatever the rating row currently previews.
	pub fn rate_hovered(&mut self) -> bool {
		let Some(session) = self.rateable_session() else {
			return false;
		};
		let mut reported = None;
		session
			.rating
			.activate_rendered(|value| reported = Some(value));
		match reported {
			Some(value) => {
				session.record_rating(value);
				true
			}
			None => false,
		}
	}

	/// Whether the open title can be added to the watched list.
	#[must_use]
	pub fn can_add(&self) -> bool {
		self.detail.as_ref().is_some_and(|session| {
			session.movie.is_some()
				&& session.user_rating > 0
				&& !self.watched.contains(&session.id)
		})
	}

	/// Add the open title with its rating and return to the list.
	///
	/// `Ok(false)` means there was nothing to add yet: no loaded detail or no
	/// rating chosen.
	pub fn add_watched(&mut self) -> Result<bool, WatchlistError> {
		let Some(session) = self.detail.as_ref() else {
			return Ok(false);
		};
		let Some(movie) = session.movie.as_ref() else {
			return Ok(false);
		};
		if self.watched.contains(&session.id) {
			return Err(WatchlistError::Duplicate(session.id.clone()));
		}
		if session.user_rating == 0 {
			return Ok(false);
		}

		let entry = WatchedEntry::from_detail(movie, session.user_rating, session.revisions);
		let title = entry.title.clone();
		self.watched.add(entry)?;
		log::info!("added {title} to the watched list");
		self.status = Some(format!("Added {title}"));
		self.persist();
		self.close_detail();
		Ok(true)
	}

	/// Delete the watched entry for `id`.
	pub fn remove_watched(&mut self, id: &str) -> bool {
		let Some(entry) = self.watched.remove(id) else {
			return false;
		};
		log::info!("removed {} from the watched list", entry.title);
		self.status = Some(format!("Removed {}", entry.title));
		self.persist();
		true
	}

	fn persist(&mut self) {
		if let Err(err) = self.store.save(&self.watched) {
			log::error!("failed to save the watched list: {err}");
			self.status = Some(format!("Could not save watched list: {err}"));
		}
	}
}
