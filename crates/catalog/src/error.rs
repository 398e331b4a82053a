use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while talking to the movie database.
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("request failed: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("server responded with status {0}")]
	Status(reqwest::StatusCode),
	#[error("malformed response: {0}")]
	Decode(#[from] serde_json::Error),
	#[error("invalid record: {0}")]
	Invalid(String),
	#[error("{0}")]
	NotFound(String),
	/// Reported by sources that can abort a request midway. The background
	/// lanes drop superseded replies instead, so callers treat this as silence.
	#[error("request cancelled")]
	Cancelled,
}

impl FetchError {
	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Cancelled)
	}

	/// Message shown in place of search results.
	#[must_use]
	pub fn search_message(&self) -> String {
		match self {
			Self::NotFound(message) => message.clone(),
			Self::Cancelled => String::new(),
			_ => "Something went wrong with fetching movies".to_string(),
		}
	}

	/// Message shown in place of the detail view.
	#[must_use]
	pub fn detail_message(&self) -> String {
		match self {
			Self::NotFound(message) => message.clone(),
			Self::Cancelled => String::new(),
			_ => "Something went wrong with fetching movie details".to_string(),
		}
	}
}

/// Failures while editing or persisting the watched list.
#[derive(Debug, Error)]
pub enum WatchlistError {
	#[error("movie {0} is already in the watched list")]
	Duplicate(String),
	#[error("failed to access watchlist at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to decode watchlist at {path}: {source}")]
	Decode {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("failed to encode watchlist for {path}: {source}")]
	Encode {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}
