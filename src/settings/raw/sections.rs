use std::path::PathBuf;

use anyhow::Result;
use manimovies::app_dirs;
use manimovies::catalog::omdb::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use manimovies::controller::{DEFAULT_APP_TITLE, DEFAULT_MIN_QUERY_LEN, DEFAULT_SEARCH_DEBOUNCE};
use manimovies::rating::{DEFAULT_ICON_SIZE, DEFAULT_MAX_RATING};
use manimovies::ui::style::theme::DEFAULT_THEME;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Written form of the default star colour.
const DEFAULT_STAR_COLOR: &str = "#fcc419";

/// `[omdb]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct OmdbSection {
	pub(super) api_key: Option<String>,
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

pub(super) struct OmdbResolution {
	pub(super) api_key: Option<String>,
	pub(super) base_url: String,
	pub(super) timeout_secs: u64,
}

impl OmdbSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(key) = cli.api_key.clone() {
			self.api_key = Some(key);
		}
		if let Some(url) = cli.base_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(timeout) = cli.timeout {
			self.timeout_secs = Some(timeout);
		}
	}

	pub(super) fn finalize(self) -> OmdbResolution {
		OmdbResolution {
			api_key: self
				.api_key
				.map(|key| key.trim().to_string())
				.filter(|key| !key.is_empty()),
			base_url: self
				.base_url
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT.as_secs()),
		}
	}
}

/// `[search]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) min_query_len: Option<usize>,
	pub(super) debounce_ms: Option<u64>,
}

pub(super) struct SearchResolution {
	pub(super) min_query_len: usize,
	pub(super) debounce_ms: u64,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(len) = cli.min_query_len {
			self.min_query_len = Some(len);
		}
		if let Some(debounce) = cli.debounce {
			self.debounce_ms = Some(debounce);
		}
	}

	pub(super) fn finalize(self) -> SearchResolution {
		let default_debounce = u64::try_from(DEFAULT_SEARCH_DEBOUNCE.as_millis()).unwrap_or(250);
		SearchResolution {
			min_query_len: self.min_query_len.unwrap_or(DEFAULT_MIN_QUERY_LEN),
			debounce_ms: self.debounce_ms.unwrap_or(default_debounce),
		}
	}
}

/// `[rating]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RatingSection {
	pub(super) max_rating: Option<u32>,
	pub(super) color: Option<String>,
	pub(super) size: Option<u16>,
	pub(super) messages: Option<Vec<String>>,
	pub(super) default_rating: Option<u32>,
	pub(super) class_name: Option<String>,
}

pub(super) struct RatingResolution {
	pub(super) max_rating: u32,
	pub(super) color: String,
	pub(super) size: u16,
	pub(super) messages: Vec<String>,
	pub(super) default_rating: u32,
	pub(super) class_name: Option<String>,
}

impl RatingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(max) = cli.max_rating {
			self.max_rating = Some(max);
		}
		if let Some(color) = cli.star_color.clone() {
			self.color = Some(color);
		}
		if let Some(size) = cli.star_size {
			self.size = Some(size);
		}
	}

	pub(super) fn finalize(self) -> RatingResolution {
		RatingResolution {
			max_rating: self.max_rating.unwrap_or(u32::from(DEFAULT_MAX_RATING)),
			color: self
				.color
				.map(|color| color.trim().to_string())
				.unwrap_or_else(|| DEFAULT_STAR_COLOR.to_string()),
			size: self.size.unwrap_or(DEFAULT_ICON_SIZE),
			messages: self.messages.unwrap_or_default(),
			default_rating: self.default_rating.unwrap_or(0),
			class_name: self
				.class_name
				.map(|name| name.trim().to_string())
				.filter(|name| !name.is_empty()),
		}
	}
}

/// `[ui]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) title: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme: String,
	pub(super) title: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		UiResolution {
			theme: self
				.theme
				.map(|theme| theme.trim().to_ascii_lowercase())
				.unwrap_or_else(|| DEFAULT_THEME.to_string()),
			title: self
				.title
				.filter(|title| !title.trim().is_empty())
				.unwrap_or_else(|| DEFAULT_APP_TITLE.to_string()),
		}
	}
}

/// `[storage]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct StorageSection {
	pub(super) watchlist: Option<PathBuf>,
}

impl StorageSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.watchlist.clone() {
			self.watchlist = Some(path);
		}
	}

	pub(super) fn finalize(self) -> Result<PathBuf> {
		match self.watchlist {
			Some(path) => Ok(path),
			None => app_dirs::default_watchlist_path(),
		}
	}
}
