use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Result, bail};
use manimovies::catalog::OmdbConfig;
use manimovies::controller::ControllerConfig;
use manimovies::rating::{DEFAULT_COLOR, RatingConfig};
use manimovies::ui::style::{Theme, by_name, default_theme};
use ratatui::style::Color;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub api_key: Option<String>,
	pub base_url: String,
	pub timeout_secs: u64,
	pub min_query_len: usize,
	pub debounce_ms: u64,
	pub max_rating: u32,
	pub star_color: String,
	pub star_size: u16,
	pub messages: Vec<String>,
	pub default_rating: u32,
	pub class_name: Option<String>,
	pub theme: String,
	pub title: String,
	pub watchlist: PathBuf,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}

	#[must_use]
	pub fn rating_config(&self) -> RatingConfig {
		let max_rating = u8::try_from(self.max_rating).unwrap_or(u8::MAX);
		let default_rating = u8::try_from(self.default_rating).unwrap_or(0);
		let mut config = RatingConfig::new(max_rating)
			.with_color(Color::from_str(&self.star_color).unwrap_or(DEFAULT_COLOR))
			.with_size(self.star_size)
			.with_messages(self.messages.iter().cloned())
			.with_default_rating(default_rating);
		if let Some(class_name) = &self.class_name {
			config = config.with_class_name(class_name.clone());
		}
		config
	}

	#[must_use]
	pub fn controller_config(&self) -> ControllerConfig {
		ControllerConfig {
			min_query_len: self.min_query_len,
			search_debounce: Duration::from_millis(self.debounce_ms),
			rating: self.rating_config(),
			app_title: self.title.clone(),
		}
	}

	/// Connection settings for the OMDb client.
	///
	/// Fails when no API key was configured anywhere.
	pub fn omdb_config(&self) -> Result<OmdbConfig> {
		let Some(api_key) = &self.api_key else {
			bail!(
				"no OMDb API key configured; pass --api-key, set MANIMOVIES__OMDB__API_KEY \
				 or add omdb.api_key to a config file"
			);
		};
		Ok(OmdbConfig {
			api_key: api_key.clone(),
			base_url: self.base_url.clone(),
			timeout: Duration::from_secs(self.timeout_secs),
		})
	}

	#[must_use]
	pub fn theme(&self) -> Theme {
		by_name(&self.theme).unwrap_or_else(default_theme)
	}
}
