use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod sections;

use sections::{OmdbSection, RatingSection, SearchSection, StorageSection, UiSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	omdb: OmdbSection,
	search: SearchSection,
	rating: RatingSection,
	ui: UiSection,
	storage: StorageSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.omdb.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.rating.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.storage.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			timeout: detect_source(
				cli.timeout.is_some(),
				self.omdb.timeout_secs.is_some(),
				"MANIMOVIES__OMDB__TIMEOUT_SECS",
				"--timeout",
				"omdb.timeout_secs",
			),
			min_query_len: detect_source(
				cli.min_query_len.is_some(),
				self.search.min_query_len.is_some(),
				"MANIMOVIES__SEARCH__MIN_QUERY_LEN",
				"--min-query-len",
				"search.min_query_len",
			),
			max_rating: detect_source(
				cli.max_rating.is_some(),
				self.rating.max_rating.is_some(),
				"MANIMOVIES__RATING__MAX_RATING",
				"--max-rating",
				"rating.max_rating",
			),
			default_rating: detect_source(
				false,
				self.rating.default_rating.is_some(),
				"MANIMOVIES__RATING__DEFAULT_RATING",
				"",
				"rating.default_rating",
			),
			color: detect_source(
				cli.star_color.is_some(),
				self.rating.color.is_some(),
				"MANIMOVIES__RATING__COLOR",
				"--star-color",
				"rating.color",
			),
			size: detect_source(
				cli.star_size.is_some(),
				self.rating.size.is_some(),
				"MANIMOVIES__RATING__SIZE",
				"--star-size",
				"rating.size",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"MANIMOVIES__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let omdb = self.omdb.finalize();
		let search = self.search.finalize();
		let rating = self.rating.finalize();
		let ui = self.ui.finalize();
		let watchlist = self.storage.finalize()?;

		let config = ResolvedConfig {
			api_key: omdb.api_key,
			base_url: omdb.base_url,
			timeout_secs: omdb.timeout_secs,
			min_query_len: search.min_query_len,
			debounce_ms: search.debounce_ms,
			max_rating: rating.max_rating,
			star_color: rating.color,
			star_size: rating.size,
			messages: rating.messages,
			default_rating: rating.default_rating,
			class_name: rating.class_name,
			theme: ui.theme,
			title: ui.title,
			watchlist,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
