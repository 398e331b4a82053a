use std::str::FromStr;

use manimovies::ui::style::by_name;
use ratatui::style::Color;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Largest scale the rating row supports.
const MAX_SCALE: u32 = 10;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.timeout_secs == 0 {
		return Err(ConfigError::invalid(
			"omdb.timeout_secs",
			config.timeout_secs.to_string(),
			sources.source_for_timeout(),
			"must be at least 1",
		));
	}

	if config.min_query_len == 0 {
		return Err(ConfigError::invalid(
			"search.min_query_len",
			config.min_query_len.to_string(),
			sources.source_for_min_query_len(),
			"must be at least 1",
		));
	}

	if !(1..=MAX_SCALE).contains(&config.max_rating) {
		return Err(ConfigError::invalid(
			"rating.max_rating",
			config.max_rating.to_string(),
			sources.source_for_max_rating(),
			format!("must be between 1 and {MAX_SCALE}"),
		));
	}

	if config.default_rating > config.max_rating {
		return Err(ConfigError::invalid(
			"rating.default_rating",
			config.default_rating.to_string(),
			sources.source_for_default_rating(),
			format!("must not exceed rating.max_rating ({})", config.max_rating),
		));
	}

	if config.star_size == 0 {
		return Err(ConfigError::invalid(
			"rating.size",
			config.star_size.to_string(),
			sources.source_for_size(),
			"must be at least 1",
		));
	}

	if Color::from_str(&config.star_color).is_err() {
		return Err(ConfigError::invalid(
			"rating.color",
			config.star_color.clone(),
			sources.source_for_color(),
			"expected a colour name, an index or #rrggbb",
		));
	}

	if by_name(&config.theme).is_none() {
		let known: Vec<_> = manimovies::ui::style::names().collect();
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme, expected one of: {}", known.join(", ")),
		));
	}

	Ok(())
}
