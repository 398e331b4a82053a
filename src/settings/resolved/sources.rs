use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) timeout: Option<SettingSource>,
	pub(crate) min_query_len: Option<SettingSource>,
	pub(crate) max_rating: Option<SettingSource>,
	pub(crate) default_rating: Option<SettingSource>,
	pub(crate) color: Option<SettingSource>,
	pub(crate) size: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		or_key(&self.timeout, "omdb.timeout_secs")
	}

	pub(crate) fn source_for_min_query_len(&self) -> SettingSource {
		or_key(&self.min_query_len, "search.min_query_len")
	}

	pub(crate) fn source_for_max_rating(&self) -> SettingSource {
		or_key(&self.max_rating, "rating.max_rating")
	}

	pub(crate) fn source_for_default_rating(&self) -> SettingSource {
		or_key(&self.default_rating, "rating.default_rating")
	}

	pub(crate) fn source_for_color(&self) -> SettingSource {
		or_key(&self.color, "rating.color")
	}

	pub(crate) fn source_for_size(&self) -> SettingSource {
		or_key(&self.size, "rating.size")
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.theme, "ui.theme")
	}
}
