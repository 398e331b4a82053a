use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use manimovies::app_dirs;
use manimovies::catalog::omdb::DEFAULT_BASE_URL;

fn describe(location: Result<PathBuf>) -> String {
	location.map_or_else(
		|err| format!("unavailable ({err})"),
		|path| path.display().to_string(),
	)
}

/// Version banner listing where settings, the watched list and logs live.
pub(super) fn long_version() -> &'static str {
	let locations = [
		("config", describe(app_dirs::get_config_dir())),
		("watched list", describe(app_dirs::default_watchlist_path())),
		(
			"log",
			describe(app_dirs::get_cache_dir().map(|dir| dir.join(app_dirs::LOG_FILE))),
		),
	];

	let mut banner = format!("{}\n", env!("CARGO_PKG_VERSION"));
	for (label, location) in locations {
		let _ = writeln!(banner, "{label}: {location}");
	}
	let _ = write!(banner, "default endpoint: {DEFAULT_BASE_URL}");

	Box::leak(banner.into_boxed_str())
}

pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Yellow.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::BrightWhite.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::Magenta.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
