//! File logging.
//!
//! The terminal belongs to the UI, so records go to a log file in the cache
//! directory. Failing to set up logging never stops the application.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::app_dirs;

/// Environment variable selecting the log level.
pub const LOG_LEVEL_ENV: &str = "MANIMOVIES_LOG";

/// Parse a level name, falling back to `Info`.
pub fn level_from_str(value: Option<&str>) -> LevelFilter {
	value
		.and_then(|value| value.trim().parse().ok())
		.unwrap_or(LevelFilter::Info)
}

/// Install the file logger and return the path it writes to.
///
/// Errors are swallowed after being reported on stderr; callers keep running
/// without logs.
pub fn initialize() -> Option<PathBuf> {
	let level = level_from_str(env::var(LOG_LEVEL_ENV).ok().as_deref());
	if level == LevelFilter::Off {
		return None;
	}

	let path = match app_dirs::get_cache_dir() {
		Ok(dir) => dir.join(app_dirs::LOG_FILE),
		Err(err) => {
			eprintln!("manimovies: logging disabled: {err}");
			return None;
		}
	};

	match initialize_at(&path, level) {
		Ok(()) => Some(path),
		Err(err) => {
			eprintln!("manimovies: logging disabled: {err:#}");
			None
		}
	}
}

/// Install the file logger at an explicit path.
pub fn initialize_at(path: &Path, level: LevelFilter) -> Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let config = ConfigBuilder::new()
		.add_filter_allow_str("manimovies")
		.build();
	WriteLogger::init(level, config, file).context("a logger is already installed")?;
	log::info!("manimovies {} starting", env!("CARGO_PKG_VERSION"));
	Ok(())
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn file_logger_writes_records_and_installs_once() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("logs").join(app_dirs::LOG_FILE);

		initialize_at(&path, LevelFilter::Debug).unwrap();
		log::debug!("watched list ready");

		let contents = fs::read_to_string(&path).unwrap();
		assert!(contents.contains("starting"));
		assert!(contents.contains("watched list ready"));
		assert!(initialize_at(&path, LevelFilter::Debug).is_err());
	}

	#[test]
	fn level_parsing_defaults_to_info() {
		assert_eq!(level_from_str(None), LevelFilter::Info);
		assert_eq!(level_from_str(Some("debug")), LevelFilter::Debug);
		assert_eq!(level_from_str(Some(" off ")), LevelFilter::Off);
		assert_eq!(level_from_str(Some("chatty")), LevelFilter::Info);
	}
}
