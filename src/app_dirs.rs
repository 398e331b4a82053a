//! Resolve configuration, cache, and data directories for `manimovies`.
//!
//! Environment overrides win; otherwise the platform locations from the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "manimovies";
const APPLICATION: &str = "manimovies";

const CONFIG_DIR_ENV: &str = "MANIMOVIES_CONFIG_DIR";
const DATA_DIR_ENV: &str = "MANIMOVIES_DATA_DIR";
const CACHE_DIR_ENV: &str = "MANIMOVIES_CACHE_DIR";

/// File name of the persisted watched list inside the data directory.
pub const WATCHLIST_FILE: &str = "watched.json";
/// File name of the log inside the cache directory.
pub const LOG_FILE: &str = "manimovies.log";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for manimovies"))
}

/// An empty override counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding the watched list.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Directory holding the log file.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.cache_dir().to_path_buf())
}

/// Default location of the persisted watched list.
pub fn default_watchlist_path() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(WATCHLIST_FILE))
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn watchlist_lives_in_overridden_data_dir() {
		let dir = tempdir().unwrap();
		let previous = env::var_os(DATA_DIR_ENV);
		// SAFETY: no other test reads this variable.
		unsafe {
			env::set_var(DATA_DIR_ENV, dir.path());
		}

		let path = default_watchlist_path();

		// SAFETY: restoring the value captured above.
		unsafe {
			match previous {
				Some(value) => env::set_var(DATA_DIR_ENV, value),
				None => env::remove_var(DATA_DIR_ENV),
			}
		}
		assert_eq!(path.unwrap(), dir.path().join(WATCHLIST_FILE));
	}
}
