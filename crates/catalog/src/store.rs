use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::{Watchlist, WatchlistError};

/// A single persistence slot holding the whole watched list.
pub trait WatchlistStore {
	/// Read the stored list; a slot that was never written yields an empty list.
	fn load(&self) -> Result<Watchlist, WatchlistError>;

	/// Replace the stored list wholesale.
	fn save(&self, list: &Watchlist) -> Result<(), WatchlistError>;
}

/// JSON file on disk, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
}

impl JsonFileStore {
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn io_error(&self, source: io::Error) -> WatchlistError {
		WatchlistError::Io {
			path: self.path.clone(),
			source,
		}
	}

	fn temp_path(&self) -> PathBuf {
		let mut name = self
			.path
			.file_name()
			.map(|name| name.to_os_string())
			.unwrap_or_else(|| "watched.json".into());
		name.push(".tmp");
		self.path.with_file_name(name)
	}
}

impl WatchlistStore for JsonFileStore {
	fn load(&self) -> Result<Watchlist, WatchlistError> {
		let contents = match fs::read_to_string(&self.path) {
			Ok(contents) => contents,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Watchlist::new()),
			Err(err) => return Err(self.io_error(err)),
		};
		if contents.trim().is_empty() {
			return Ok(Watchlist::new());
		}
		serde_json::from_str(&contents).map_err(|source| WatchlistError::Decode {
			path: self.path.clone(),
			source,
		})
	}

	fn save(&self, list: &Watchlist) -> Result<(), WatchlistError> {
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
		}

		let json = serde_json::to_vec_pretty(list).map_err(|source| WatchlistError::Encode {
			path: self.path.clone(),
			source,
		})?;

		let temp = self.temp_path();
		if let Err(err) = write_and_replace(&temp, &self.path, &json) {
			if let Err(cleanup) = fs::remove_file(&temp)
				&& cleanup.kind() != io::ErrorKind::NotFound
			{
				log::warn!("failed to remove {}: {cleanup}", temp.display());
			}
			return Err(self.io_error(err));
		}
		log::debug!(
			"saved {} watched entries to {}",
			list.len(),
			self.path.display()
		);
		Ok(())
	}
}

fn write_and_replace(temp: &Path, target: &Path, contents: &[u8]) -> io::Result<()> {
	let mut file = fs::File::create(temp)?;
	file.write_all(contents)?;
	file.sync_all()?;
	drop(file);
	fs::rename(temp, target)
}

/// In-process store; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	inner: Arc<Mutex<MemorySlot>>,
}

#[derive(Debug, Default)]
struct MemorySlot {
	list: Watchlist,
	saves: usize,
}

impl MemoryStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_list(list: Watchlist) -> Self {
		let store = Self::new();
		store.slot().list = list;
		store
	}

	fn slot(&self) -> std::sync::MutexGuard<'_, MemorySlot> {
		self.inner.lock().unwrap_or_else(PoisonError::into_inner)
	}

	/// Snapshot of the last saved list.
	#[must_use]
	pub fn snapshot(&self) -> Watchlist {
		self.slot().list.clone()
	}

	/// Number of saves performed so far.
	#[must_use]
	pub fn saves(&self) -> usize {
		self.slot().saves
	}
}

impl WatchlistStore for MemoryStore {
	fn load(&self) -> Result<Watchlist, WatchlistError> {
		Ok(self.snapshot())
	}

	fn save(&self, list: &Watchlist) -> Result<(), WatchlistError> {
		let mut slot = self.slot();
		slot.list = list.clone();
		slot.saves += 1;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;
	use crate::WatchedEntry;

	fn sample() -> Watchlist {
		let mut list = Watchlist::new();
		list.add(WatchedEntry {
			id: "tt1375666".into(),
			title: "Inception".into(),
			year: "2010".into(),
			poster: Some("https://img/inception.jpg".into()),
			imdb_rating: Some(8.8),
			runtime: Some(148),
			user_rating: 5,
			rating_revisions: 2,
		})
		.unwrap();
		list
	}

	#[test]
	fn missing_file_loads_empty() {
		let dir = tempdir().unwrap();
		let store = JsonFileStore::new(dir.path().join("absent.json"));
		assert!(store.load().unwrap().is_empty());
	}

	#[test]
	fn saved_list_is_read_back() {
		let dir = tempdir().unwrap();
		let store = JsonFileStore::new(dir.path().join("nested").join("watched.json"));
		store.save(&sample()).unwrap();

		let loaded = store.load().unwrap();
		assert_eq!(loaded, sample());
		assert!(!dir.path().join("nested").join("watched.json.tmp").exists());
	}

	#[test]
	fn save_overwrites_previous_contents() {
		let dir = tempdir().unwrap();
		let store = JsonFileStore::new(dir.path().join("watched.json"));
		store.save(&sample()).unwrap();
		store.save(&Watchlist::new()).unwrap();
		assert!(store.load().unwrap().is_empty());
	}

	#[test]
	fn failed_replace_leaves_no_temp_file() {
		let dir = tempdir().unwrap();
		let target = dir.path().join("watched.json");
		fs::create_dir(&target).unwrap();
		fs::write(target.join("keep"), "occupied").unwrap();

		let store = JsonFileStore::new(&target);
		let err = store.save(&sample()).unwrap_err();
		assert!(matches!(err, WatchlistError::Io { .. }));
		assert!(!dir.path().join("watched.json.tmp").exists());
		assert!(target.is_dir());
	}

	#[test]
	fn corrupt_file_reports_path() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("watched.json");
		fs::write(&path, "{not json").unwrap();
		let err = JsonFileStore::new(&path).load().unwrap_err();
		assert!(err.to_string().contains("watched.json"));
	}

	#[test]
	fn memory_store_counts_saves() {
		let store = MemoryStore::new();
		let handle = store.clone();
		store.save(&sample()).unwrap();
		assert_eq!(handle.saves(), 1);
		assert_eq!(handle.snapshot(), sample());
	}
}
