use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{WatchSummary, WatchedEntry, WatchlistError};

/// The user's watched movies in insertion order, at most one entry per id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<WatchedEntry>", into = "Vec<WatchedEntry>")]
pub struct Watchlist {
	entries: Vec<WatchedEntry>,
}

impl From<Vec<WatchedEntry>> for Watchlist {
	/// Later duplicates of an id are discarded.
	fn from(entries: Vec<WatchedEntry>) -> Self {
		let mut seen = HashSet::new();
		let before = entries.len();
		let entries: Vec<_> = entries
			.into_iter()
			.filter(|entry| seen.insert(entry.id.clone()))
			.collect();
		if entries.len() != before {
			log::warn!(
				"dropped {} duplicate watchlist entries",
				before - entries.len()
			);
		}
		Self { entries }
	}
}

impl From<Watchlist> for Vec<WatchedEntry> {
	fn from(list: Watchlist) -> Self {
		list.entries
	}
}

impl Watchlist {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn entries(&self) -> &[WatchedEntry] {
		&self.entries
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[must_use]
	pub fn get(&self, id: &str) -> Option<&WatchedEntry> {
		self.entries.iter().find(|entry| entry.id == id)
	}

	#[must_use]
	pub fn contains(&self, id: &str) -> bool {
		self.get(id).is_some()
	}

	/// Append an entry, rejecting ids that are already present.
	pub fn add(&mut self, entry: WatchedEntry) -> Result<(), WatchlistError> {
		if self.contains(&entry.id) {
			return Err(WatchlistError::Duplicate(entry.id));
		}
		self.entries.push(entry);
		Ok(())
	}

	/// Remove the entry for `id`, returning it if it existed.
	pub fn remove(&mut self, id: &str) -> Option<WatchedEntry> {
		let index = self.entries.iter().position(|entry| entry.id == id)?;
		Some(self.entries.remove(index))
	}

	#[must_use]
	pub fn summary(&self) -> WatchSummary {
		WatchSummary::from_entries(&self.entries)
	}
}
