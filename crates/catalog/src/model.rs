//! Typed movie records.

use serde::{Deserialize, Serialize};

/// One hit from a title search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
	pub id: String,
	pub title: String,
	pub year: String,
	pub poster: Option<String>,
}

/// Full record for a single title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
	pub id: String,
	pub title: String,
	pub year: String,
	pub poster: Option<String>,
	pub genre: Option<String>,
	/// Runtime as the API reports it, e.g. `"148 min"`.
	pub runtime: Option<String>,
	pub runtime_minutes: Option<u32>,
	pub plot: Option<String>,
	pub actors: Option<String>,
	pub director: Option<String>,
	pub released: Option<String>,
	pub imdb_rating: Option<f64>,
}

/// A rated movie in the user's watched list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedEntry {
	pub id: String,
	pub title: String,
	pub year: String,
	#[serde(default)]
	pub poster: Option<String>,
	#[serde(default)]
	pub imdb_rating: Option<f64>,
	#[serde(default)]
	pub runtime: Option<u32>,
	pub user_rating: u8,
	/// How often the rating changed before the entry was confirmed.
	#[serde(default)]
	pub rating_revisions: u32,
}

impl WatchedEntry {
	#[must_use]
	pub fn from_detail(detail: &MovieDetail, user_rating: u8, rating_revisions: u32) -> Self {
		Self {
			id: detail.id.clone(),
			title: detail.title.clone(),
			year: detail.year.clone(),
			poster: detail.poster.clone(),
			imdb_rating: detail.imdb_rating,
			runtime: detail.runtime_minutes,
			user_rating,
			rating_revisions,
		}
	}
}

/// Aggregates over the watched list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WatchSummary {
	pub count: usize,
	pub avg_imdb_rating: f64,
	pub avg_user_rating: f64,
	pub avg_runtime: f64,
}

impl WatchSummary {
	#[must_use]
	pub fn from_entries(entries: &[WatchedEntry]) -> Self {
		Self {
			count: entries.len(),
			avg_imdb_rating: mean(entries.iter().filter_map(|entry| entry.imdb_rating)),
			avg_user_rating: mean(entries.iter().map(|entry| f64::from(entry.user_rating))),
			avg_runtime: mean(
				entries
					.iter()
					.filter_map(|entry| entry.runtime.map(f64::from)),
			),
		}
	}
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
	let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
	if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Treat the API's `"N/A"` placeholder and blank strings as missing.
pub(crate) fn present(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty() && value != "N/A")
}

/// Leading integer of a runtime string such as `"148 min"`.
#[must_use]
pub fn parse_runtime_minutes(text: &str) -> Option<u32> {
	text.split_whitespace().next()?.parse().ok()
}

/// Decimal rating such as `"8.8"`.
#[must_use]
pub fn parse_rating(text: &str) -> Option<f64> {
	text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(id: &str, imdb: Option<f64>, user: u8, runtime: Option<u32>) -> WatchedEntry {
		WatchedEntry {
			id: id.into(),
			title: id.into(),
			year: "2000".into(),
			poster: None,
			imdb_rating: imdb,
			runtime,
			user_rating: user,
			rating_revisions: 1,
		}
	}

	#[test]
	fn runtime_takes_leading_integer() {
		assert_eq!(parse_runtime_minutes("148 min"), Some(148));
		assert_eq!(parse_runtime_minutes("  90 min "), Some(90));
		assert_eq!(parse_runtime_minutes("N/A"), None);
		assert_eq!(parse_runtime_minutes(""), None);
	}

	#[test]
	fn rating_parses_decimals() {
		assert_eq!(parse_rating("8.8"), Some(8.8));
		assert_eq!(parse_rating("N/A"), None);
		assert_eq!(parse_rating("NaN"), None);
	}

	#[test]
	fn placeholders_are_missing() {
		assert_eq!(present(Some("N/A".into())), None);
		assert_eq!(present(Some("  ".into())), None);
		assert_eq!(present(Some(" Drama ".into())).as_deref(), Some("Drama"));
	}

	#[test]
	fn summary_skips_missing_values() {
		let entries = vec![
			entry("a", Some(8.0), 4, Some(120)),
			entry("b", None, 2, None),
			entry("c", Some(7.0), 3, Some(100)),
		];
		let summary = WatchSummary::from_entries(&entries);
		assert_eq!(summary.count, 3);
		assert!((summary.avg_imdb_rating - 7.5).abs() < f64::EPSILON);
		assert!((summary.avg_user_rating - 3.0).abs() < f64::EPSILON);
		assert!((summary.avg_runtime - 110.0).abs() < f64::EPSILON);
	}

	#[test]
	fn empty_summary_is_zeroed() {
		assert_eq!(WatchSummary::from_entries(&[]), WatchSummary::default());
	}
}
