use anyhow::Result;
use manimovies::catalog::{MovieDetail, MovieSummary, Watchlist};
use serde_json::json;

use super::OutputFormat;

fn emit(format: OutputFormat, plain: impl FnOnce(), payload: serde_json::Value) -> Result<()> {
	match format {
		OutputFormat::Plain => plain(),
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&payload)?),
	}
	Ok(())
}

pub(crate) fn format_movies_json(query: &str, movies: &[MovieSummary]) -> serde_json::Value {
	json!({
		"query": query,
		"count": movies.len(),
		"results": movies,
	})
}

/// Print search results.
pub(crate) fn print_movies(format: OutputFormat, query: &str, movies: &[MovieSummary]) -> Result<()> {
	emit(
		format,
		|| {
			for movie in movies {
				println!("{}\t{}\t{}", movie.id, movie.year, movie.title);
			}
		},
		format_movies_json(query, movies),
	)
}

/// Print the API's not-found message.
pub(crate) fn print_not_found(format: OutputFormat, message: &str) -> Result<()> {
	emit(
		format,
		|| println!("{message}"),
		json!({ "error": message }),
	)
}

/// Print one full record.
pub(crate) fn print_detail(format: OutputFormat, detail: &MovieDetail) -> Result<()> {
	emit(
		format,
		|| {
			println!("{} ({})", detail.title, detail.year);
			let facts = [
				("Released", detail.released.as_deref()),
				("Runtime", detail.runtime.as_deref()),
				("Genre", detail.genre.as_deref()),
				("Starring", detail.actors.as_deref()),
				("Directed by", detail.director.as_deref()),
			];
			for (label, value) in facts {
				if let Some(value) = value {
					println!("{label}: {value}");
				}
			}
			if let Some(rating) = detail.imdb_rating {
				println!("IMDb rating: {rating}");
			}
			if let Some(plot) = &detail.plot {
				println!();
				println!("{plot}");
			}
		},
		json!(detail),
	)
}

pub(crate) fn format_watched_json(list: &Watchlist) -> serde_json::Value {
	json!({
		"summary": list.summary(),
		"entries": list.entries(),
	})
}

/// Print the watched list followed by its averages.
pub(crate) fn print_watched(format: OutputFormat, list: &Watchlist) -> Result<()> {
	emit(
		format,
		|| {
			for entry in list.entries() {
				println!(
					"{}\t{}\t{}/{}",
					entry.id,
					entry.title,
					entry.user_rating,
					entry
						.imdb_rating
						.map(|rating| rating.to_string())
						.unwrap_or_else(|| "-".into()),
				);
			}
			let summary = list.summary();
			println!(
				"{} movies, IMDb {:.2}, yours {:.2}, {:.0} min",
				summary.count, summary.avg_imdb_rating, summary.avg_user_rating, summary.avg_runtime
			);
		},
		format_watched_json(list),
	)
}

#[cfg(test)]
mod tests {
	use manimovies::catalog::WatchedEntry;

	use super::*;

	#[test]
	fn movies_json_lists_results() {
		let movies = vec![MovieSummary {
			id: "tt0133093".into(),
			title: "The Matrix".into(),
			year: "1999".into(),
			poster: None,
		}];
		let value = format_movies_json("matrix", &movies);
		assert_eq!(value["count"], 1);
		assert_eq!(value["results"][0]["id"], "tt0133093");
		assert_eq!(value["query"], "matrix");
	}

	#[test]
	fn watched_json_carries_summary() {
		let mut list = Watchlist::new();
		list.add(WatchedEntry {
			id: "tt1".into(),
			title: "One".into(),
			year: "2000".into(),
			poster: None,
			imdb_rating: None,
			runtime: Some(90),
			user_rating: 4,
			rating_revisions: 1,
		})
		.unwrap();
		let value = format_watched_json(&list);
		assert_eq!(value["summary"]["count"], 1);
		assert_eq!(value["summary"]["avg_runtime"], 90.0);
		assert_eq!(value["entries"][0]["user_rating"], 4);
	}
}
