//! Client for the OMDb REST API.
//!
//! Both calls hit the same endpoint: `s=` searches titles and `i=` fetches a
//! single record. OMDb reports application level failures with HTTP 200 and a
//! body of `{"Response": "False", "Error": "..."}`.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::model::{parse_rating, parse_runtime_minutes, present};
use crate::{FetchError, MovieDetail, MovieSource, MovieSummary};

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_NOT_FOUND: &str = "Movie not found";

/// Connection settings for [`OmdbClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OmdbConfig {
	pub api_key: String,
	pub base_url: String,
	pub timeout: Duration,
}

impl OmdbConfig {
	#[must_use]
	pub fn new(api_key: impl Into<String>) -> Self {
		Self {
			api_key: api_key.into(),
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

#[derive(Debug, Deserialize)]
struct Envelope {
	#[serde(rename = "Response", default)]
	response: Option<String>,
	#[serde(rename = "Error", default)]
	error: Option<String>,
}

impl Envelope {
	fn failure(&self) -> Option<FetchError> {
		let failed = self
			.response
			.as_deref()
			.is_some_and(|value| value.eq_ignore_ascii_case("false"));
		failed.then(|| {
			let message = present(self.error.clone()).unwrap_or_else(|| DEFAULT_NOT_FOUND.into());
			FetchError::NotFound(message)
		})
	}
}

#[derive(Debug, Deserialize)]
struct SearchBody {
	#[serde(rename = "Search", default)]
	search: Vec<RawSummary>,
}

#[derive(Debug, Deserialize)]
struct RawSummary {
	#[serde(rename = "imdbID", default)]
	id: Option<String>,
	#[serde(rename = "Title", default)]
	title: Option<String>,
	#[serde(rename = "Year", default)]
	year: Option<String>,
	#[serde(rename = "Poster", default)]
	poster: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDetail {
	#[serde(rename = "imdbID", default)]
	id: Option<String>,
	#[serde(rename = "Title", default)]
	title: Option<String>,
	#[serde(rename = "Year", default)]
	year: Option<String>,
	#[serde(rename = "Poster", default)]
	poster: Option<String>,
	#[serde(rename = "Genre", default)]
	genre: Option<String>,
	#[serde(rename = "Runtime", default)]
	runtime: Option<String>,
	#[serde(rename = "Plot", default)]
	plot: Option<String>,
	#[serde(rename = "Actors", default)]
	actors: Option<String>,
	#[serde(rename = "Director", default)]
	director: Option<String>,
	#[serde(rename = "Released", default)]
	released: Option<String>,
	#[serde(rename = "imdbRating", default)]
	imdb_rating: Option<String>,
}

/// Parse a search response body.
///
/// Entries without an id or title are dropped rather than failing the whole
/// page.
pub fn parse_search_body(body: &str) -> Result<Vec<MovieSummary>, FetchError> {
	let envelope: Envelope = serde_json::from_str(body)?;
	if let Some(err) = envelope.failure() {
		return Err(err);
	}

	let page: SearchBody = serde_json::from_str(body)?;
	let movies = page
		.search
		.into_iter()
		.filter_map(|raw| {
			let (Some(id), Some(title)) = (present(raw.id), present(raw.title)) else {
				log::debug!("skipping search hit without id or title");
				return None;
			};
			Some(MovieSummary {
				id,
				title,
				year: present(raw.year).unwrap_or_default(),
				poster: present(raw.poster),
			})
		})
		.collect();
	Ok(movies)
}

/// Parse a detail response body.
pub fn parse_detail_body(body: &str) -> Result<MovieDetail, FetchError> {
	let envelope: Envelope = serde_json::from_str(body)?;
	if let Some(err) = envelope.failure() {
		return Err(err);
	}

	let raw: RawDetail = serde_json::from_str(body)?;
	let id = present(raw.id).ok_or_else(|| FetchError::Invalid("missing imdbID".into()))?;
	let title = present(raw.title).ok_or_else(|| FetchError::Invalid("missing Title".into()))?;
	let runtime = present(raw.runtime);
	let runtime_minutes = runtime.as_deref().and_then(parse_runtime_minutes);
	let imdb_rating = present(raw.imdb_rating)
		.as_deref()
		.and_then(parse_rating);

	Ok(MovieDetail {
		id,
		title,
		year: present(raw.year).unwrap_or_default(),
		poster: present(raw.poster),
		genre: present(raw.genre),
		runtime,
		runtime_minutes,
		plot: present(raw.plot),
		actors: present(raw.actors),
		director: present(raw.director),
		released: present(raw.released),
		imdb_rating,
	})
}

/// Blocking OMDb client.
#[derive(Debug, Clone)]
pub struct OmdbClient {
	http: Client,
	config: OmdbConfig,
}

impl OmdbClient {
	pub fn new(config: OmdbConfig) -> Result<Self, FetchError> {
		let http = Client::builder()
			.timeout(config.timeout)
			.user_agent(concat!("manimovies/", env!("CARGO_PKG_VERSION")))
			.build()?;
		Ok(Self { http, config })
	}

	fn get(&self, params: &[(&str, &str)]) -> Result<String, FetchError> {
		let response = self
			.http
			.get(&self.config.base_url)
			.query(&[("apikey", self.config.api_key.as_str())])
			.query(params)
			.send()?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status(status));
		}
		Ok(response.text()?)
	}
}

impl MovieSource for OmdbClient {
	fn search(&self, query: &str) -> Result<Vec<MovieSummary>, FetchError> {
		log::debug!("searching omdb for {query:?}");
		let body = self.get(&[("s", query)])?;
		parse_search_body(&body)
	}

	fn details(&self, id: &str) -> Result<MovieDetail, FetchError> {
		log::debug!("fetching omdb record {id}");
		let body = self.get(&[("i", id)])?;
		parse_detail_body(&body)
	}
}
