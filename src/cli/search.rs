use manimovies::catalog::{FetchError, MovieSource, MovieSummary};
use manimovies::controller::query_too_short;

/// Result of a one-shot title search.
#[derive(Debug, PartialEq)]
pub(crate) enum SearchOutcome {
	Movies(Vec<MovieSummary>),
	NotFound(String),
}

/// Search titles for `query`, connecting only when the trimmed query is long
/// enough. Short queries yield an empty result without touching the network.
pub(crate) fn search_titles<S, C>(
	query: &str,
	min_query_len: usize,
	connect: C,
) -> anyhow::Result<SearchOutcome>
where
	S: MovieSource,
	C: FnOnce() -> anyhow::Result<S>,
{
	let query = query.trim();
	if query_too_short(query, min_query_len) {
		log::debug!("skipping search for {query:?}: shorter than {min_query_len} characters");
		return Ok(SearchOutcome::Movies(Vec::new()));
	}

	match connect()?.search(query) {
		Ok(movies) => Ok(SearchOutcome::Movies(movies)),
		Err(FetchError::NotFound(message)) => Ok(SearchOutcome::NotFound(message)),
		Err(err) => Err(anyhow::Error::new(err).context(format!("search for {query:?} failed"))),
	}
}
