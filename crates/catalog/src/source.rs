use crate::{FetchError, MovieDetail, MovieSummary};

/// Anything that can answer title searches and detail lookups.
///
/// Implementations are called from background threads.
pub trait MovieSource: Send + Sync {
	fn search(&self, query: &str) -> Result<Vec<MovieSummary>, FetchError>;

	fn details(&self, id: &str) -> Result<MovieDetail, FetchError>;
}
