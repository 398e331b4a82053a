//! Movie records, the OMDb client and watchlist persistence.
//!
//! Everything that crosses the network or the disk is parsed into the typed
//! records in [`model`] at the boundary; callers never see raw JSON.

mod error;
pub mod model;
pub mod omdb;
mod source;
mod store;
mod watchlist;

pub use error::{FetchError, WatchlistError};
pub use model::{MovieDetail, MovieSummary, WatchSummary, WatchedEntry};
pub use omdb::{OmdbClient, OmdbConfig};
pub use source::MovieSource;
pub use store::{JsonFileStore, MemoryStore, WatchlistStore};
pub use watchlist::Watchlist;
