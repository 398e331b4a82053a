//! Configuration loading and resolution.
//!
//! Values are layered from config files, `MANIMOVIES__*` environment
//! variables and CLI flags, then validated into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
