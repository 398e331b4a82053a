//! Core crate exports for the `manimovies` terminal client.
//!
//! The binary wires these pieces together: a [`controller::Controller`] driven
//! by the terminal front-end in [`ui`], backed by the OMDb client and
//! watched-list store re-exported from [`catalog`].

pub mod app_dirs;
pub mod chrome;
pub mod controller;
pub mod fetch;
pub mod logging;
pub mod ui;

pub use manimovies_catalog as catalog;
pub use manimovies_rating as rating;

pub use controller::{Controller, ControllerConfig};
pub use ui::run;
