//! Interactive terminal UI.
//!
//! [`App`] wraps a [`Controller`](crate::controller::Controller) with the
//! view state the terminal needs: focus, list selections and the screen
//! areas used for mouse hit testing. [`run`] drives it with the event loop.

mod actions;
mod components;
mod input;
mod render;
mod runtime;
mod state;
pub mod style;

pub use input::QueryInput;
pub use runtime::run;
pub use state::{App, Focus};

#[cfg(test)]
mod tests;
