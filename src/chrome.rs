//! Window title handling.
//!
//! Views never touch the terminal title directly. They hold a [`TitleGuard`]
//! which restores the application title when dropped, so a detail view that
//! closes for any reason leaves the chrome as it found it.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::SetTitle;

/// Capability to change the window title.
pub trait PageChrome {
	fn set_title(&mut self, title: &str);
}

/// Chrome shared between the controller and the views it spawns.
pub type SharedChrome = Rc<RefCell<dyn PageChrome>>;

/// Title shown while a movie detail is open.
#[must_use]
pub fn movie_title(title: &str) -> String {
	format!("Movie | {title}")
}

/// Writes the title through the terminal's OSC escape sequence.
#[derive(Debug, Default)]
pub struct TerminalChrome;

impl PageChrome for TerminalChrome {
	fn set_title(&mut self, title: &str) {
		if let Err(err) = execute!(io::stdout(), SetTitle(title)) {
			log::debug!("failed to set terminal title: {err}");
		}
	}
}

/// Records every title it is given.
#[derive(Debug, Default)]
pub struct RecordingChrome {
	pub titles: Vec<String>,
}

impl RecordingChrome {
	#[must_use]
	pub fn current(&self) -> Option<&str> {
		self.titles.last().map(String::as_str)
	}
}

impl PageChrome for RecordingChrome {
	fn set_title(&mut self, title: &str) {
		self.titles.push(title.to_string());
	}
}

/// Holds the movie title for as long as it lives.
pub struct TitleGuard {
	chrome: SharedChrome,
	restore: String,
}

impl TitleGuard {
	pub fn new(chrome: SharedChrome, movie: &str, restore: impl Into<String>) -> Self {
		chrome.borrow_mut().set_title(&movie_title(movie));
		Self {
			chrome,
			restore: restore.into(),
		}
	}
}

impl Drop for TitleGuard {
	fn drop(&mut self) {
		self.chrome.borrow_mut().set_title(&self.restore);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn guard_restores_on_drop() {
		let recorder = Rc::new(RefCell::new(RecordingChrome::default()));
		let chrome: SharedChrome = recorder.clone();

		let guard = TitleGuard::new(chrome, "Inception", "ManiMovies");
		assert_eq!(recorder.borrow().current(), Some("Movie | Inception"));
		drop(guard);
		assert_eq!(recorder.borrow().current(), Some("ManiMovies"));
		assert_eq!(recorder.borrow().titles.len(), 2);
	}
}
