use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use super::App;
use super::style::Theme;
use crate::controller::Controller;

/// Construct an [`App`] around `controller` and run it until the user quits.
pub fn run(controller: Controller, theme: Theme) -> Result<()> {
	let mut app = App::new(controller, theme);
	app.run()
}

impl App<'_> {
	/// Pump the terminal event loop until the user quits.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		if let Err(err) = execute!(io::stdout(), EnableMouseCapture) {
			log::warn!("mouse capture unavailable: {err}");
		}
		terminal.clear()?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<()> = 'event_loop: loop {
			self.tick();
			self.throbber_state.calc_next();

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
				if self.should_quit {
					break;
				}
			}

			if self.should_quit {
				break Ok(());
			}

			thread::sleep(Duration::from_millis(16));
		};

		let _ = execute!(io::stdout(), DisableMouseCapture);
		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
