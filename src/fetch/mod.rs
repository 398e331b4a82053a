//! Background request lanes.
//!
//! A lane owns one worker thread. Every request gets a fresh id and only the
//! reply to the most recent request is ever handed back to the UI thread, so
//! typing quickly or switching titles never shows an outdated response.

mod worker;

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use worker::{LaneCommand, worker_loop};
pub use worker::LaneReply;

/// UI-side handle of a background request lane.
pub struct Lane<Req, Resp> {
	name: &'static str,
	tx: Sender<LaneCommand<Req>>,
	rx: Receiver<LaneReply<Resp>>,
	latest_id: Arc<AtomicU64>,
	next_id: u64,
	current_id: Option<u64>,
	in_flight: bool,
}

impl<Req, Resp> Lane<Req, Resp>
where
	Req: Send + 'static,
	Resp: Send + 'static,
{
	/// Start the worker thread.
	///
	/// `debounce` delays each request so newer ones arriving within the window
	/// replace it; zero runs requests as soon as they are dequeued.
	pub fn spawn<F>(name: &'static str, debounce: Duration, handler: F) -> io::Result<Self>
	where
		F: FnMut(Req) -> Resp + Send + 'static,
	{
		let (command_tx, command_rx) = mpsc::channel();
		let (reply_tx, reply_rx) = mpsc::channel();
		let latest_id = Arc::new(AtomicU64::new(0));
		let thread_latest = Arc::clone(&latest_id);

		thread::Builder::new()
			.name(format!("manimovies-{name}"))
			.spawn(move || {
				worker_loop(name, command_rx, reply_tx, thread_latest, debounce, handler);
			})?;

		Ok(Self {
			name,
			tx: command_tx,
			rx: reply_rx,
			latest_id,
			next_id: 0,
			current_id: None,
			in_flight: false,
		})
	}
}

impl<Req, Resp> Lane<Req, Resp> {
	/// Queue a request, superseding whatever was in flight. Returns its id.
	pub fn issue(&mut self, payload: Req) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		let id = self.next_id;
		self.current_id = Some(id);
		self.in_flight = true;
		self.latest_id.store(id, Ordering::Release);
		if self.tx.send(LaneCommand::Request { id, payload }).is_err() {
			log::warn!("{} lane worker is gone; request {id} dropped", self.name);
			self.in_flight = false;
		}
		id
	}

	/// Abandon the in-flight request. Its reply, if any, is discarded.
	pub fn cancel(&mut self) {
		if self.current_id.take().is_some() {
			self.next_id = self.next_id.saturating_add(1);
			self.latest_id.store(self.next_id, Ordering::Release);
		}
		self.in_flight = false;
	}

	#[must_use]
	pub fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	#[must_use]
	pub fn current_id(&self) -> Option<u64> {
		self.current_id
	}

	#[must_use]
	pub fn matches_latest(&self, id: u64) -> bool {
		Some(id) == self.current_id
	}

	/// Next reply for the current request, skipping anything stale.
	pub fn try_recv(&mut self) -> Option<LaneReply<Resp>> {
		while let Ok(reply) = self.rx.try_recv() {
			if self.matches_latest(reply.id) {
				self.in_flight = false;
				return Some(reply);
			}
			log::trace!("{} lane ignored reply {}", self.name, reply.id);
		}
		None
	}
}

impl<Req, Resp> Drop for Lane<Req, Resp> {
	fn drop(&mut self) {
		let _ = self.tx.send(LaneCommand::Shutdown);
	}
}
