//! Background worker thread behind a [`Lane`](super::Lane).

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::{Duration, Instant};

/// Commands understood by a lane worker.
#[derive(Debug)]
pub(crate) enum LaneCommand<Req> {
	/// Run the handler for `payload` unless a newer request supersedes it.
	Request { id: u64, payload: Req },
	/// Stop the worker thread.
	Shutdown,
}

/// Response produced by the handler, tagged with the originating request id.
#[derive(Debug)]
pub struct LaneReply<Resp> {
	pub id: u64,
	pub outcome: Resp,
}

/// Outcome of waiting for the next request to run.
enum Next<Req> {
	Run(u64, Req),
	Stop,
}

pub(crate) fn worker_loop<Req, Resp, F>(
	name: &str,
	command_rx: Receiver<LaneCommand<Req>>,
	reply_tx: Sender<LaneReply<Resp>>,
	latest_id: Arc<AtomicU64>,
	debounce: Duration,
	mut handler: F,
) where
	F: FnMut(Req) -> Resp,
{
	loop {
		let (id, payload) = match next_request(&command_rx, debounce) {
			Next::Run(id, payload) => (id, payload),
			Next::Stop => break,
		};

		if latest_id.load(Ordering::Acquire) != id {
			log::trace!("{name} lane skipped superseded request {id}");
			continue;
		}

		let outcome = handler(payload);

		if latest_id.load(Ordering::Acquire) != id {
			log::trace!("{name} lane dropped stale reply {id}");
			continue;
		}

		if reply_tx.send(LaneReply { id, outcome }).is_err() {
			break;
		}
	}
	log::debug!("{name} lane worker stopped");
}

/// Block for a request, then let newer requests replace it.
///
/// Without a debounce window the queue is drained to its newest request. With
/// one, the window restarts whenever a newer request arrives.
fn next_request<Req>(command_rx: &Receiver<LaneCommand<Req>>, debounce: Duration) -> Next<Req> {
	let (mut id, mut payload) = match command_rx.recv() {
		Ok(LaneCommand::Request { id, payload }) => (id, payload),
		Ok(LaneCommand::Shutdown) | Err(_) => return Next::Stop,
	};

	if debounce.is_zero() {
		loop {
			match command_rx.try_recv() {
				Ok(LaneCommand::Request {
					id: newer,
					payload: next,
				}) => {
					id = newer;
					payload = next;
				}
				Ok(LaneCommand::Shutdown) | Err(TryRecvError::Disconnected) => return Next::Stop,
				Err(TryRecvError::Empty) => return Next::Run(id, payload),
			}
		}
	}

	let mut deadline = Instant::now() + debounce;
	loop {
		let remaining = deadline.saturating_duration_since(Instant::now());
		if remaining.is_zero() {
			return Next::Run(id, payload);
		}
		match command_rx.recv_timeout(remaining) {
			Ok(LaneCommand::Request {
				id: newer,
				payload: next,
			}) => {
				id = newer;
				payload = next;
				deadline = Instant::now() + debounce;
			}
			Ok(LaneCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => return Next::Stop,
			Err(RecvTimeoutError::Timeout) => return Next::Run(id, payload),
		}
	}
}
