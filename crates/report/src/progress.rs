//! Composite progress over a sequence of reports.
//!
//! # Role
//!
//! Each report in a [`ProgressChain`] owns a slot with an `offset` (the sum of
//! the expected counts of every report before it) and a `progress_end`
//! (`offset` plus its own expected count). A report notifies progress through
//! its [`ProgressHandle`]; the chain forwards `offset + position` out of the
//! `progress_end` of the last slot to a single [`ProgressListener`].
//!
//! # Invariants
//!
//! - When a report revises its expected count, the difference shifts the
//!   `offset` and `progress_end` of every later slot, never earlier ones.
//! - The position seen by the listener never decreases, even across
//!   downward revisions (it is clamped to the last reported position).
//!
//! # Concurrency
//!
//! Slots live under one `parking_lot::Mutex`. The listener is invoked while
//! that lock is held so notifications reach it in order; it must not report
//! progress on the same chain.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

/// Receiver of composite progress notifications.
pub trait ProgressListener: Send + Sync {
	/// `position` ranges from 0 to `count`; `count` may change between calls.
	fn progress(&self, position: usize, count: usize);
}

/// Closure-backed listener adapter.
pub struct FnProgress<F> {
	f: F,
}

impl<F> FnProgress<F> {
	pub fn new(f: F) -> Self {
		Self { f }
	}
}

impl<F> ProgressListener for FnProgress<F>
where
	F: Fn(usize, usize) + Send + Sync,
{
	fn progress(&self, position: usize, count: usize) {
		(self.f)(position, count)
	}
}

/// Listener that logs every notification at DEBUG level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressListener for LogProgress {
	fn progress(&self, position: usize, count: usize) {
		debug!(position, count, "report progress");
	}
}

#[derive(Debug, Clone, Copy)]
struct Slot {
	offset: usize,
	progress_end: usize,
}

impl Slot {
	fn count(&self) -> usize {
		self.progress_end - self.offset
	}
}

struct ChainState {
	slots: Vec<Slot>,
	last: usize,
}

/// Sequence of report slots sharing one listener.
pub struct ProgressChain {
	state: Mutex<ChainState>,
	listener: Box<dyn ProgressListener>,
}

impl ProgressChain {
	pub fn new(listener: impl ProgressListener + 'static) -> Arc<Self> {
		Arc::new(Self {
			state: Mutex::new(ChainState {
				slots: Vec::new(),
				last: 0,
			}),
			listener: Box::new(listener),
		})
	}

	/// Appends a slot expecting `count` steps and returns its handle.
	pub fn attach(self: &Arc<Self>, count: usize) -> ProgressHandle {
		let mut state = self.state.lock();
		let offset = state.slots.last().map_or(0, |s| s.progress_end);
		state.slots.push(Slot {
			offset,
			progress_end: offset + count,
		});
		ProgressHandle {
			chain: Arc::clone(self),
			index: state.slots.len() - 1,
		}
	}

	/// Sum of the expected counts of every slot.
	pub fn total(&self) -> usize {
		self.state.lock().slots.last().map_or(0, |s| s.progress_end)
	}

	/// Last position forwarded to the listener.
	pub fn position(&self) -> usize {
		self.state.lock().last
	}

	fn report(&self, index: usize, position: usize, count: usize) {
		let mut state = self.state.lock();
		let Some(slot) = state.slots.get(index).copied() else {
			return;
		};
		if count != slot.count() {
			let new_end = slot.offset + count;
			state.slots[index].progress_end = new_end;
			for later in &mut state.slots[index + 1..] {
				if new_end >= slot.progress_end {
					let delta = new_end - slot.progress_end;
					later.offset += delta;
					later.progress_end += delta;
				} else {
					let delta = slot.progress_end - new_end;
					later.offset = later.offset.saturating_sub(delta);
					later.progress_end = later.progress_end.saturating_sub(delta);
				}
			}
		}
		let value = (slot.offset + position.min(count)).max(state.last);
		let total = state.slots.last().map_or(0, |s| s.progress_end).max(value);
		state.last = value;
		self.listener.progress(value, total);
	}
}

/// One report's view of a [`ProgressChain`].
#[derive(Clone)]
pub struct ProgressHandle {
	chain: Arc<ProgressChain>,
	index: usize,
}

impl ProgressHandle {
	/// Notifies that this report reached `position` out of `count`.
	pub fn progress(&self, position: usize, count: usize) {
		self.chain.report(self.index, position, count);
	}
}

impl std::fmt::Debug for ProgressHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ProgressHandle").field("index", &self.index).finish()
	}
}
