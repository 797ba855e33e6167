//! Write-phase scheduling: deferred callbacks batched into an explicit flush.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Schedules a callback to run during the next write-aligned phase.
///
/// Geometry sampling happens synchronously inside scroll-event callbacks
/// (read phase); state mutation and notification are deferred through this
/// seam so reads and writes of the same frame never interleave and no
/// mutation re-enters a scroll-event handler. Callbacks run FIFO and to
/// completion.
pub trait DeferredWriter {
    fn write(&self, callback: Box<dyn FnOnce()>);
}

/// Single-threaded FIFO implementation of [`DeferredWriter`].
///
/// Hosts enqueue writes from event handlers and call [`WriteQueue::flush`]
/// once per frame, after all reads. Callbacks enqueued while a flush is in
/// progress are drained by that same flush.
#[derive(Default)]
pub struct WriteQueue {
    pending: RefCell<VecDeque<Box<dyn FnOnce()>>>,
    flushing: Cell<bool>,
}

impl WriteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting to run.
    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Runs every pending callback in FIFO order until the queue is empty.
    ///
    /// A nested `flush` call from within a callback is a no-op; the
    /// outermost flush keeps draining. If a callback panics, the guard flag
    /// is still cleared so a later flush can drain the remainder.
    pub fn flush(&self) {
        if self.flushing.replace(true) {
            return;
        }
        let _guard = FlushGuard(&self.flushing);
        loop {
            let callback = self.pending.borrow_mut().pop_front();
            match callback {
                Some(callback) => callback(),
                None => break,
            }
        }
    }
}

/// Clears the flushing flag on drop, including during unwinding.
struct FlushGuard<'a>(&'a Cell<bool>);

impl Drop for FlushGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl DeferredWriter for WriteQueue {
    fn write(&self, callback: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push_back(callback);
        log::trace!("WriteQueue: scheduled write ({} pending)", self.len());
    }
}

impl std::fmt::Debug for WriteQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteQueue")
            .field("pending", &self.len())
            .field("flushing", &self.flushing.get())
            .finish()
    }
}
