//! Scroll container abstraction: geometry reads plus a scroll-event stream.

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// One synchronous sample of a scrollable container's geometry.
///
/// All values are logical pixels, matching the f32 convention used by layout
/// code throughout the workspace.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentDimensions {
    /// Total scrollable extent of the container.
    pub scroll_height: f32,
    /// Current scroll offset from the top.
    pub scroll_top: f32,
    /// Height of the visible content area.
    pub content_height: f32,
}

impl ContentDimensions {
    pub fn new(scroll_height: f32, scroll_top: f32, content_height: f32) -> Self {
        Self {
            scroll_height,
            scroll_top,
            content_height,
        }
    }
}

/// Callback invoked per scroll event with the event timestamp in milliseconds.
///
/// Stored as `Rc` so the registry can release its borrow before invoking,
/// which keeps re-entrant add/remove from a listener body safe.
pub type ScrollListener = Rc<dyn Fn(u64)>;

/// Handle identifying a registered scroll listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScrollListenerId(u64);

/// Abstraction over the scrollable container.
///
/// Implemented by host integrations (and by the fake in
/// `scrollwatch-testing`). Geometry reads are synchronous; scroll events are
/// pushed to registered listeners in registration order.
pub trait Viewport {
    /// Reads the container's current scroll geometry.
    fn content_dimensions(&self) -> ContentDimensions;

    /// Registers a scroll listener and returns its handle.
    fn add_scroll_listener(&self, listener: ScrollListener) -> ScrollListenerId;

    /// Removes a previously registered listener.
    ///
    /// Removing an unknown or already-removed id is a no-op.
    fn remove_scroll_listener(&self, id: ScrollListenerId);
}

/// Insertion-ordered scroll listener registry for `Viewport` implementors.
///
/// Ids come from a per-registry counter. Emission snapshots the current ids
/// first, so a listener removed mid-emission (by an earlier listener) is
/// skipped rather than invoked on a stale borrow.
#[derive(Default)]
pub struct ScrollListeners {
    next_id: Cell<u64>,
    entries: RefCell<SmallVec<[(ScrollListenerId, ScrollListener); 2]>>,
}

impl ScrollListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener, returning its id.
    pub fn add(&self, listener: ScrollListener) -> ScrollListenerId {
        let id = ScrollListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.entries.borrow_mut().push((id, listener));
        id
    }

    /// Removes a listener by id. Idempotent.
    pub fn remove(&self, id: ScrollListenerId) {
        self.entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
    }

    /// Number of currently registered listeners.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Delivers a scroll event to every registered listener, in registration
    /// order.
    pub fn emit(&self, timestamp_millis: u64) {
        let ids: SmallVec<[ScrollListenerId; 2]> =
            self.entries.borrow().iter().map(|(id, _)| *id).collect();
        for id in ids {
            let listener = self
                .entries
                .borrow()
                .iter()
                .find(|(entry_id, _)| *entry_id == id)
                .map(|(_, listener)| Rc::clone(listener));
            if let Some(listener) = listener {
                listener(timestamp_millis);
            }
        }
    }
}

impl std::fmt::Debug for ScrollListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollListeners")
            .field("len", &self.len())
            .finish()
    }
}
