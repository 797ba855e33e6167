//! Scriptable viewport for trigger tests.

use scrollwatch_core::{
    ContentDimensions, ScrollListener, ScrollListenerId, ScrollListeners, Viewport,
};
use std::cell::Cell;
use std::rc::Rc;

/// In-memory [`Viewport`]: tests script the geometry and push scroll events
/// by hand.
///
/// Clone-able handle over shared state, so a test can keep driving the
/// viewport after handing a clone to the trigger.
#[derive(Clone, Default)]
pub struct FakeViewport {
    inner: Rc<FakeViewportInner>,
}

#[derive(Default)]
struct FakeViewportInner {
    dimensions: Cell<ContentDimensions>,
    listeners: ScrollListeners,
}

impl FakeViewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the geometry returned by subsequent `content_dimensions` reads.
    pub fn set_content_dimensions(&self, dimensions: ContentDimensions) {
        self.inner.dimensions.set(dimensions);
    }

    /// Delivers a scroll event with the given timestamp to all listeners.
    pub fn emit_scroll(&self, timestamp_millis: u64) {
        self.inner.listeners.emit(timestamp_millis);
    }

    /// Number of live scroll subscriptions, for assertions about
    /// subscribe/unsubscribe behavior.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.len()
    }
}

impl Viewport for FakeViewport {
    fn content_dimensions(&self) -> ContentDimensions {
        self.inner.dimensions.get()
    }

    fn add_scroll_listener(&self, listener: ScrollListener) -> ScrollListenerId {
        self.inner.listeners.add(listener)
    }

    fn remove_scroll_listener(&self, id: ScrollListenerId) {
        self.inner.listeners.remove(id);
    }
}

impl std::fmt::Debug for FakeViewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeViewport")
            .field("dimensions", &self.inner.dimensions.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
