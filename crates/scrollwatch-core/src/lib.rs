//! Core seams for the Scrollwatch infinite-scroll trigger.
//!
//! Everything here is single-threaded and event-driven: a [`Viewport`]
//! delivers timestamped scroll events and synchronous geometry reads, and a
//! [`DeferredWriter`] batches state mutations into a later write-aligned
//! phase so geometry sampling (read phase) never interleaves with mutation
//! and notification (write phase).
//!
//! Host integrations implement [`Viewport`] over their scroll container and
//! flush a [`WriteQueue`] once per frame; the trigger component lives in
//! `scrollwatch-foundation`.

mod viewport;
mod writer;

pub use viewport::{ContentDimensions, ScrollListener, ScrollListenerId, ScrollListeners, Viewport};
pub use writer::{DeferredWriter, WriteQueue};
