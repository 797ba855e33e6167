//! Simulated endless feed.
//!
//! Scrolls a fake feed toward the bottom frame by frame. Each time the
//! trigger crosses its threshold the sink "loads" another page (growing the
//! scrollable extent) and completes the cycle, so the run shows several full
//! load cycles end to end.

use scrollwatch_core::{
    ContentDimensions, ScrollListener, ScrollListenerId, ScrollListeners, Viewport, WriteQueue,
};
use scrollwatch_foundation::{ScrollTrigger, TriggerState};
use std::cell::Cell;
use std::rc::Rc;

const VIEWPORT_HEIGHT: f32 = 800.0;
const ITEM_HEIGHT: f32 = 100.0;
const PAGE_SIZE: u32 = 10;
const SCROLL_PER_FRAME: f32 = 120.0;
const FRAME_MILLIS: u64 = 16;
const PAGES_TO_LOAD: u32 = 5;

/// The feed's scroll container: geometry cells plus a listener registry.
struct FeedViewport {
    item_count: Cell<u32>,
    scroll_top: Cell<f32>,
    listeners: ScrollListeners,
}

impl FeedViewport {
    fn new(initial_items: u32) -> Self {
        Self {
            item_count: Cell::new(initial_items),
            scroll_top: Cell::new(0.0),
            listeners: ScrollListeners::new(),
        }
    }

    fn scroll_height(&self) -> f32 {
        self.item_count.get() as f32 * ITEM_HEIGHT
    }

    fn append_page(&self) {
        self.item_count.set(self.item_count.get() + PAGE_SIZE);
    }

    fn scroll_by(&self, delta: f32, timestamp_millis: u64) {
        let max = (self.scroll_height() - VIEWPORT_HEIGHT).max(0.0);
        self.scroll_top.set((self.scroll_top.get() + delta).min(max));
        self.listeners.emit(timestamp_millis);
    }
}

impl Viewport for FeedViewport {
    fn content_dimensions(&self) -> ContentDimensions {
        ContentDimensions::new(self.scroll_height(), self.scroll_top.get(), VIEWPORT_HEIGHT)
    }

    fn add_scroll_listener(&self, listener: ScrollListener) -> ScrollListenerId {
        self.listeners.add(listener)
    }

    fn remove_scroll_listener(&self, id: ScrollListenerId) {
        self.listeners.remove(id)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Scrollwatch Feed Simulation ===");
    println!("Scrolling a {PAGE_SIZE}-items-per-page feed until {PAGES_TO_LOAD} extra pages load.");
    println!();

    let viewport = Rc::new(FeedViewport::new(PAGE_SIZE));
    let writer = Rc::new(WriteQueue::new());
    let pages_loaded = Rc::new(Cell::new(0u32));

    let sink_viewport = Rc::clone(&viewport);
    let sink_pages = Rc::clone(&pages_loaded);
    let trigger = ScrollTrigger::new(
        viewport.clone(),
        writer.clone(),
        Rc::new(move |trigger: ScrollTrigger| {
            sink_viewport.append_page();
            sink_pages.set(sink_pages.get() + 1);
            log::info!(
                "loaded page {} ({} items, scroll extent {} px)",
                sink_pages.get(),
                sink_viewport.item_count.get(),
                sink_viewport.scroll_height()
            );
            trigger.complete();
        }),
    );
    trigger.set_threshold("20%");
    trigger.on_mount();

    let mut timestamp = 1_000u64;
    while pages_loaded.get() < PAGES_TO_LOAD {
        // Read phase: scroll and sample. Write phase: flush the queue.
        viewport.scroll_by(SCROLL_PER_FRAME, timestamp);
        writer.flush();
        timestamp += FRAME_MILLIS;
    }

    trigger.on_unmount();
    assert_eq!(trigger.state(), TriggerState::Enabled);
    println!();
    println!(
        "Done: {} pages loaded over {} simulated ms.",
        pages_loaded.get(),
        timestamp - 1_000
    );
}
