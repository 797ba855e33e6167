//! Robot-style test rule: a fully wired trigger plus programmatic control
//! over scrolling and the write phase.

use crate::{FakeViewport, RecordingSink};
use scrollwatch_core::{ContentDimensions, WriteQueue};
use scrollwatch_foundation::{ScrollTrigger, TriggerState};
use std::rc::Rc;

/// Wires a [`ScrollTrigger`] to a [`FakeViewport`], a [`WriteQueue`] and a
/// [`RecordingSink`], and exposes the knobs a test needs: script geometry,
/// push scroll events, flush the write phase, complete load cycles.
///
/// Comparable to a UI framework's compose-test rule, minus the rendering.
pub struct TriggerTestRule {
    viewport: FakeViewport,
    writer: Rc<WriteQueue>,
    sink: RecordingSink,
    trigger: ScrollTrigger,
}

impl TriggerTestRule {
    /// Builds the wired trigger without mounting it.
    pub fn new() -> Self {
        let viewport = FakeViewport::new();
        let writer = Rc::new(WriteQueue::new());
        let sink = RecordingSink::new();
        let trigger = ScrollTrigger::new(
            Rc::new(viewport.clone()),
            writer.clone(),
            sink.sink(),
        );
        Self {
            viewport,
            writer,
            sink,
            trigger,
        }
    }

    /// Builds the wired trigger and runs its mount sequence.
    pub fn mounted() -> Self {
        let rule = Self::new();
        rule.trigger.on_mount();
        rule
    }

    /// The trigger under test.
    pub fn trigger(&self) -> &ScrollTrigger {
        &self.trigger
    }

    /// The scripted viewport backing the trigger.
    pub fn viewport(&self) -> &FakeViewport {
        &self.viewport
    }

    /// The recorded load requests.
    pub fn sink(&self) -> &RecordingSink {
        &self.sink
    }

    /// Scripts the viewport geometry for subsequent samples.
    pub fn set_dimensions(&self, scroll_height: f32, scroll_top: f32, content_height: f32) {
        self.viewport.set_content_dimensions(ContentDimensions::new(
            scroll_height,
            scroll_top,
            content_height,
        ));
    }

    /// Pushes a scroll event through the viewport.
    pub fn scroll(&self, timestamp_millis: u64) {
        self.viewport.emit_scroll(timestamp_millis);
    }

    /// Runs the write phase, executing any scheduled load transitions.
    pub fn flush_writes(&self) {
        self.writer.flush();
    }

    /// Number of writes scheduled but not yet flushed.
    pub fn pending_writes(&self) -> usize {
        self.writer.len()
    }

    /// Load requests delivered so far.
    pub fn notification_count(&self) -> usize {
        self.sink.count()
    }

    /// Current state of the trigger under test.
    pub fn state(&self) -> TriggerState {
        self.trigger.state()
    }

    /// Completes the most recent load cycle through the delivered handle.
    /// Panics if nothing was delivered; tests should only complete what
    /// they observed.
    pub fn complete_last(&self) {
        self.sink
            .last()
            .expect("no load request delivered")
            .complete();
    }
}

impl Default for TriggerTestRule {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TriggerTestRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerTestRule")
            .field("trigger", &self.trigger)
            .field("pending_writes", &self.pending_writes())
            .field("notifications", &self.notification_count())
            .finish()
    }
}
