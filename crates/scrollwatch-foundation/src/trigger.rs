//! The infinite-scroll trigger: threshold arithmetic plus the
//! enabled/disabled/loading state machine.
//!
//! Control flow per scroll event: the viewport emits a timestamped event →
//! the trigger samples geometry and computes the distance from the threshold
//! → if crossed, the state transition and sink notification are scheduled on
//! the [`DeferredWriter`] rather than performed inline. The deferred closure
//! re-checks state at execution time, so a disable (or a load started by an
//! earlier queued write) between scheduling and flush suppresses the stale
//! notification. That execution-time check is a load-bearing part of the
//! contract, not an optimization.

use crate::constants::SCROLL_SAMPLE_INTERVAL_MS;
use crate::threshold::Threshold;
use scrollwatch_core::{DeferredWriter, ScrollListenerId, Viewport};
use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Trigger lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    /// Armed: scroll samples are processed and may fire a load request.
    Enabled,
    /// Off: samples are ignored and no viewport subscription is held.
    Disabled,
    /// A load request has been delivered; samples are ignored until the
    /// consumer calls [`ScrollTrigger::complete`].
    Loading,
}

/// What a single scroll sample did. Returned by
/// [`ScrollTrigger::on_scroll_sample`], mostly useful for tests and
/// diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleOutcome {
    /// Dropped because the trigger is `Loading` or `Disabled`.
    Suppressed,
    /// Dropped by the throttle window (see
    /// [`SCROLL_SAMPLE_INTERVAL_MS`]).
    Throttled,
    /// Dropped because the viewport reported no usable content height.
    NoGeometry,
    /// Processed, but the threshold was not crossed.
    BelowThreshold,
    /// Threshold crossed; a load request was scheduled on the writer.
    Scheduled,
}

/// Consumer of load requests.
///
/// Receives the trigger itself as payload so it can call
/// [`ScrollTrigger::complete`] once the new content is in place. Delivered
/// at most once per load cycle, in writer FIFO order.
pub trait LoadSink {
    fn on_load_requested(&self, trigger: ScrollTrigger);
}

impl<F: Fn(ScrollTrigger)> LoadSink for F {
    fn on_load_requested(&self, trigger: ScrollTrigger) {
        self(trigger);
    }
}

/// Fires a load request when the user scrolls near the end of the content.
///
/// Clone-able handle over shared state, one instance per mounted list.
/// Single-threaded by design: every field is interior-mutable and all calls
/// happen on the thread that delivers scroll events and flushes writes.
///
/// Hosts drive the lifecycle explicitly: [`on_mount`](Self::on_mount) when
/// the owning list appears, [`on_unmount`](Self::on_unmount) when it goes
/// away. The viewport subscription is exclusively owned by this instance and
/// exists only while the trigger is both mounted and not disabled.
#[derive(Clone)]
pub struct ScrollTrigger {
    inner: Rc<TriggerInner>,
}

struct TriggerInner {
    viewport: Rc<dyn Viewport>,
    writer: Rc<dyn DeferredWriter>,
    sink: Rc<dyn LoadSink>,
    threshold: Cell<Threshold>,
    state: Cell<TriggerState>,
    /// Timestamp of the last processed (not merely delivered) sample.
    last_sample_millis: Cell<u64>,
    /// Set once the mount sequence has run; subscriptions are only installed
    /// after this point.
    initialized: Cell<bool>,
    /// Live viewport subscription, if any. `Some` implies `initialized`.
    subscription: Cell<Option<ScrollListenerId>>,
}

impl ScrollTrigger {
    /// Creates a trigger wired to its collaborators, armed with the default
    /// `"15%"` threshold. No subscription is installed until
    /// [`on_mount`](Self::on_mount).
    pub fn new(
        viewport: Rc<dyn Viewport>,
        writer: Rc<dyn DeferredWriter>,
        sink: Rc<dyn LoadSink>,
    ) -> Self {
        Self {
            inner: Rc::new(TriggerInner {
                viewport,
                writer,
                sink,
                threshold: Cell::new(Threshold::default()),
                state: Cell::new(TriggerState::Enabled),
                last_sample_millis: Cell::new(0),
                initialized: Cell::new(false),
                subscription: Cell::new(None),
            }),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TriggerState {
        self.inner.state.get()
    }

    /// Current threshold.
    pub fn threshold(&self) -> Threshold {
        self.inner.threshold.get()
    }

    /// Whether a viewport subscription is currently held.
    pub fn is_listening(&self) -> bool {
        self.inner.subscription.get().is_some()
    }

    /// Sets the trigger distance from a string: `"15%"` for a fraction of
    /// the visible height, `"100px"` for an absolute distance. Setting one
    /// mode clears the other. Unparseable input is accepted and stored as a
    /// NaN threshold, which never fires (see [`Threshold`]).
    pub fn set_threshold(&self, value: &str) {
        self.inner.threshold.set(Threshold::parse(value));
    }

    /// Enables or disables the trigger.
    ///
    /// Overwrites `Loading` unconditionally: disabling mid-load drops the
    /// loading flag, and the in-flight cycle's `complete()` becomes a plain
    /// re-enable. Re-evaluates the viewport subscription either way;
    /// enabling when already listening keeps the single existing
    /// subscription.
    pub fn set_enabled(&self, enable: bool) {
        self.inner.state.set(if enable {
            TriggerState::Enabled
        } else {
            TriggerState::Disabled
        });
        self.update_subscription();
    }

    /// Marks the trigger mounted and installs the viewport subscription
    /// unless disabled.
    pub fn on_mount(&self) {
        self.inner.initialized.set(true);
        self.update_subscription();
    }

    /// Tears down the viewport subscription. Idempotent.
    pub fn on_unmount(&self) {
        self.remove_subscription();
    }

    /// Ends the current load cycle, returning the trigger to `Enabled`.
    ///
    /// Unconditional: callers must invoke this after handling a load
    /// request, or the trigger stays in `Loading` forever and never fires
    /// again.
    pub fn complete(&self) {
        self.inner.state.set(TriggerState::Enabled);
    }

    /// Handles one scroll event. Invoked by the viewport subscription;
    /// exposed so hosts without a push-based viewport can drive sampling
    /// themselves.
    pub fn on_scroll_sample(&self, timestamp_millis: u64) -> SampleOutcome {
        match self.inner.state.get() {
            TriggerState::Loading | TriggerState::Disabled => return SampleOutcome::Suppressed,
            TriggerState::Enabled => {}
        }

        let last = self.inner.last_sample_millis.get();
        if timestamp_millis.saturating_sub(last) < SCROLL_SAMPLE_INTERVAL_MS {
            return SampleOutcome::Throttled;
        }
        self.inner.last_sample_millis.set(timestamp_millis);

        let dimensions = self.inner.viewport.content_dimensions();
        let height = dimensions.content_height;
        if height == 0.0 || height.is_nan() {
            return SampleOutcome::NoGeometry;
        }

        let reload_y = height
            + match self.inner.threshold.get() {
                Threshold::Percent(fraction) => height * fraction,
                Threshold::Pixels(pixels) => pixels,
            };
        let distance_from_end =
            (dimensions.scroll_height - height - dimensions.scroll_top) - reload_y;

        // Strictly negative crosses; zero does not. NaN thresholds fail the
        // comparison and fall through to BelowThreshold.
        if distance_from_end < 0.0 {
            log::debug!(
                "ScrollTrigger: threshold crossed (distance {distance_from_end}), scheduling load"
            );
            let weak = Rc::downgrade(&self.inner);
            self.inner.writer.write(Box::new(move || {
                TriggerInner::fire_if_still_armed(&weak);
            }));
            SampleOutcome::Scheduled
        } else {
            SampleOutcome::BelowThreshold
        }
    }

    fn update_subscription(&self) {
        let should_listen = self.inner.initialized.get()
            && self.inner.state.get() != TriggerState::Disabled;
        if should_listen {
            self.install_subscription();
        } else {
            self.remove_subscription();
        }
    }

    fn install_subscription(&self) {
        if self.inner.subscription.get().is_some() {
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        let id = self
            .inner
            .viewport
            .add_scroll_listener(Rc::new(move |timestamp| {
                if let Some(inner) = weak.upgrade() {
                    ScrollTrigger { inner }.on_scroll_sample(timestamp);
                }
            }));
        self.inner.subscription.set(Some(id));
    }

    fn remove_subscription(&self) {
        if let Some(id) = self.inner.subscription.take() {
            self.inner.viewport.remove_scroll_listener(id);
        }
    }
}

impl TriggerInner {
    /// Write-phase half of a scheduled load request. State is re-checked
    /// here because the trigger may have been disabled, or an earlier queued
    /// write may have started a load, since the sample that scheduled us.
    fn fire_if_still_armed(weak: &Weak<TriggerInner>) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        match inner.state.get() {
            TriggerState::Loading | TriggerState::Disabled => {
                log::debug!("ScrollTrigger: stale load request dropped");
            }
            TriggerState::Enabled => {
                inner.state.set(TriggerState::Loading);
                let trigger = ScrollTrigger {
                    inner: Rc::clone(&inner),
                };
                inner.sink.on_load_requested(trigger);
            }
        }
    }
}

impl std::fmt::Debug for ScrollTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollTrigger")
            .field("state", &self.state())
            .field("threshold", &self.threshold())
            .field("listening", &self.is_listening())
            .field("initialized", &self.inner.initialized.get())
            .finish()
    }
}
