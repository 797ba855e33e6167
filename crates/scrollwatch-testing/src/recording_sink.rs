//! Load-request recorder for trigger tests.

use scrollwatch_foundation::{LoadSink, ScrollTrigger};
use std::cell::RefCell;
use std::rc::Rc;

/// Records every load request delivered by a trigger.
///
/// Hand [`RecordingSink::sink`] to `ScrollTrigger::new`, then assert on
/// [`count`](Self::count) or act on the recorded handles (e.g. call
/// `complete()` on the latest one).
#[derive(Clone, Default)]
pub struct RecordingSink {
    records: Rc<RefCell<Vec<ScrollTrigger>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the `LoadSink` to wire into a trigger under test.
    pub fn sink(&self) -> Rc<dyn LoadSink> {
        let records = Rc::clone(&self.records);
        Rc::new(move |trigger: ScrollTrigger| {
            records.borrow_mut().push(trigger);
        })
    }

    /// Number of load requests recorded so far.
    pub fn count(&self) -> usize {
        self.records.borrow().len()
    }

    /// The most recently delivered trigger handle, if any.
    pub fn last(&self) -> Option<ScrollTrigger> {
        self.records.borrow().last().cloned()
    }

    /// Drains and returns everything recorded so far.
    pub fn take(&self) -> Vec<ScrollTrigger> {
        std::mem::take(&mut *self.records.borrow_mut())
    }
}

impl std::fmt::Debug for RecordingSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingSink")
            .field("count", &self.count())
            .finish()
    }
}
