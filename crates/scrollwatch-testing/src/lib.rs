//! Test doubles and a robot-style rule for exercising scroll triggers.
//!
//! # Example
//!
//! ```
//! use scrollwatch_testing::TriggerTestRule;
//!
//! let rule = TriggerTestRule::mounted();
//! rule.set_dimensions(1200.0, 200.0, 1000.0);
//! rule.scroll(1000);
//! rule.flush_writes();
//! assert_eq!(rule.notification_count(), 1);
//! ```

mod fake_viewport;
mod recording_sink;
mod rule;

pub use fake_viewport::FakeViewport;
pub use recording_sink::RecordingSink;
pub use rule::TriggerTestRule;
