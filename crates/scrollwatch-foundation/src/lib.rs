//! Infinite-scroll trigger for scrollable content.
//!
//! A [`ScrollTrigger`] watches a viewport's scroll stream and, when the user
//! scrolls within a configurable distance of the end of the content, asks a
//! [`LoadSink`] to load more. The sink calls [`ScrollTrigger::complete`] when
//! it is done, re-arming the trigger for the next load cycle.
//!
//! The trigger is deliberately framework-agnostic: hosts provide a
//! `Viewport` for geometry and events, a `DeferredWriter` for write-phase
//! scheduling, and drive the lifecycle explicitly via
//! [`ScrollTrigger::on_mount`] / [`ScrollTrigger::on_unmount`].

pub mod constants;
mod threshold;
mod trigger;

pub use threshold::Threshold;
pub use trigger::{LoadSink, SampleOutcome, ScrollTrigger, TriggerState};
