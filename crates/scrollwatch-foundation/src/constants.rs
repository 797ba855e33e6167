//! Shared tuning constants for scroll sampling.

/// Minimum interval between processed scroll samples, in milliseconds.
///
/// Scroll events arriving within this window of the last processed sample
/// are dropped without updating any state. 32 ms is roughly two frames at
/// 60 Hz: fine enough that the trigger still fires well before the user
/// reaches the end of the content, coarse enough that fling scrolling does
/// not re-run the geometry arithmetic on every event.
pub const SCROLL_SAMPLE_INTERVAL_MS: u64 = 32;
