//! Count-Up Animation Timing
//!
//! Numeric displays ramp toward freshly computed metrics. These values only
//! affect presentation, never the metrics themselves.

/// Default count-up duration (milliseconds).
pub const DEFAULT_COUNT_UP_MS: u32 = 600;

/// Shortest count-up duration used by any widget (milliseconds).
pub const MIN_COUNT_UP_MS: u32 = 500;

/// Longest count-up duration used by any widget (milliseconds).
pub const MAX_COUNT_UP_MS: u32 = 800;

/// Frame interval for a 60 Hz display (milliseconds, rounded up).
pub const FRAME_INTERVAL_MS: u32 = 17;
