//! Constants for PerceptSim Core
//!
//! Every numeric value the engine depends on is defined here. Widgets on the
//! same screen must agree on these numbers exactly, so nothing in the engine
//! is allowed to carry an inline magic number.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Scoring**: Clamp bounds, penalty and boost ranges, secondary coefficients
//! - **Grading**: Accuracy thresholds and display colors for grades
//! - **Radar**: Normalization ceilings and floors for radar axes
//! - **Animation**: Count-up durations and frame pacing
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Thresholds are fixed, never derived from configuration
//! 3. Use descriptive names that include units

/// Clamp bounds, penalty and boost ranges used by the scoring strategies.
pub mod scoring;

/// Accuracy thresholds and display colors for qualitative grades.
pub mod grading;

/// Normalization rules for radar-chart axes.
pub mod radar;

/// Count-up animation timing.
pub mod animation;

// Re-export commonly used constants for convenience
pub use scoring::{
    PERCENT_METRIC_MIN, PERCENT_METRIC_MAX, MIN_FPS,
    MAX_NOISE_ACCURACY_LOSS, SLIDER_BOOST_FLOOR,
};

pub use grading::{
    GRADE_EXCELLENT_MIN_ACCURACY, GRADE_GOOD_MIN_ACCURACY, GRADE_FAIR_MIN_ACCURACY,
};

pub use radar::{RADAR_AXIS_MAX, RADAR_FPS_CEILING, RADAR_SIZE_CEILING_MB};

pub use animation::DEFAULT_COUNT_UP_MS;
