//! Core scoring engine for PerceptSim
//!
//! Turns simulator controls (dataset, model family, compute tier, weather or
//! noise, accuracy slider) into synthetic perception metrics, and derives
//! every visual of a screen from that one result.
//!
//! Key constraints:
//! - Pure and deterministic: same configuration, bit-identical output
//! - No heap allocation, cheap enough to run on every slider drag
//! - Tables are constants indexed by enums; lookups cannot miss
//!
//! ```no_run
//! use perceptsim_core::{ExperimentConfig, ExperimentScoring, ScoringStrategy};
//!
//! let config = ExperimentConfig::showcase().with_noise(60.0);
//!
//! match ExperimentScoring.compute(&config) {
//!     Ok(metrics) => {}, // Render gauges and charts
//!     Err(e) => {},      // Slider sent NaN
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod animation;
pub mod constants;
pub mod detection;
pub mod errors;
pub mod grade;
pub mod keys;
pub mod radar;
pub mod scoring;
pub mod snapshot;
pub mod sweep;
pub mod tables;
pub mod time;
pub mod traits;

// Public API
pub use detection::{derive_visible, VisibleScene, DEFAULT_SCENE};
pub use errors::{KeyDomain, ScoringError, ScoringResult};
pub use grade::{Gauge, Grade};
pub use keys::{ComputeTier, Dataset, ModelFamily, Scenario};
pub use radar::{build_radar, CustomMethod, RadarComparison, RadarVector};
pub use scoring::{
    DerivedMetrics, ExperimentConfig, ExperimentScoring, ExplorerConfig, ExplorerScoring,
};
pub use snapshot::{ExperimentSnapshot, ExplorerSnapshot};
pub use traits::{ScoringStrategy, ScreenConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
