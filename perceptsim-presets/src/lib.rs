//! JSON Interchange and Named Presets for PerceptSim Screens
//!
//! ## Overview
//!
//! The presentation layer talks to the engine in JSON with plain string
//! keys. This crate is the boundary where those strings become typed
//! configurations, which is the only place an unknown dataset or model key
//! can show up. Past this point every lookup is total.
//!
//! ## Request Format
//!
//! Requests are tagged by the screen they come from:
//!
//! ```json
//! { "screen": "experiment", "dataset": "waymo", "model": "transformer",
//!   "compute": "high", "noise": 35, "accuracy_slider": 60 }
//!
//! { "screen": "explorer", "dataset": "kitti", "model": "fusion",
//!   "compute": null, "scenario": "fog" }
//! ```
//!
//! The response carries everything the screen renders, built from one
//! scoring call so gauges, radar and overlay agree.
//!
//! ## Presets
//!
//! A [`PresetRegistry`] maps names to screen configurations. The
//! [`GLOBAL_PRESETS`] instance starts with the landing presets of both
//! screens loaded.
//!
//! ## Usage Example
//!
//! ```rust
//! use perceptsim_presets::{ScreenRequest, ScreenResponse};
//!
//! let request = ScreenRequest::from_json(
//!     r#"{"screen":"experiment","dataset":"waymo","model":"transformer","compute":"high","noise":100}"#,
//! )?;
//! let response = request.evaluate()?;
//!
//! if let ScreenResponse::Experiment(snapshot) = &response {
//!     assert!(snapshot.metrics.accuracy < 70.0);
//! }
//! let json = response.to_json()?;
//! assert!(json.contains("\"screen\":\"experiment\""));
//! # Ok::<(), perceptsim_presets::PresetError>(())
//! ```

use perceptsim_core::ScoringError;

pub mod interchange;
pub mod registry;

pub use interchange::{Screen, ScreenRequest, ScreenResponse};
pub use registry::{PresetRegistry, GLOBAL_PRESETS};

/// Preset and interchange errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum PresetError {
    /// Malformed JSON or a missing field
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    /// Response could not be encoded
    #[error("Failed to serialize response: {0}")]
    SerializeError(String),

    /// No preset under that name
    #[error("Preset not found: {0}")]
    NotFound(String),

    /// Preset name already taken
    #[error("Preset already registered: {0}")]
    AlreadyRegistered(String),

    /// Registry lock poisoned by a panicking writer
    #[error("Preset registry unavailable")]
    Unavailable,

    /// Key or slider rejected by the engine
    #[error("Scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}
