//! Deterministic Parametric Scoring
//!
//! ## Overview
//!
//! A simulator screen turns a handful of controls into a vector of
//! performance metrics. Every gauge, chart and overlay on the screen is
//! drawn from that one vector, so the engine's only correctness property is
//! that it is exact and repeatable.
//!
//! ## Algorithm
//!
//! Operator order is fixed:
//!
//! ```text
//! scale(x)  = x × model.acc × compute.acc × penalty × slider_boost
//!
//! accuracy  = clamp₁₀..₉₉( scale(base.accuracy) )
//! precision = clamp₁₀..₉₉( scale(base.precision) × 0.98 )
//! recall    = clamp₁₀..₉₉( scale(base.recall)    × 0.96 )
//! mAP       = clamp₁₀..₉₉( scale(base.precision) × 0.92 )
//! fps       = max(1, round( base.fps × model.fps × compute.fps × penalty × slider_boost ))
//! loss      = base.loss / penalty
//! grade     = Grade::from_accuracy(accuracy)
//! ```
//!
//! ## Strategies
//!
//! | Screen | Strategy | Baseline table | Degradation |
//! |--------|----------|----------------|-------------|
//! | Datasets | [`ExplorerScoring`] | `[dataset][model]` | weather scenario |
//! | Results | [`ExperimentScoring`] | `[model][dataset]` | noise slider + accuracy slider |
//!
//! ## Usage Example
//!
//! ```rust
//! use perceptsim_core::{ComputeTier, Dataset, ExperimentConfig, ExperimentScoring, ModelFamily};
//! use perceptsim_core::traits::{ScoringStrategy, ScreenConfig};
//!
//! let config = ExperimentConfig::default()
//!     .with_dataset(Dataset::Waymo)
//!     .with_model(ModelFamily::Transformer)
//!     .with_compute(ComputeTier::High)
//!     .with_noise(35.0);
//!
//! let metrics = ExperimentScoring.compute(&config)?;
//! assert!(metrics.accuracy >= 10.0 && metrics.accuracy <= 99.0);
//! # Ok::<(), perceptsim_core::ScoringError>(())
//! ```

mod experiment;
mod explorer;
pub mod utils;

pub use experiment::{ExperimentConfig, ExperimentScoring};
pub use explorer::{ExplorerConfig, ExplorerScoring};

use crate::{
    constants::scoring::{MAP_COEFFICIENT, PRECISION_COEFFICIENT, RECALL_COEFFICIENT},
    grade::Grade,
    tables::{BaselineMetrics, ComputeMultiplier, ModelMultiplier},
};

use utils::{clamp_percent, round_fps};

/// Scored metrics for one configuration
///
/// Recomputed in full on every configuration change. Never partially
/// updated and never mutated by display code.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedMetrics {
    /// Detection accuracy (%), in [10, 99]
    pub accuracy: f32,
    /// Precision (%), in [10, 99]
    pub precision: f32,
    /// Recall (%), in [10, 99]
    pub recall: f32,
    /// Mean average precision proxy (%), in [10, 99]
    pub map: f32,
    /// Throughput, at least 1
    pub fps: u32,
    /// Validation loss, positive
    pub loss: f32,
    /// Grade of `accuracy`
    pub grade: Grade,
}

/// Factors resolved from the tables for one evaluation
#[derive(Debug, Clone, Copy)]
pub(crate) struct Modifiers {
    pub model: ModelMultiplier,
    pub compute: ComputeMultiplier,
    pub penalty: f32,
    pub boost: f32,
}

impl Modifiers {
    fn scale(&self, value: f32) -> f32 {
        value * self.model.acc * self.compute.acc * self.penalty * self.boost
    }

    fn scale_fps(&self, value: f32) -> f32 {
        value * self.model.fps * self.compute.fps * self.penalty * self.boost
    }
}

impl DerivedMetrics {
    /// Apply resolved modifiers to a baseline and clamp the result
    pub(crate) fn from_baseline(base: &BaselineMetrics, modifiers: &Modifiers) -> Self {
        let accuracy = clamp_percent(modifiers.scale(base.accuracy));
        let precision = clamp_percent(modifiers.scale(base.precision) * PRECISION_COEFFICIENT);
        let recall = clamp_percent(modifiers.scale(base.recall) * RECALL_COEFFICIENT);
        let map = clamp_percent(modifiers.scale(base.precision) * MAP_COEFFICIENT);
        let fps = round_fps(modifiers.scale_fps(base.fps));
        let loss = base.loss / modifiers.penalty;

        Self {
            accuracy,
            precision,
            recall,
            map,
            fps,
            loss,
            grade: Grade::from_accuracy(accuracy),
        }
    }
}
