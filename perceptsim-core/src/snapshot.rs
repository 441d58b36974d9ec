//! Everything one screen renders, derived from a single score
//!
//! Gauges, radar and detection overlay must never drift from each other, so
//! the presentation layer asks for a snapshot instead of calling the
//! derivations separately. Each snapshot scores its configuration exactly
//! once and derives every visual from that one [`DerivedMetrics`] value.

use crate::{
    detection::{derive_visible, VisibleScene, DEFAULT_SCENE},
    errors::ScoringResult,
    grade::Gauge,
    radar::RadarVector,
    scoring::{DerivedMetrics, ExperimentConfig, ExperimentScoring, ExplorerConfig, ExplorerScoring},
    tables::{self, DatasetProfile},
    traits::ScoringStrategy,
};

/// Results-page view state
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExperimentSnapshot {
    /// Configuration the snapshot was built from
    pub config: ExperimentConfig,
    /// Scored metrics
    pub metrics: DerivedMetrics,
    /// Accuracy gauge
    pub gauge: Gauge,
    /// Radar vector using the dataset's reference size and epochs
    pub radar: RadarVector,
    /// Detection preview
    pub scene: VisibleScene,
}

impl ExperimentSnapshot {
    /// Score a configuration and derive all visuals from it
    pub fn evaluate(config: &ExperimentConfig) -> ScoringResult<Self> {
        let metrics = ExperimentScoring.compute(config)?;
        let profile = tables::dataset_profile(config.dataset);

        Ok(Self {
            config: *config,
            metrics,
            gauge: Gauge::for_accuracy(metrics.accuracy),
            radar: RadarVector::from_metrics(
                &metrics,
                profile.reference_model_size_mb,
                profile.reference_epochs,
            ),
            scene: derive_visible(metrics.accuracy, config.noise, &DEFAULT_SCENE)?,
        })
    }
}

/// Datasets-page view state
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExplorerSnapshot {
    /// Configuration the snapshot was built from
    pub config: ExplorerConfig,
    /// Scored metrics
    pub metrics: DerivedMetrics,
    /// Accuracy gauge
    pub gauge: Gauge,
    /// Static description of the selected dataset
    pub profile: &'static DatasetProfile,
}

impl ExplorerSnapshot {
    /// Score a configuration and attach the dataset description
    pub fn evaluate(config: &ExplorerConfig) -> ScoringResult<Self> {
        let metrics = ExplorerScoring.compute(config)?;

        Ok(Self {
            config: *config,
            metrics,
            gauge: Gauge::for_accuracy(metrics.accuracy),
            profile: tables::dataset_profile(config.dataset),
        })
    }
}
