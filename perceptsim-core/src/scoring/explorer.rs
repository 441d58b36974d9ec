//! Datasets-page scoring
//!
//! Uses the dataset-major baseline table and a categorical weather scenario.
//! The compute control is optional on this screen; without it the compute
//! modifier is neutral.

use crate::{
    errors::ScoringResult,
    keys::{ComputeTier, Dataset, ModelFamily, Scenario},
    tables,
    traits::{ScoringStrategy, ScreenConfig},
};

use super::{DerivedMetrics, Modifiers};

/// Controls of the dataset explorer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplorerConfig {
    /// Selected benchmark
    pub dataset: Dataset,
    /// Selected architecture family
    pub model: ModelFamily,
    /// Hardware tier, if the screen shows the control
    pub compute: Option<ComputeTier>,
    /// Weather/lighting condition
    pub scenario: Scenario,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            dataset: Dataset::Waymo,
            model: ModelFamily::Transformer,
            compute: None,
            scenario: Scenario::Clear,
        }
    }
}

impl ExplorerConfig {
    /// Create config for a dataset/model pair in clear weather
    pub fn new(dataset: Dataset, model: ModelFamily) -> Self {
        Self { dataset, model, ..Self::default() }
    }

    /// Preset: worst weather on the largest benchmark
    pub fn adverse_weather() -> Self {
        Self {
            dataset: Dataset::NuScenes,
            model: ModelFamily::Fusion,
            compute: Some(ComputeTier::Medium),
            scenario: Scenario::Snow,
        }
    }

    /// Set the compute tier
    pub fn with_compute(mut self, compute: ComputeTier) -> Self {
        self.compute = Some(compute);
        self
    }

    /// Remove the compute control
    pub fn without_compute(mut self) -> Self {
        self.compute = None;
        self
    }

    /// Set the weather scenario
    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = scenario;
        self
    }
}

impl ScreenConfig for ExplorerConfig {
    fn dataset(&self) -> Dataset {
        self.dataset
    }

    fn model(&self) -> ModelFamily {
        self.model
    }

    fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = dataset;
        self
    }

    fn with_model(mut self, model: ModelFamily) -> Self {
        self.model = model;
        self
    }
}

/// Dataset explorer strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplorerScoring;

impl ScoringStrategy for ExplorerScoring {
    type Config = ExplorerConfig;

    fn compute(&self, config: &ExplorerConfig) -> ScoringResult<DerivedMetrics> {
        let base = tables::dataset_baseline(config.dataset, config.model);
        let modifiers = Modifiers {
            model: tables::model_multiplier(config.model),
            compute: tables::compute_multiplier(config.compute),
            penalty: tables::scenario_penalty(config.scenario),
            boost: 1.0,
        };

        let metrics = DerivedMetrics::from_baseline(&base, &modifiers);
        log_debug!(
            "explorer {}/{}/{:?}: accuracy {} ({})",
            config.dataset.key(),
            config.model.key(),
            config.scenario,
            metrics.accuracy,
            metrics.grade
        );
        Ok(metrics)
    }

    fn name(&self) -> &'static str {
        "explorer"
    }
}
