//! Results-page scoring (experiment simulator)
//!
//! Uses the model-major baseline table, a continuous noise slider and an
//! optional accuracy slider.
//!
//! ```text
//! penalty = 1 - (noise / 100) × 0.30          noise ∈ [0, 100]  → [0.70, 1.00]
//! boost   = 0.80 + (slider / 100) × 0.20      slider ∈ [0, 100] → [0.80, 1.00]
//! ```
//!
//! Both sliders are clamped at the boundary of [`ExperimentScoring::compute`].

use crate::{
    errors::ScoringResult,
    keys::{ComputeTier, Dataset, ModelFamily},
    tables,
    traits::{ScoringStrategy, ScreenConfig},
};

use super::{
    utils::{clamp_slider, noise_penalty, slider_boost},
    DerivedMetrics, Modifiers,
};

/// Controls of the experiment simulator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Selected benchmark
    pub dataset: Dataset,
    /// Selected architecture family
    pub model: ModelFamily,
    /// Hardware tier
    pub compute: ComputeTier,
    /// Environmental noise level, 0-100
    pub noise: f32,
    /// Optimism knob, 0-100. `None` when the slider is not shown.
    pub accuracy_slider: Option<f32>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            dataset: Dataset::Waymo,
            model: ModelFamily::Transformer,
            compute: ComputeTier::Medium,
            noise: 0.0,
            accuracy_slider: None,
        }
    }
}

impl ExperimentConfig {
    /// Create config for a dataset/model pair with no noise
    pub fn new(dataset: Dataset, model: ModelFamily, compute: ComputeTier) -> Self {
        Self { dataset, model, compute, ..Self::default() }
    }

    /// Preset shown when the Results page opens
    pub fn showcase() -> Self {
        Self {
            dataset: Dataset::Waymo,
            model: ModelFamily::Transformer,
            compute: ComputeTier::High,
            noise: 20.0,
            accuracy_slider: Some(75.0),
        }
    }

    /// Set the compute tier
    pub fn with_compute(mut self, compute: ComputeTier) -> Self {
        self.compute = compute;
        self
    }

    /// Set the noise level
    pub fn with_noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }

    /// Show the accuracy slider at a position
    pub fn with_accuracy_slider(mut self, slider: f32) -> Self {
        self.accuracy_slider = Some(slider);
        self
    }

    /// Hide the accuracy slider
    pub fn without_accuracy_slider(mut self) -> Self {
        self.accuracy_slider = None;
        self
    }
}

impl ScreenConfig for ExperimentConfig {
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

/// Experiment simulator strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct ExperimentScoring;

impl ScoringStrategy for ExperimentScoring {
    type Config = ExperimentConfig;

    fn compute(&self, config: &ExperimentConfig) -> ScoringResult<DerivedMetrics> {
        let noise = clamp_slider(config.noise, "noise")?;
        let boost = match config.accuracy_slider {
            Some(slider) => slider_boost(clamp_slider(slider, "accuracy_slider")?),
            None => 1.0,
        };

        let base = tables::model_baseline(config.model, config.dataset);
        let modifiers = Modifiers {
            model: tables::model_multiplier(config.model),
            compute: tables::compute_multiplier(Some(config.compute)),
            penalty: noise_penalty(noise),
            boost,
        };

        let metrics = DerivedMetrics::from_baseline(&base, &modifiers);
        log_debug!(
            "experiment {}/{}/{} noise {}: accuracy {} ({})",
            config.dataset.key(),
            config.model.key(),
            config.compute.key(),
            noise,
            metrics.accuracy,
            metrics.grade
        );
        Ok(metrics)
    }

    fn name(&self) -> &'static str {
        "experiment"
    }
}
