//! Common test utilities and fixtures for integration tests
//!
//! This module provides:
//! - Exhaustive enumerations of every categorical configuration
//! - proptest strategies for slider-driven configurations
//! - Tolerance assertions for float comparisons

#![allow(dead_code)]

use perceptsim_core::{
    ComputeTier, Dataset, ExperimentConfig, ExplorerConfig, ModelFamily, Scenario,
};
use proptest::prelude::*;

/// Assert two floats are within an absolute tolerance
#[macro_export]
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let diff = ($actual - $expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                $actual, $tolerance, $expected, diff
            );
        }
    };
}

/// Every explorer configuration, with and without the compute control
pub fn all_explorer_configs() -> Vec<ExplorerConfig> {
    let mut configs = Vec::new();
    for dataset in Dataset::ALL {
        for model in ModelFamily::ALL {
            for scenario in Scenario::ALL {
                let base = ExplorerConfig::new(*dataset, *model).with_scenario(*scenario);
                configs.push(base);
                for tier in ComputeTier::ALL {
                    configs.push(base.with_compute(*tier));
                }
            }
        }
    }
    configs
}

/// Every categorical experiment configuration at a given noise level
pub fn all_experiment_configs(noise: f32) -> Vec<ExperimentConfig> {
    let mut configs = Vec::new();
    for dataset in Dataset::ALL {
        for model in ModelFamily::ALL {
            for tier in ComputeTier::ALL {
                configs.push(ExperimentConfig::new(*dataset, *model, *tier).with_noise(noise));
            }
        }
    }
    configs
}

pub fn any_dataset() -> impl Strategy<Value = Dataset> {
    prop::sample::select(Dataset::ALL.to_vec())
}

pub fn any_model() -> impl Strategy<Value = ModelFamily> {
    prop::sample::select(ModelFamily::ALL.to_vec())
}

pub fn any_compute() -> impl Strategy<Value = ComputeTier> {
    prop::sample::select(ComputeTier::ALL.to_vec())
}

/// Experiment configuration with in-range sliders
pub fn any_experiment_config() -> impl Strategy<Value = ExperimentConfig> {
    (
        any_dataset(),
        any_model(),
        any_compute(),
        0.0f32..=100.0,
        prop::option::of(0.0f32..=100.0),
    )
        .prop_map(|(dataset, model, compute, noise, accuracy_slider)| ExperimentConfig {
            dataset,
            model,
            compute,
            noise,
            accuracy_slider,
        })
}
