//! Baseline and Modifier Lookup Tables
//!
//! ## Overview
//!
//! All "results" shown by the simulators are synthetic. They start from a
//! hand-authored baseline per (dataset, model) pair and are scaled by fixed
//! multiplicative modifiers keyed by model family, compute tier and weather.
//!
//! ```text
//! metric = baseline[dataset][model].metric
//!        × model_multiplier[model]
//!        × compute_multiplier[tier]
//!        × penalty(scenario | noise)
//! ```
//!
//! ## Two Baseline Orientations
//!
//! The Datasets page and the Results page each carry their own baseline
//! table, one dataset-major and one model-major. Their numbers differ on
//! purpose and the two tables are never merged:
//!
//! ```text
//! DATASET_BASELINES[dataset][model]   (explorer screen)
//! MODEL_BASELINES[model][dataset]     (experiment screen)
//! ```
//!
//! ## Table Design
//!
//! Tables are `const` arrays indexed by the enums in [`crate::keys`], so a
//! lookup is an array index and can never miss. Modifier entries split into
//! an accuracy factor and a throughput factor because architecture and
//! hardware move the two in opposite directions.

use crate::keys::{ComputeTier, Dataset, ModelFamily, Scenario};

/// Starting performance numbers for one (dataset, model) pair
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaselineMetrics {
    /// Detection accuracy (%)
    pub accuracy: f32,
    /// Inference throughput (frames per second)
    pub fps: f32,
    /// Precision (%)
    pub precision: f32,
    /// Recall (%)
    pub recall: f32,
    /// Validation loss
    pub loss: f32,
}

impl BaselineMetrics {
    const fn new(accuracy: f32, fps: f32, precision: f32, recall: f32, loss: f32) -> Self {
        Self { accuracy, fps, precision, recall, loss }
    }
}

/// Architecture modifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelMultiplier {
    /// Factor on accuracy-like metrics
    pub acc: f32,
    /// Factor on throughput
    pub fps: f32,
}

/// Hardware modifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputeMultiplier {
    /// Factor on accuracy-like metrics
    pub acc: f32,
    /// Factor on throughput
    pub fps: f32,
}

impl ComputeMultiplier {
    /// Neutral modifier used when a screen has no compute control
    pub const NEUTRAL: Self = Self { acc: 1.0, fps: 1.0 };
}

/// Static description of a benchmark dataset
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DatasetProfile {
    /// Display name
    pub name: &'static str,
    /// Annotated frames
    pub frames: u32,
    /// Driving scenes/sequences
    pub scenes: u32,
    /// Sensor suite
    pub sensors: &'static [&'static str],
    /// Leaderboard reference entry used for the baseline radar
    pub reference: BaselineMetrics,
    /// Model size of the reference entry (MB)
    pub reference_model_size_mb: f32,
    /// Training epochs of the reference entry
    pub reference_epochs: f32,
}

// ===== MODIFIER TABLES =====

/// Model multipliers, indexed by [`ModelFamily::index`]
pub const MODEL_MULTIPLIERS: [ModelMultiplier; ModelFamily::COUNT] = [
    // Cnn: fast, slightly less accurate
    ModelMultiplier { acc: 0.96, fps: 1.30 },
    // Transformer
    ModelMultiplier { acc: 1.02, fps: 0.80 },
    // PointNet
    ModelMultiplier { acc: 0.98, fps: 1.10 },
    // Fusion: most accurate, slowest
    ModelMultiplier { acc: 1.04, fps: 0.70 },
];

/// Compute multipliers, indexed by [`ComputeTier::index`]
pub const COMPUTE_MULTIPLIERS: [ComputeMultiplier; ComputeTier::COUNT] = [
    // Low
    ComputeMultiplier { acc: 0.90, fps: 0.50 },
    // Medium
    ComputeMultiplier { acc: 1.00, fps: 1.00 },
    // High
    ComputeMultiplier { acc: 1.05, fps: 1.60 },
];

/// Weather/lighting penalty, indexed by [`Scenario::index`]
///
/// All entries lie in [0, 1]; Clear is the neutral element.
pub const SCENARIO_PENALTIES: [f32; Scenario::COUNT] = [
    1.00, // Clear
    0.88, // Rain
    0.80, // Fog
    0.85, // Night
    0.75, // Snow
];

// ===== BASELINE TABLES =====

/// Explorer baselines, `[dataset][model]`
pub const DATASET_BASELINES: [[BaselineMetrics; ModelFamily::COUNT]; Dataset::COUNT] = [
    // Waymo: Cnn, Transformer, PointNet, Fusion
    [
        BaselineMetrics::new(84.0, 32.0, 86.0, 81.0, 0.42),
        BaselineMetrics::new(89.0, 18.0, 90.0, 87.0, 0.31),
        BaselineMetrics::new(86.0, 24.0, 87.0, 83.0, 0.38),
        BaselineMetrics::new(90.0, 14.0, 91.0, 88.0, 0.28),
    ],
    // nuScenes
    [
        BaselineMetrics::new(78.0, 30.0, 80.0, 75.0, 0.55),
        BaselineMetrics::new(84.0, 16.0, 85.0, 82.0, 0.41),
        BaselineMetrics::new(81.0, 22.0, 82.0, 78.0, 0.48),
        BaselineMetrics::new(86.0, 12.0, 87.0, 84.0, 0.36),
    ],
    // KITTI
    [
        BaselineMetrics::new(82.0, 40.0, 84.0, 79.0, 0.47),
        BaselineMetrics::new(87.0, 22.0, 88.0, 85.0, 0.35),
        BaselineMetrics::new(85.0, 30.0, 86.0, 82.0, 0.40),
        BaselineMetrics::new(88.0, 18.0, 89.0, 86.0, 0.32),
    ],
];

/// Experiment baselines, `[model][dataset]`
pub const MODEL_BASELINES: [[BaselineMetrics; Dataset::COUNT]; ModelFamily::COUNT] = [
    // Cnn: Waymo, nuScenes, KITTI
    [
        BaselineMetrics::new(85.0, 34.0, 87.0, 82.0, 0.40),
        BaselineMetrics::new(79.0, 31.0, 81.0, 76.0, 0.53),
        BaselineMetrics::new(83.0, 42.0, 85.0, 80.0, 0.45),
    ],
    // Transformer
    [
        BaselineMetrics::new(91.0, 20.0, 92.0, 89.0, 0.29),
        BaselineMetrics::new(85.0, 17.0, 86.0, 83.0, 0.39),
        BaselineMetrics::new(88.0, 24.0, 89.0, 86.0, 0.33),
    ],
    // PointNet
    [
        BaselineMetrics::new(87.0, 26.0, 88.0, 84.0, 0.36),
        BaselineMetrics::new(80.0, 23.0, 82.0, 77.0, 0.47),
        BaselineMetrics::new(86.0, 31.0, 87.0, 83.0, 0.39),
    ],
    // Fusion
    [
        BaselineMetrics::new(92.0, 15.0, 93.0, 90.0, 0.26),
        BaselineMetrics::new(87.0, 13.0, 88.0, 85.0, 0.34),
        BaselineMetrics::new(89.0, 19.0, 90.0, 87.0, 0.30),
    ],
];

// ===== DATASET METADATA =====

/// Dataset profiles, indexed by [`Dataset::index`]
pub const DATASET_PROFILES: [DatasetProfile; Dataset::COUNT] = [
    DatasetProfile {
        name: "Waymo Open Dataset",
        frames: 230_000,
        scenes: 1_150,
        sensors: &["5x LiDAR", "5x Camera"],
        reference: BaselineMetrics::new(91.0, 18.0, 92.0, 89.0, 0.27),
        reference_model_size_mb: 850.0,
        reference_epochs: 36.0,
    },
    DatasetProfile {
        name: "nuScenes",
        frames: 40_000,
        scenes: 1_000,
        sensors: &["1x LiDAR", "6x Camera", "5x Radar", "GPS/IMU"],
        reference: BaselineMetrics::new(86.0, 14.0, 87.0, 84.0, 0.35),
        reference_model_size_mb: 620.0,
        reference_epochs: 24.0,
    },
    DatasetProfile {
        name: "KITTI",
        frames: 14_999,
        scenes: 22,
        sensors: &["1x LiDAR", "4x Camera", "GPS/IMU"],
        reference: BaselineMetrics::new(89.0, 25.0, 90.0, 87.0, 0.31),
        reference_model_size_mb: 280.0,
        reference_epochs: 80.0,
    },
];

// ===== LOOKUPS =====

/// Explorer baseline for a pair
pub fn dataset_baseline(dataset: Dataset, model: ModelFamily) -> BaselineMetrics {
    DATASET_BASELINES[dataset.index()][model.index()]
}

/// Experiment baseline for a pair
pub fn model_baseline(model: ModelFamily, dataset: Dataset) -> BaselineMetrics {
    MODEL_BASELINES[model.index()][dataset.index()]
}

/// Architecture modifier
pub fn model_multiplier(model: ModelFamily) -> ModelMultiplier {
    MODEL_MULTIPLIERS[model.index()]
}

/// Hardware modifier, neutral when the screen has no compute control
pub fn compute_multiplier(tier: Option<ComputeTier>) -> ComputeMultiplier {
    tier.map_or(ComputeMultiplier::NEUTRAL, |t| COMPUTE_MULTIPLIERS[t.index()])
}

/// Weather/lighting penalty
pub fn scenario_penalty(scenario: Scenario) -> f32 {
    SCENARIO_PENALTIES[scenario.index()]
}

/// Static dataset description
pub fn dataset_profile(dataset: Dataset) -> &'static DatasetProfile {
    &DATASET_PROFILES[dataset.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientations_are_independent() {
        // Same pair, different screens, different numbers
        let explorer = dataset_baseline(Dataset::Waymo, ModelFamily::Transformer);
        let experiment = model_baseline(ModelFamily::Transformer, Dataset::Waymo);
        assert_eq!(explorer.accuracy, 89.0);
        assert_eq!(experiment.accuracy, 91.0);
    }

    #[test]
    fn penalties_within_unit_interval() {
        for scenario in Scenario::ALL {
            let p = scenario_penalty(*scenario);
            assert!(p > 0.0 && p <= 1.0, "{:?} penalty {}", scenario, p);
        }
        assert_eq!(scenario_penalty(Scenario::Clear), 1.0);
    }

    #[test]
    fn baselines_are_plausible() {
        for dataset in Dataset::ALL {
            for model in ModelFamily::ALL {
                for base in [dataset_baseline(*dataset, *model), model_baseline(*model, *dataset)] {
                    assert!(base.accuracy > 0.0 && base.accuracy < 100.0);
                    assert!(base.precision > 0.0 && base.precision < 100.0);
                    assert!(base.recall > 0.0 && base.recall < 100.0);
                    assert!(base.fps >= 1.0);
                    assert!(base.loss > 0.0);
                }
            }
        }
    }

    #[test]
    fn absent_compute_is_neutral() {
        assert_eq!(compute_multiplier(None), ComputeMultiplier::NEUTRAL);
        assert_eq!(compute_multiplier(Some(ComputeTier::High)).acc, 1.05);
    }

    #[test]
    fn profiles_carry_sensor_lists() {
        let kitti = dataset_profile(Dataset::Kitti);
        assert_eq!(kitti.frames, 14_999);
        assert!(!kitti.sensors.is_empty());
    }
}
