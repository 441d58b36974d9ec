//! Six-axis radar vectors for comparison charts
//!
//! ## Axes
//!
//! ```text
//! Accuracy          pass-through (already 0-100)
//! Precision         pass-through
//! Recall            pass-through
//! FPS               min(99, fps / 60 × 99)
//! Size-Score        max(0, 99 - size_mb / 5000 × 99)
//! Epoch-Efficiency  max(10, 99 - epochs / 100 × 70)
//! ```
//!
//! ## Custom Method Comparison
//!
//! The comparison chart overlays two vectors: the selected dataset's
//! leaderboard reference (with its fixed model size and epoch count) and a
//! user-submitted method. Both go through [`build_radar`]; only the inputs
//! differ.
//!
//! ```rust
//! use perceptsim_core::{Dataset, radar::{CustomMethod, RadarComparison}};
//!
//! let mine = CustomMethod {
//!     accuracy: 84.0,
//!     precision: 86.0,
//!     recall: 80.0,
//!     fps: 45.0,
//!     model_size_mb: 120.0,
//!     epochs: 40.0,
//! };
//! let chart = RadarComparison::new(Dataset::Kitti, &mine);
//! assert_eq!(chart.custom.values().len(), 6);
//! ```

use core::fmt;

use crate::{
    constants::radar::{
        RADAR_AXIS_MAX, RADAR_AXIS_MIN, RADAR_EPOCH_FLOOR, RADAR_EPOCH_REFERENCE, RADAR_EPOCH_SPAN,
        RADAR_FPS_CEILING, RADAR_SIZE_CEILING_MB,
    },
    keys::Dataset,
    scoring::DerivedMetrics,
    tables,
    traits::Validatable,
};

/// Number of radar axes
pub const RADAR_AXES: usize = 6;

/// Radar axis, in chart order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RadarAxis {
    /// Accuracy (%)
    Accuracy,
    /// Precision (%)
    Precision,
    /// Recall (%)
    Recall,
    /// Normalized throughput
    Fps,
    /// Smaller models score higher
    SizeScore,
    /// Fewer training epochs score higher
    EpochEfficiency,
}

impl RadarAxis {
    /// Every axis, in chart order
    pub const ALL: [Self; RADAR_AXES] = [
        Self::Accuracy,
        Self::Precision,
        Self::Recall,
        Self::Fps,
        Self::SizeScore,
        Self::EpochEfficiency,
    ];

    /// Axis label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy",
            Self::Precision => "Precision",
            Self::Recall => "Recall",
            Self::Fps => "FPS",
            Self::SizeScore => "Size Score",
            Self::EpochEfficiency => "Epoch Efficiency",
        }
    }
}

impl fmt::Display for RadarAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized six-axis vector
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RadarVector([f32; RADAR_AXES]);

impl RadarVector {
    /// Vector for a scored configuration
    pub fn from_metrics(metrics: &DerivedMetrics, model_size_mb: f32, epochs: f32) -> Self {
        build_radar(
            metrics.accuracy,
            metrics.precision,
            metrics.recall,
            metrics.fps as f32,
            model_size_mb,
            epochs,
        )
    }

    /// Raw values in axis order
    pub fn values(&self) -> &[f32; RADAR_AXES] {
        &self.0
    }

    /// Value on one axis
    pub fn get(&self, axis: RadarAxis) -> f32 {
        self.0[axis as usize]
    }

    /// (axis, value) pairs in chart order
    pub fn iter(&self) -> impl Iterator<Item = (RadarAxis, f32)> + '_ {
        RadarAxis::ALL.iter().copied().zip(self.0.iter().copied())
    }
}

/// Build a radar vector. Both comparison series must go through here.
pub fn build_radar(
    accuracy: f32,
    precision: f32,
    recall: f32,
    fps: f32,
    model_size_mb: f32,
    epochs: f32,
) -> RadarVector {
    let fps = non_negative(fps);
    let model_size_mb = non_negative(model_size_mb);
    let epochs = non_negative(epochs);

    let fps_axis = ((fps / RADAR_FPS_CEILING) * RADAR_AXIS_MAX).min(RADAR_AXIS_MAX);
    let size_axis = (RADAR_AXIS_MAX - (model_size_mb / RADAR_SIZE_CEILING_MB) * RADAR_AXIS_MAX)
        .max(RADAR_AXIS_MIN);
    let epoch_axis = (RADAR_AXIS_MAX - (epochs / RADAR_EPOCH_REFERENCE) * RADAR_EPOCH_SPAN)
        .max(RADAR_EPOCH_FLOOR);

    RadarVector([accuracy, precision, recall, fps_axis, size_axis, epoch_axis])
}

// Negative or non-finite scalars would push axes above their ceiling
fn non_negative(value: f32) -> f32 {
    if value.is_valid() && value > 0.0 {
        value
    } else {
        if value != 0.0 {
            log_warn!("radar input {} clamped to 0", value);
        }
        0.0
    }
}

/// A user-submitted method for the comparison chart
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomMethod {
    /// Reported accuracy (%)
    pub accuracy: f32,
    /// Reported precision (%)
    pub precision: f32,
    /// Reported recall (%)
    pub recall: f32,
    /// Reported throughput
    pub fps: f32,
    /// Model size (MB)
    pub model_size_mb: f32,
    /// Training epochs
    pub epochs: f32,
}

impl CustomMethod {
    /// Radar vector of this method
    pub fn radar(&self) -> RadarVector {
        build_radar(
            self.accuracy,
            self.precision,
            self.recall,
            self.fps,
            self.model_size_mb,
            self.epochs,
        )
    }
}

/// Two overlaid series: dataset reference and custom method
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RadarComparison {
    /// Dataset the comparison is made on
    pub dataset: Dataset,
    /// Leaderboard reference of the dataset
    pub baseline: RadarVector,
    /// Submitted method
    pub custom: RadarVector,
}

impl RadarComparison {
    /// Compare a custom method against a dataset reference
    pub fn new(dataset: Dataset, custom: &CustomMethod) -> Self {
        Self {
            dataset,
            baseline: baseline_radar(dataset),
            custom: custom.radar(),
        }
    }

    /// Per-axis difference, custom minus baseline
    pub fn deltas(&self) -> [f32; RADAR_AXES] {
        let mut out = [0.0; RADAR_AXES];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.custom.0[i] - self.baseline.0[i];
        }
        out
    }

    /// Axes on which the custom method beats the reference
    pub fn wins(&self) -> impl Iterator<Item = RadarAxis> + '_ {
        RadarAxis::ALL
            .iter()
            .copied()
            .filter(move |axis| self.custom.get(*axis) > self.baseline.get(*axis))
    }
}

/// Radar vector of a dataset's reference entry
pub fn baseline_radar(dataset: Dataset) -> RadarVector {
    let profile = tables::dataset_profile(dataset);
    let reference = &profile.reference;
    build_radar(
        reference.accuracy,
        reference.precision,
        reference.recall,
        reference.fps,
        profile.reference_model_size_mb,
        profile.reference_epochs,
    )
}
