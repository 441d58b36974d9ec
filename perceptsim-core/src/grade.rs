//! Qualitative grade from final accuracy
//!
//! A pure lookup over fixed thresholds (82 / 74 / 60). The grade never looks
//! at anything but accuracy, so two screens showing the same accuracy always
//! show the same badge.

use core::fmt;

use crate::constants::grading::{
    GRADE_EXCELLENT_COLOR, GRADE_EXCELLENT_MIN_ACCURACY, GRADE_FAIR_COLOR,
    GRADE_FAIR_MIN_ACCURACY, GRADE_GOOD_COLOR, GRADE_GOOD_MIN_ACCURACY, GRADE_POOR_COLOR,
};

/// Four ordered grades: Poor < Fair < Good < Excellent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grade {
    /// Below 60 %
    Poor,
    /// 60 % and above
    Fair,
    /// 74 % and above
    Good,
    /// 82 % and above
    Excellent,
}

impl Grade {
    /// Classify a final accuracy value (%)
    pub fn from_accuracy(accuracy: f32) -> Self {
        if accuracy >= GRADE_EXCELLENT_MIN_ACCURACY {
            Self::Excellent
        } else if accuracy >= GRADE_GOOD_MIN_ACCURACY {
            Self::Good
        } else if accuracy >= GRADE_FAIR_MIN_ACCURACY {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Display color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            Self::Poor => GRADE_POOR_COLOR,
            Self::Fair => GRADE_FAIR_COLOR,
            Self::Good => GRADE_GOOD_COLOR,
            Self::Excellent => GRADE_EXCELLENT_COLOR,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reading for a semicircular gauge widget
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gauge {
    /// Displayed value (%)
    pub value: f32,
    /// Needle position in [0, 1]
    pub fraction: f32,
    /// Grade of the value
    pub grade: Grade,
    /// Arc color
    pub color: &'static str,
}

impl Gauge {
    /// Gauge for an accuracy percentage
    pub fn for_accuracy(accuracy: f32) -> Self {
        let grade = Grade::from_accuracy(accuracy);
        Self {
            value: accuracy,
            fraction: (accuracy / 100.0).clamp(0.0, 1.0),
            grade,
            color: grade.color(),
        }
    }
}
