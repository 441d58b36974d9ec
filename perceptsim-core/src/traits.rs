//! Core traits for scoring strategies
//!
//! These traits define the interface every simulator screen implements.
//! Keep them simple - a screen is a configuration type plus a pure function.

use crate::errors::ScoringResult;
use crate::keys::{Dataset, ModelFamily};
use crate::scoring::DerivedMetrics;

/// Scoring strategy trait - one implementation per simulator screen
///
/// Screens disagree on table orientation and on how environmental
/// degradation is expressed, so each keeps its own strategy rather than
/// sharing one parameterized formula.
pub trait ScoringStrategy {
    /// The configuration this screen's controls produce
    type Config;

    /// Score a configuration. Pure: same input, same output.
    fn compute(&self, config: &Self::Config) -> ScoringResult<DerivedMetrics>;

    /// Short identifier of the screen
    fn name(&self) -> &'static str;
}

/// Configuration shared shape: every screen picks a dataset and a model
pub trait ScreenConfig: Copy {
    /// Selected benchmark
    fn dataset(&self) -> Dataset;

    /// Selected architecture family
    fn model(&self) -> ModelFamily;

    /// Same configuration with another dataset
    fn with_dataset(self, dataset: Dataset) -> Self;

    /// Same configuration with another model
    fn with_model(self, model: ModelFamily) -> Self;
}

/// Trait for values that can be checked before use
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_finite_floats_are_valid() {
        assert!(42.5f32.is_valid());
        assert!((-0.0f32).is_valid());
        assert!(!f32::NAN.is_valid());
        assert!(!f32::INFINITY.is_valid());
        assert!(!f32::NEG_INFINITY.is_valid());
    }
}
