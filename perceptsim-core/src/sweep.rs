//! Chart series built by re-scoring one configuration
//!
//! Line and bar charts show how the current configuration would score if a
//! single control changed. Each point is a full call to the strategy, never
//! an interpolation, so charts agree with the gauges exactly.

use crate::{
    errors::ScoringResult,
    keys::{ModelFamily, Scenario},
    scoring::{DerivedMetrics, ExperimentConfig, ExperimentScoring, ExplorerConfig, ExplorerScoring},
    traits::{ScoringStrategy, ScreenConfig},
};

/// Lazy accuracy-vs-noise series from 0 to 100 inclusive
///
/// `step` is clamped to at least 1; the last point is always noise = 100.
pub fn noise_curve(
    strategy: &ExperimentScoring,
    config: ExperimentConfig,
    step: f32,
) -> impl Iterator<Item = ScoringResult<(f32, DerivedMetrics)>> + '_ {
    let step = if step.is_finite() { step.max(1.0) } else { 1.0 };
    let points = libm::ceilf(100.0 / step) as u32;

    (0..=points).map(move |i| {
        let noise = (i as f32 * step).min(100.0);
        strategy
            .compute(&config.with_noise(noise))
            .map(|metrics| (noise, metrics))
    })
}

/// One bar per model family, in table order
pub type ModelBars = heapless::Vec<(ModelFamily, DerivedMetrics), { ModelFamily::COUNT }>;

/// One bar per weather scenario, in table order
pub type ScenarioBars = heapless::Vec<(Scenario, DerivedMetrics), { Scenario::COUNT }>;

/// Current configuration scored for every model family (bar chart)
pub fn model_comparison<S>(strategy: &S, config: &S::Config) -> ScoringResult<ModelBars>
where
    S: ScoringStrategy,
    S::Config: ScreenConfig,
{
    // ALL holds exactly COUNT entries, so the collection never overflows
    ModelFamily::ALL
        .iter()
        .map(|model| {
            strategy
                .compute(&config.with_model(*model))
                .map(|metrics| (*model, metrics))
        })
        .collect()
}

/// Current configuration scored under every weather scenario
pub fn scenario_comparison(
    strategy: &ExplorerScoring,
    config: &ExplorerConfig,
) -> ScoringResult<ScenarioBars> {
    Scenario::ALL
        .iter()
        .map(|scenario| {
            strategy
                .compute(&config.with_scenario(*scenario))
                .map(|metrics| (*scenario, metrics))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{ComputeTier, Dataset};

    #[test]
    fn noise_curve_covers_full_range() {
        let config = ExperimentConfig::new(Dataset::Kitti, ModelFamily::Cnn, ComputeTier::Medium);
        let points: Vec<_> = noise_curve(&ExperimentScoring, config, 10.0)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(points.len(), 11);
        assert_eq!(points[0].0, 0.0);
        assert_eq!(points[10].0, 100.0);
        assert!(points.windows(2).all(|w| w[0].1.accuracy >= w[1].1.accuracy));
    }

    #[test]
    fn uneven_step_still_ends_at_hundred() {
        let points: Vec<_> = noise_curve(&ExperimentScoring, ExperimentConfig::default(), 30.0)
            .map(|p| p.unwrap().0)
            .collect();
        assert_eq!(points, vec![0.0, 30.0, 60.0, 90.0, 100.0]);
    }

    #[test]
    fn comparison_matches_direct_scoring() {
        let config =
            ExplorerConfig::new(Dataset::NuScenes, ModelFamily::Cnn).with_scenario(Scenario::Rain);
        let bars = model_comparison(&ExplorerScoring, &config).unwrap();

        for (model, metrics) in bars.iter() {
            let direct = ExplorerScoring.compute(&config.with_model(*model)).unwrap();
            assert_eq!(*metrics, direct);
        }
        assert_eq!(bars.len(), ModelFamily::COUNT);
        assert_eq!(bars[3].0, ModelFamily::Fusion);
    }

    #[test]
    fn invalid_slider_fails_the_whole_chart() {
        let config = ExperimentConfig::default().with_noise(f32::NAN);
        assert_eq!(
            model_comparison(&ExperimentScoring, &config),
            Err(crate::errors::ScoringError::InvalidInput { field: "noise" })
        );
    }

    #[test]
    fn clear_weather_leads_scenario_chart() {
        let config = ExplorerConfig::new(Dataset::Waymo, ModelFamily::PointNet);
        let bars = scenario_comparison(&ExplorerScoring, &config).unwrap();

        assert_eq!(bars.len(), Scenario::COUNT);
        let clear = bars[0].1.accuracy;
        assert!(bars.iter().all(|(_, m)| m.accuracy <= clear));
    }
}
