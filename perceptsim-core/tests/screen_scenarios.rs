//! End-to-end tests for screen-level behavior
//!
//! Drives the public API the way a screen does: score a configuration,
//! build charts from re-scored variants, animate the gauge toward the result.

mod common;

use perceptsim_core::{
    animation::CountUp,
    radar::{RadarAxis, RadarComparison},
    sweep,
    time::{FrameClock, SteppedClock},
    ComputeTier, CustomMethod, Dataset, ExperimentConfig, ExperimentScoring, ExperimentSnapshot,
    ExplorerConfig, ExplorerScoring, ExplorerSnapshot, Grade, ModelFamily, Scenario,
    ScoringStrategy,
};

fn waymo_transformer_high() -> ExperimentConfig {
    ExperimentConfig::new(Dataset::Waymo, ModelFamily::Transformer, ComputeTier::High)
}

#[test]
fn noiseless_run_is_baseline_times_multipliers() {
    let m = ExperimentScoring.compute(&waymo_transformer_high()).unwrap();
    assert_within_tolerance!(m.accuracy, 91.0 * 1.02 * 1.05, 1e-3);
    assert_eq!(m.grade, Grade::Excellent);
}

#[test]
fn full_noise_regrades_from_new_accuracy() {
    let clean = ExperimentScoring.compute(&waymo_transformer_high()).unwrap();
    let noisy = ExperimentScoring
        .compute(&waymo_transformer_high().with_noise(100.0))
        .unwrap();

    assert_within_tolerance!(noisy.accuracy, clean.accuracy * 0.70, 1e-3);
    assert_eq!(noisy.grade, Grade::from_accuracy(noisy.accuracy));
    assert_ne!(noisy.grade, clean.grade);
}

#[test]
fn half_slider_is_ninety_percent_before_clamping() {
    // Low compute keeps both values clear of the clamp
    let config = ExperimentConfig::new(Dataset::Kitti, ModelFamily::Cnn, ComputeTier::Low);
    let free = ExperimentScoring.compute(&config).unwrap();
    let half = ExperimentScoring
        .compute(&config.with_accuracy_slider(50.0))
        .unwrap();

    assert_within_tolerance!(half.accuracy, free.accuracy * 0.90, 1e-3);
}

#[test]
fn model_size_axis_spans_full_range() {
    let mut method = CustomMethod {
        accuracy: 80.0,
        precision: 82.0,
        recall: 78.0,
        fps: 30.0,
        model_size_mb: 5000.0,
        epochs: 50.0,
    };
    assert_eq!(method.radar().get(RadarAxis::SizeScore), 0.0);

    method.model_size_mb = 0.0;
    assert_eq!(method.radar().get(RadarAxis::SizeScore), 99.0);
}

#[test]
fn comparison_reports_axes_the_custom_method_wins() {
    let method = CustomMethod {
        accuracy: 99.0,
        precision: 99.0,
        recall: 99.0,
        fps: 60.0,
        model_size_mb: 0.0,
        epochs: 0.0,
    };
    let comparison = RadarComparison::new(Dataset::NuScenes, &method);

    let deltas = comparison.deltas();
    assert!(deltas.iter().all(|d| *d >= 0.0));
    assert!(comparison.wins().count() >= 4);
}

#[test]
fn noise_curve_matches_direct_scoring() {
    let config = ExperimentConfig::showcase();
    for point in sweep::noise_curve(&ExperimentScoring, config, 25.0) {
        let (noise, metrics) = point.unwrap();
        let direct = ExperimentScoring.compute(&config.with_noise(noise)).unwrap();
        assert_eq!(metrics, direct);
    }
}

#[test]
fn bar_charts_agree_with_gauge() {
    let config = ExplorerConfig::new(Dataset::Waymo, ModelFamily::PointNet)
        .with_compute(ComputeTier::Medium)
        .with_scenario(Scenario::Rain);
    let snapshot = ExplorerSnapshot::evaluate(&config).unwrap();

    let bars = sweep::model_comparison(&ExplorerScoring, &config).unwrap();
    let (_, pointnet) = bars
        .iter()
        .find(|(model, _)| *model == ModelFamily::PointNet)
        .unwrap();
    assert_eq!(*pointnet, snapshot.metrics);

    let weather = sweep::scenario_comparison(&ExplorerScoring, &config).unwrap();
    let (_, rain) = weather
        .iter()
        .find(|(scenario, _)| *scenario == Scenario::Rain)
        .unwrap();
    assert_eq!(*rain, snapshot.metrics);
}

#[test]
fn weather_only_degrades() {
    let clear = ExplorerConfig::default();
    let clear_accuracy = ExplorerScoring.compute(&clear).unwrap().accuracy;

    for scenario in Scenario::ALL {
        let m = ExplorerScoring.compute(&clear.with_scenario(*scenario)).unwrap();
        assert!(m.accuracy <= clear_accuracy, "{} beat clear weather", scenario);
    }
}

#[test]
fn gauge_animates_to_scored_value() {
    let snapshot = ExperimentSnapshot::evaluate(&ExperimentConfig::showcase()).unwrap();
    let ramp = CountUp::new(0.0, snapshot.gauge.value);

    let mut clock = SteppedClock::at(1_000);
    let started = clock.elapsed_ms();
    assert_eq!(ramp.value_now(&clock, started), 0.0);

    clock.step(300);
    let midway = ramp.value_now(&clock, started);
    assert!(midway > 0.0 && midway < snapshot.gauge.value);

    clock.step(1_000);
    assert_eq!(ramp.value_now(&clock, started), snapshot.gauge.value);
    assert_eq!(ramp.frames(17).last(), Some(snapshot.gauge.value));
}

#[test]
fn every_snapshot_is_internally_consistent() {
    for config in common::all_experiment_configs(45.0) {
        let snap = ExperimentSnapshot::evaluate(&config).unwrap();
        assert_eq!(snap.gauge.grade, snap.metrics.grade);
        assert_eq!(snap.radar.get(RadarAxis::Accuracy), snap.metrics.accuracy);
        assert!(snap.scene.visible_count() >= 1);
    }
}
