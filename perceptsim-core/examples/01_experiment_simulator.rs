//! Experiment Simulator Example
//!
//! Walks through what the Results page does on every slider change.
//!
//! ## What You'll Learn
//!
//! - Scoring a configuration with a named strategy
//! - How noise and the accuracy slider move accuracy and grade
//! - Building chart series by re-scoring one configuration
//! - Driving the count-up gauge from a clock
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_experiment_simulator
//! ```

use perceptsim_core::{
    animation::CountUp,
    sweep,
    time::{FrameClock, SteppedClock},
    ExperimentConfig, ExperimentScoring, ExperimentSnapshot, ScoringError, ScoringStrategy,
};

fn main() -> Result<(), ScoringError> {
    println!("PerceptSim Experiment Simulator");
    println!("===============================\n");

    let config = ExperimentConfig::showcase();
    let snapshot = ExperimentSnapshot::evaluate(&config)?;
    print_snapshot(&snapshot);

    println!("\nNoise sweep:");
    println!("------------");
    for point in sweep::noise_curve(&ExperimentScoring, config, 20.0) {
        let (noise, metrics) = point?;
        println!(
            "  noise {:>5.1} -> accuracy {:>5.1}%  loss {:.3}  {}",
            noise, metrics.accuracy, metrics.loss, metrics.grade
        );
    }

    println!("\nModel comparison:");
    println!("-----------------");
    for (model, metrics) in sweep::model_comparison(&ExperimentScoring, &config)? {
        println!("  {:<12} {:>5.1}%  {:>3} fps", model.label(), metrics.accuracy, metrics.fps);
    }

    println!("\nSlider positions:");
    println!("-----------------");
    for slider in [0.0, 50.0, 100.0] {
        let m = ExperimentScoring.compute(&config.with_accuracy_slider(slider))?;
        println!("  slider {:>5.1} -> {:>5.1}%", slider, m.accuracy);
    }

    println!("\nGauge animation:");
    println!("----------------");
    let ramp = CountUp::new(0.0, snapshot.gauge.value);
    let mut clock = SteppedClock::default();
    let started = clock.elapsed_ms();
    while !ramp.is_finished(clock.since(started)) {
        println!("  t={:>3}ms  {:>5.1}", clock.since(started), ramp.value_now(&clock, started));
        clock.step(100);
    }
    println!("  final    {:>5.1}", ramp.value_now(&clock, started));

    // Sliders can only send NaN through a broken widget
    match ExperimentScoring.compute(&config.with_noise(f32::NAN)) {
        Ok(_) => println!("\nUnexpected: NaN accepted"),
        Err(e) => println!("\nRejected input: {}", e),
    }

    Ok(())
}

fn print_snapshot(snapshot: &ExperimentSnapshot) {
    let m = &snapshot.metrics;
    println!(
        "{} / {} / {} (noise {})",
        snapshot.config.dataset.label(),
        snapshot.config.model.label(),
        snapshot.config.compute.label(),
        snapshot.config.noise
    );
    println!(
        "  accuracy  {:>5.1}%  [{} {}]",
        m.accuracy, snapshot.gauge.grade, snapshot.gauge.color
    );
    println!("  precision {:>5.1}%", m.precision);
    println!("  recall    {:>5.1}%", m.recall);
    println!("  mAP       {:>5.1}%", m.map);
    println!("  fps       {:>5}", m.fps);
    println!("  loss      {:>7.3}", m.loss);
    println!(
        "  detections {}/{} (confidence x{:.2})",
        snapshot.scene.visible_count(),
        snapshot.scene.scene_len,
        snapshot.scene.confidence_factor
    );
}
