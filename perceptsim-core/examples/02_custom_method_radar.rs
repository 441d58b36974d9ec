//! Custom Method Radar Example
//!
//! Compares a user-submitted method against each dataset's reference entry
//! on the six radar axes.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_custom_method_radar
//! ```

use perceptsim_core::{radar::RadarComparison, CustomMethod, Dataset};

fn main() {
    println!("PerceptSim Custom Method Radar");
    println!("==============================\n");

    let method = CustomMethod {
        accuracy: 88.5,
        precision: 90.0,
        recall: 85.0,
        fps: 28.0,
        model_size_mb: 420.0,
        epochs: 30.0,
    };

    for dataset in Dataset::ALL {
        let comparison = RadarComparison::new(*dataset, &method);
        println!("{}:", dataset.label());

        let deltas = comparison.deltas();
        for (i, (axis, custom)) in comparison.custom.iter().enumerate() {
            println!(
                "  {:<17} custom {:>5.1}  reference {:>5.1}  ({:+.1})",
                axis.label(),
                custom,
                comparison.baseline.get(axis),
                deltas[i]
            );
        }

        let wins: Vec<_> = comparison.wins().map(|axis| axis.label()).collect();
        println!("  wins on: {}\n", if wins.is_empty() { "none".into() } else { wins.join(", ") });
    }
}
