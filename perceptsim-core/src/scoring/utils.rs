//! Shared clamping and factor helpers
//!
//! Both strategies finish the same way: clamp the sliders at the boundary,
//! scale the baseline, then clamp the outputs into their display ranges.
//! These are pure functions with no allocation.
//!
//! ## Boundary Clamping
//!
//! Slider values come from UI widgets that can in principle be driven out of
//! range. Finite values are clamped to `[0, 100]` with a warning; NaN and
//! infinities are rejected because there is no meaningful value to clamp to.
//!
//! ```text
//! noise = 140   → 100  (warn)
//! noise = -3    → 0    (warn)
//! noise = NaN   → Err(InvalidInput { field: "noise" })
//! ```

use crate::{
    constants::scoring::{
        MAX_NOISE_ACCURACY_LOSS, MIN_FPS, PERCENT_METRIC_MAX, PERCENT_METRIC_MIN,
        SLIDER_BOOST_FLOOR, SLIDER_BOOST_SPAN, SLIDER_MAX, SLIDER_MIN,
    },
    errors::{ScoringError, ScoringResult},
    traits::Validatable,
};

/// Clamp a slider to `[0, 100]`, rejecting non-finite input
pub fn clamp_slider(value: f32, field: &'static str) -> ScoringResult<f32> {
    if !value.is_valid() {
        return Err(ScoringError::InvalidInput { field });
    }

    let clamped = value.clamp(SLIDER_MIN, SLIDER_MAX);
    if clamped != value {
        log_warn!("{} out of range: {} clamped to {}", field, value, clamped);
    }
    Ok(clamped)
}

/// Clamp a percentage metric to `[10, 99]`
pub fn clamp_percent(value: f32) -> f32 {
    value.clamp(PERCENT_METRIC_MIN, PERCENT_METRIC_MAX)
}

/// Round throughput to whole frames, never below one
pub fn round_fps(fps: f32) -> u32 {
    let rounded = libm::roundf(fps);
    if rounded.is_valid() && rounded >= MIN_FPS as f32 {
        rounded as u32
    } else {
        MIN_FPS
    }
}

/// Multiplicative penalty for a clamped noise level
///
/// Spans [0.70, 1.00]: noise never removes more than 30 % of accuracy.
pub fn noise_penalty(noise: f32) -> f32 {
    1.0 - (noise / 100.0) * MAX_NOISE_ACCURACY_LOSS
}

/// Multiplicative boost for a clamped accuracy slider
///
/// Spans [0.80, 1.00]: the slider attenuates, it never amplifies.
pub fn slider_boost(slider: f32) -> f32 {
    SLIDER_BOOST_FLOOR + (slider / 100.0) * SLIDER_BOOST_SPAN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_clamping() {
        assert_eq!(clamp_slider(42.0, "noise"), Ok(42.0));
        assert_eq!(clamp_slider(140.0, "noise"), Ok(100.0));
        assert_eq!(clamp_slider(-3.0, "noise"), Ok(0.0));
        assert_eq!(
            clamp_slider(f32::NAN, "accuracy_slider"),
            Err(ScoringError::InvalidInput { field: "accuracy_slider" })
        );
        assert!(clamp_slider(f32::INFINITY, "noise").is_err());
    }

    #[test]
    fn percent_clamping() {
        assert_eq!(clamp_percent(105.3), 99.0);
        assert_eq!(clamp_percent(3.0), 10.0);
        assert_eq!(clamp_percent(55.5), 55.5);
    }

    #[test]
    fn fps_rounding() {
        assert_eq!(round_fps(25.4), 25);
        assert_eq!(round_fps(25.5), 26);
        assert_eq!(round_fps(0.2), 1);
        assert_eq!(round_fps(f32::NAN), 1);
    }

    #[test]
    fn penalty_and_boost_ranges() {
        assert_eq!(noise_penalty(0.0), 1.0);
        assert!((noise_penalty(100.0) - 0.70).abs() < 1e-6);
        assert!((slider_boost(0.0) - 0.80).abs() < 1e-6);
        assert!((slider_boost(50.0) - 0.90).abs() < 1e-6);
        assert!((slider_boost(100.0) - 1.00).abs() < 1e-6);
    }
}
