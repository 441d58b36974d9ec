//! Scoring Engine Constants
//!
//! Bounds, penalty ranges and secondary coefficients applied by both
//! scoring strategies after the baseline and modifier lookups.

// ===== INPUT RANGES =====

/// Lower bound of every continuous slider (noise, accuracy slider).
pub const SLIDER_MIN: f32 = 0.0;

/// Upper bound of every continuous slider.
pub const SLIDER_MAX: f32 = 100.0;

// ===== OUTPUT CLAMPS =====

/// Minimum value for percentage metrics (accuracy, precision, recall, mAP).
///
/// Results never reach 0: a zero score reads as a broken widget rather than
/// a bad model.
pub const PERCENT_METRIC_MIN: f32 = 10.0;

/// Maximum value for percentage metrics.
///
/// Results never reach 100: perfect perception is not a plausible outcome.
pub const PERCENT_METRIC_MAX: f32 = 99.0;

/// Minimum frames per second after rounding.
pub const MIN_FPS: u32 = 1;

// ===== NOISE PENALTY =====

/// Fraction of accuracy removed at noise = 100.
///
/// `penalty = 1 - (noise / 100) * MAX_NOISE_ACCURACY_LOSS`, so the penalty
/// spans [0.70, 1.00].
pub const MAX_NOISE_ACCURACY_LOSS: f32 = 0.30;

// ===== ACCURACY SLIDER =====

/// Boost applied at slider = 0.
///
/// `boost = SLIDER_BOOST_FLOOR + (slider / 100) * SLIDER_BOOST_SPAN`, so the
/// slider only ever attenuates, within [0.80, 1.00].
pub const SLIDER_BOOST_FLOOR: f32 = 0.80;

/// Boost range covered between slider = 0 and slider = 100.
pub const SLIDER_BOOST_SPAN: f32 = 0.20;

// ===== SECONDARY COEFFICIENTS =====

/// Precision scale relative to its scaled baseline.
pub const PRECISION_COEFFICIENT: f32 = 0.98;

/// Recall scale relative to its scaled baseline.
pub const RECALL_COEFFICIENT: f32 = 0.96;

/// mAP scale relative to the scaled baseline precision.
///
/// Keeps precision >= recall >= mAP as a tendency, not a hard constraint.
pub const MAP_COEFFICIENT: f32 = 0.92;
