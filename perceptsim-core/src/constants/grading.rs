//! Grade Thresholds and Display Colors
//!
//! Grades are assigned from final accuracy alone. The thresholds are
//! fixed and must not be derived from any other configuration field.

// ===== ACCURACY THRESHOLDS =====

/// Minimum accuracy (%) for an Excellent grade.
pub const GRADE_EXCELLENT_MIN_ACCURACY: f32 = 82.0;

/// Minimum accuracy (%) for a Good grade.
pub const GRADE_GOOD_MIN_ACCURACY: f32 = 74.0;

/// Minimum accuracy (%) for a Fair grade. Anything below is Poor.
pub const GRADE_FAIR_MIN_ACCURACY: f32 = 60.0;

// ===== DISPLAY COLORS =====

/// Gauge and badge color for Excellent (green).
pub const GRADE_EXCELLENT_COLOR: &str = "#22c55e";

/// Gauge and badge color for Good (blue).
pub const GRADE_GOOD_COLOR: &str = "#3b82f6";

/// Gauge and badge color for Fair (amber).
pub const GRADE_FAIR_COLOR: &str = "#f59e0b";

/// Gauge and badge color for Poor (red).
pub const GRADE_POOR_COLOR: &str = "#ef4444";
