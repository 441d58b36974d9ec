//! Radar Chart Normalization
//!
//! Every axis of the six-axis radar is normalized onto a 0-99 scale so the
//! dataset baseline and a custom method can be overlaid on one chart.

/// Upper bound of every radar axis.
pub const RADAR_AXIS_MAX: f32 = 99.0;

/// Lower bound of the FPS and Size-Score axes.
pub const RADAR_AXIS_MIN: f32 = 0.0;

/// Frame rate (FPS) that maps to a full FPS axis.
pub const RADAR_FPS_CEILING: f32 = 60.0;

/// Model size (MB) at which the Size-Score axis reaches zero.
pub const RADAR_SIZE_CEILING_MB: f32 = 5000.0;

/// Epoch count that would remove `RADAR_EPOCH_SPAN` points from the axis.
pub const RADAR_EPOCH_REFERENCE: f32 = 100.0;

/// Points removed from the Epoch-Efficiency axis per `RADAR_EPOCH_REFERENCE` epochs.
pub const RADAR_EPOCH_SPAN: f32 = 70.0;

/// Floor of the Epoch-Efficiency axis.
///
/// Keeps the radar polygon from collapsing to a point for long trainings.
pub const RADAR_EPOCH_FLOOR: f32 = 10.0;
