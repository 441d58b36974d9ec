//! Simulated detection overlay
//!
//! The detection preview draws bounding boxes over a fixed synthetic street
//! scene. How many boxes appear, and how confident they look, is derived from
//! the scored accuracy and the noise level so the overlay always agrees with
//! the numbers shown next to it.
//!
//! ## Derivation
//!
//! ```text
//! visible_count     = clamp(floor(accuracy / 100 × len), 1, len)
//! visible           = scene[..visible_count]          (always a prefix)
//! confidence_factor = 1 - noise / 250                 (≥ 0.60 at noise = 100)
//! confidence(obj)   = obj.base_confidence × confidence_factor
//! ```
//!
//! Noise is applied here a second time, on top of the penalty it already
//! applied to accuracy. The overlay therefore looks worse than the KPIs at
//! high noise; this matches the reference screens and is kept as is.
//!
//! The visible set is never shuffled: the same configuration always renders
//! the same scene.

use heapless::Vec;

use crate::{
    errors::{ScoringError, ScoringResult},
    scoring::utils::clamp_slider,
    traits::Validatable,
};

/// Largest scene the overlay renders
pub const MAX_SCENE_OBJECTS: usize = 16;

/// Noise level that would remove all confidence
const CONFIDENCE_NOISE_DIVISOR: f32 = 250.0;

/// Object class in the synthetic scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ObjectKind {
    /// Passenger car
    Car,
    /// Truck or bus
    Truck,
    /// Pedestrian
    Pedestrian,
    /// Cyclist
    Cyclist,
    /// Traffic light
    TrafficLight,
    /// Traffic sign
    TrafficSign,
}

impl ObjectKind {
    /// Box label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Truck => "truck",
            Self::Pedestrian => "pedestrian",
            Self::Cyclist => "cyclist",
            Self::TrafficLight => "traffic light",
            Self::TrafficSign => "sign",
        }
    }
}

/// One synthetic object, positioned on an 800×450 canvas
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SceneObject {
    /// Object class
    pub kind: ObjectKind,
    /// Box left edge (px)
    pub x: f32,
    /// Box top edge (px)
    pub y: f32,
    /// Box width (px)
    pub width: f32,
    /// Box height (px)
    pub height: f32,
    /// Confidence before noise, in (0, 1]
    pub base_confidence: f32,
}

impl SceneObject {
    const fn new(
        kind: ObjectKind,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        base_confidence: f32,
    ) -> Self {
        Self { kind, x, y, width, height, base_confidence }
    }
}

/// The street scene shown by the detection preview, most salient first
pub const DEFAULT_SCENE: [SceneObject; 8] = [
    SceneObject::new(ObjectKind::Car, 120.0, 260.0, 140.0, 80.0, 0.96),
    SceneObject::new(ObjectKind::Pedestrian, 360.0, 240.0, 40.0, 100.0, 0.91),
    SceneObject::new(ObjectKind::Car, 520.0, 270.0, 150.0, 85.0, 0.93),
    SceneObject::new(ObjectKind::Cyclist, 660.0, 250.0, 60.0, 90.0, 0.87),
    SceneObject::new(ObjectKind::Truck, 250.0, 220.0, 180.0, 110.0, 0.89),
    SceneObject::new(ObjectKind::TrafficLight, 430.0, 90.0, 24.0, 60.0, 0.84),
    SceneObject::new(ObjectKind::Pedestrian, 720.0, 235.0, 36.0, 95.0, 0.81),
    SceneObject::new(ObjectKind::TrafficSign, 600.0, 110.0, 40.0, 40.0, 0.78),
];

/// A visible object with its rendered confidence
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Detection {
    /// Scene object being drawn
    pub object: SceneObject,
    /// Rendered confidence, `base_confidence × confidence_factor`
    pub confidence: f32,
}

/// Overlay state for one scored configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VisibleScene {
    /// Visible prefix of the scene
    pub detections: Vec<Detection, MAX_SCENE_OBJECTS>,
    /// Noise-derived confidence scale
    pub confidence_factor: f32,
    /// Objects in the full scene
    pub scene_len: usize,
}

impl VisibleScene {
    /// Number of drawn boxes
    pub fn visible_count(&self) -> usize {
        self.detections.len()
    }

    /// Objects the detector "missed"
    pub fn missed_count(&self) -> usize {
        self.scene_len - self.detections.len()
    }
}

/// Number of visible objects for an accuracy, in `[1, len]` (0 for an empty scene)
pub fn visible_count(accuracy: f32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let raw = libm::floorf((accuracy / 100.0) * len as f32);
    if raw <= 1.0 {
        1
    } else {
        (raw as usize).min(len)
    }
}

/// Confidence scale for a clamped noise level
pub fn confidence_factor(noise: f32) -> f32 {
    1.0 - noise / CONFIDENCE_NOISE_DIVISOR
}

/// Derive the overlay for a scored accuracy and noise level
///
/// Scenes larger than [`MAX_SCENE_OBJECTS`] are rejected rather than cut,
/// since the visible count is a fraction of the full scene.
pub fn derive_visible(
    accuracy: f32,
    noise: f32,
    scene: &[SceneObject],
) -> ScoringResult<VisibleScene> {
    if !accuracy.is_valid() {
        return Err(ScoringError::InvalidInput { field: "accuracy" });
    }
    if scene.len() > MAX_SCENE_OBJECTS {
        log_warn!("scene of {} objects exceeds {}", scene.len(), MAX_SCENE_OBJECTS);
        return Err(ScoringError::InvalidInput { field: "scene" });
    }
    let noise = clamp_slider(noise, "noise")?;

    let factor = confidence_factor(noise);
    let count = visible_count(accuracy, scene.len());

    let mut detections = Vec::new();
    for object in &scene[..count] {
        // count <= scene.len() <= MAX_SCENE_OBJECTS
        let _ = detections.push(Detection {
            object: *object,
            confidence: object.base_confidence * factor,
        });
    }

    Ok(VisibleScene {
        detections,
        confidence_factor: factor,
        scene_len: scene.len(),
    })
}
