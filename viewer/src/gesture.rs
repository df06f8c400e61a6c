//! Drag-to-transform mapping.
//!
//! Every move event is classified on its own: if the pointer is farther than
//! the rotation threshold from the surface center the move rotates the image
//! by (a fraction of) the angle it swept around the center, otherwise it
//! pans. A single drag can therefore flip between rotating and panning as the
//! pointer crosses the threshold circle.
//!
//! The angle delta is a raw difference of two `atan2` values. A move that
//! crosses the ±π line (left of center) produces a jump of nearly 2π for that
//! one event; no unwrapping is done.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::config::GestureConfig;
use crate::geometry::Point;
use crate::viewport::ViewportState;

/// What one drag move does to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureStep {
    /// Add `angle` radians (already scaled by sensitivity) to the rotation.
    Rotate { angle: f64 },
    /// Pan by this screen-space delta (divided by scale when applied).
    Pan { dx: f64, dy: f64 },
}

/// Classify a move from `last` to `current` around the pivot `center`.
///
/// All three points are client-space.
#[must_use]
pub fn drag_step(last: Point, current: Point, center: Point, config: &GestureConfig) -> GestureStep {
    let rel = current.sub(center);
    if rel.length() > config.rotation_threshold {
        let last_rel = last.sub(center);
        let angle_delta = rel.angle() - last_rel.angle();
        GestureStep::Rotate { angle: angle_delta * config.rotation_sensitivity }
    } else {
        let delta = current.sub(last);
        GestureStep::Pan { dx: delta.x, dy: delta.y }
    }
}

impl GestureStep {
    /// Return `viewport` with this step applied.
    #[must_use]
    pub fn apply(self, mut viewport: ViewportState) -> ViewportState {
        match self {
            Self::Rotate { angle } => viewport.rotate_by(angle),
            Self::Pan { dx, dy } => viewport.pan_by(dx, dy),
        }
        viewport
    }
}
