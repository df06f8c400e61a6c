#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::config::ZoomConfig;

/// Affine parameters of the drag/zoom/rotate mode.
///
/// `rotation` is in radians and unbounded; trigonometry wraps it.
/// `scale` is a uniform factor kept inside the configured zoom clamp.
/// `offset_x` / `offset_y` are in image-space units, applied after scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub rotation: f64,
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self { rotation: 0.0, scale: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }
}

impl ViewportState {
    /// Back to the identity transform.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add `angle` radians to the rotation.
    pub fn rotate_by(&mut self, angle: f64) {
        self.rotation += angle;
    }

    /// Pan by a screen-space delta.
    ///
    /// The delta is divided by the current scale so the image tracks the
    /// pointer at the same perceived speed at every zoom level.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx / self.scale;
        self.offset_y += dy / self.scale;
    }

    /// Apply one discrete wheel tick.
    ///
    /// Positive `delta_y` (scrolling away from the user) zooms out; anything
    /// else zooms in. The result is clamped to `[min_scale, max_scale]`.
    pub fn zoom_step(&mut self, delta_y: f64, zoom: &ZoomConfig) {
        let factor = if delta_y > 0.0 { zoom.zoom_out_factor } else { zoom.zoom_in_factor };
        self.scale = (self.scale * factor).clamp(zoom.min_scale, zoom.max_scale);
    }
}
