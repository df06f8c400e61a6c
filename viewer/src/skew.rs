//! Tilt mode: skew coefficients and the layout that keeps a sheared image
//! on the surface.
//!
//! The renderer applies the canvas matrix `[1, skew_y, skew_x, 1, 0, 0]`,
//! i.e. `x' = x + skew_x·y` and `y' = skew_y·x + y`. The layout grows the
//! surface by the cross-axis coefficient times the opposite dimension and
//! shifts the drawing so the positive-`skew_y` / negative-`skew_x` cases stay
//! clear of negative coordinates. Only those two signs are compensated; the
//! other two rely on the extra surface area alone.

#[cfg(test)]
#[path = "skew_test.rs"]
mod skew_test;

use crate::consts::{SKEW_MAX, SKEW_MIN};
use crate::geometry::{Point, Size};

/// Current skew slider values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SkewState {
    pub skew_x: f64,
    pub skew_y: f64,
}

impl SkewState {
    /// Build a state, clamping both values into the slider range.
    #[must_use]
    pub fn new(skew_x: f64, skew_y: f64) -> Self {
        Self { skew_x: clamp_slider(skew_x), skew_y: clamp_slider(skew_y) }
    }

    pub fn set_x(&mut self, value: f64) {
        self.skew_x = clamp_slider(value);
    }

    pub fn set_y(&mut self, value: f64) {
        self.skew_y = clamp_slider(value);
    }

    /// Surface layout for an image of the given size under this skew.
    #[must_use]
    pub fn layout(&self, image: Size) -> SkewLayout {
        let grow_x = (self.skew_y * image.height).abs();
        let grow_y = (self.skew_x * image.width).abs();
        let translate_x = if self.skew_y > 0.0 { grow_x } else { 0.0 };
        let translate_y = if self.skew_x < 0.0 { grow_y } else { 0.0 };
        SkewLayout {
            surface: Size::new(image.width + grow_x, image.height + grow_y),
            translate: Point::new(translate_x, translate_y),
            skew: *self,
        }
    }
}

/// NaN (an empty or garbled slider value) collapses to zero skew.
fn clamp_slider(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(SKEW_MIN, SKEW_MAX) }
}

/// Everything the renderer needs to draw one tilt application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkewLayout {
    /// Expanded surface dimensions.
    pub surface: Size,
    /// Compensating translation applied before the shear.
    pub translate: Point,
    /// The coefficients the layout was computed from.
    pub skew: SkewState,
}
