//! The drawing-surface seam.
//!
//! The renderer only ever talks to a [`Surface`]. The browser backend is
//! [`crate::web::CanvasSurface`]; tests use a recorder. Transform calls
//! compose onto the current matrix exactly like the Canvas 2D API.

#[cfg(test)]
#[path = "recording_test.rs"]
pub(crate) mod recording;

use crate::error::SurfaceError;
use crate::geometry::{Point, Size};

/// Stroke parameters for [`Surface::stroke_line`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// Any CSS colour string.
    pub color: String,
    pub width: f64,
}

/// A 2D drawing target with a transform stack.
pub trait Surface {
    /// Opaque drawable image handle the backend understands.
    type Image;

    /// Set the surface's pixel dimensions. Clears content and transform.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend cannot resize.
    fn resize(&mut self, size: Size) -> Result<(), SurfaceError>;

    /// Clear the whole surface.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Save the current transform (and style) state.
    fn push_transform(&mut self);

    /// Restore the most recently pushed state.
    fn pop_transform(&mut self);

    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn translate(&mut self, x: f64, y: f64) -> Result<(), SurfaceError>;

    /// Rotate by `angle` radians, clockwise in a y-down space.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn rotate(&mut self, angle: f64) -> Result<(), SurfaceError>;

    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn scale(&mut self, sx: f64, sy: f64) -> Result<(), SurfaceError>;

    /// Multiply by the shear matrix `[1, shear_y, shear_x, 1, 0, 0]`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn shear(&mut self, shear_x: f64, shear_y: f64) -> Result<(), SurfaceError>;

    /// Draw `image` with its top-left corner at `at`, stretched to `size`
    /// when given, otherwise at its natural size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn draw_image(&mut self, image: &Self::Image, at: Point, size: Option<Size>) -> Result<(), SurfaceError>;

    /// Stroke a single straight segment.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the backend rejects the call.
    fn stroke_line(&mut self, from: Point, to: Point, style: &LineStyle) -> Result<(), SurfaceError>;
}
