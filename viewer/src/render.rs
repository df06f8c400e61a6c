//! Rendering: issues the ordered transform and draw calls for each mode.
//!
//! This module is the only place that decides call order on a
//! [`Surface`]. It receives read-only views of the session state and does not
//! mutate any of it.
//!
//! The order is a contract. Each transform call composes onto the previous
//! matrix, so viewport mode must be translate-to-center, rotate, scale,
//! translate-by-offset, in that order, for rotation and zoom to pivot on the
//! surface center while the pan stays in image space.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::config::GuideStyle;
use crate::error::SurfaceError;
use crate::geometry::{Point, Size};
use crate::image::SourceImage;
use crate::sizing::SizingPolicy;
use crate::skew::SkewLayout;
use crate::surface::{LineStyle, Surface};
use crate::viewport::ViewportState;

/// Draw the viewport-mode scene.
///
/// `surface_size` is the size the surface was given for this image (see
/// [`SizingPolicy::compute_bounds`]); its center is the pivot. The image is
/// drawn centered on the pivot at [`SizingPolicy::drawn_size`]. Pass
/// `guides` to stroke the crosshair on top, unaffected by the image transform.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_viewport<S: Surface>(
    surface: &mut S,
    image: &SourceImage<S::Image>,
    viewport: &ViewportState,
    surface_size: Size,
    sizing: &SizingPolicy,
    guides: Option<&GuideStyle>,
) -> Result<(), SurfaceError> {
    let center = surface_size.center();
    let drawn = sizing.drawn_size(image.size());

    surface.clear()?;
    surface.push_transform();
    surface.translate(center.x, center.y)?;
    surface.rotate(viewport.rotation)?;
    surface.scale(viewport.scale, viewport.scale)?;
    surface.translate(viewport.offset_x, viewport.offset_y)?;
    surface.draw_image(&image.handle, Point::new(-drawn.width / 2.0, -drawn.height / 2.0), Some(drawn))?;
    surface.pop_transform();

    if let Some(guide) = guides {
        draw_guides(surface, center, guide)?;
    }
    Ok(())
}

/// Draw the tilt-mode scene into a surface already sized to `layout.surface`.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_tilt<S: Surface>(
    surface: &mut S,
    image: &SourceImage<S::Image>,
    layout: &SkewLayout,
) -> Result<(), SurfaceError> {
    surface.clear()?;
    surface.push_transform();
    surface.translate(layout.translate.x, layout.translate.y)?;
    surface.shear(layout.skew.skew_x, layout.skew.skew_y)?;
    surface.draw_image(&image.handle, Point::new(0.0, 0.0), None)?;
    surface.pop_transform();
    Ok(())
}

// =============================================================
// Guides
// =============================================================

fn draw_guides<S: Surface>(surface: &mut S, center: Point, guide: &GuideStyle) -> Result<(), SurfaceError> {
    let style = LineStyle { color: guide.color.clone(), width: guide.width };
    let len = guide.length;

    surface.push_transform();
    surface.stroke_line(Point::new(center.x - len, center.y), Point::new(center.x + len, center.y), &style)?;
    surface.stroke_line(Point::new(center.x, center.y - len), Point::new(center.x, center.y + len), &style)?;
    surface.pop_transform();
    Ok(())
}
