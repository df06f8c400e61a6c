//! Surface sizing policies for viewport mode.
//!
//! A policy turns the source image dimensions into drawing-surface
//! dimensions, once per load. The same policy also tells the renderer at
//! which size to draw the image, so sizing and drawing can never disagree
//! about the fit scale.

#[cfg(test)]
#[path = "sizing_test.rs"]
mod sizing_test;

use serde::{Deserialize, Serialize};

use crate::consts::{FIT_PADDING, MAX_CANVAS_SIZE};
use crate::geometry::Size;

/// How the drawing surface is sized around a freshly loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum SizingPolicy {
    /// Surface equals the image. Any rotation clips the corners.
    Exact,
    /// Square surface with side `sqrt(w² + h²)`. Nothing clips at any angle.
    #[default]
    Diagonal,
    /// Downscale so the longest side fits `max_size`, then pad both sides by
    /// `padding`. Leaves headroom for moderate rotation but does not
    /// guarantee zero clipping.
    FitThenPad {
        #[serde(default = "default_max_size")]
        max_size: f64,
        #[serde(default = "default_padding")]
        padding: f64,
    },
}

fn default_max_size() -> f64 {
    MAX_CANVAS_SIZE
}

fn default_padding() -> f64 {
    FIT_PADDING
}

impl SizingPolicy {
    /// The fit-then-pad policy with its stock parameters.
    #[must_use]
    pub fn fit_then_pad() -> Self {
        Self::FitThenPad { max_size: MAX_CANVAS_SIZE, padding: FIT_PADDING }
    }

    /// Scale factor applied to the image before it is drawn.
    ///
    /// `1.0` for every policy except fit-then-pad, which only ever shrinks.
    #[must_use]
    pub fn fit_scale(&self, image: Size) -> f64 {
        match *self {
            Self::Exact | Self::Diagonal => 1.0,
            Self::FitThenPad { max_size, .. } => {
                let longest = image.longest_side();
                if longest > max_size && longest > 0.0 {
                    max_size / longest
                } else {
                    1.0
                }
            }
        }
    }

    /// Size at which the image is drawn on the surface.
    #[must_use]
    pub fn drawn_size(&self, image: Size) -> Size {
        image.scaled(self.fit_scale(image))
    }

    /// Surface dimensions for an image of the given size.
    #[must_use]
    pub fn compute_bounds(&self, image: Size) -> Size {
        match *self {
            Self::Exact => image,
            Self::Diagonal => {
                let diagonal = image.width.hypot(image.height);
                Size::new(diagonal, diagonal)
            }
            Self::FitThenPad { padding, .. } => self.drawn_size(image).scaled(padding),
        }
    }
}
