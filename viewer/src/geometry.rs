//! Plain geometry value types shared by every module.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in either screen (client) space or surface space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }

    /// Euclidean length of the vector from the origin to this point.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of the vector from the origin to this point, in radians (`atan2(y, x)`).
    #[must_use]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// Width and height of an image or drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The center point of a box of this size anchored at the origin.
    #[must_use]
    pub fn center(self) -> Point {
        Point { x: self.width / 2.0, y: self.height / 2.0 }
    }

    /// Both dimensions multiplied by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Size {
        Size { width: self.width * factor, height: self.height * factor }
    }

    /// Rounded up to whole pixels, as a canvas backing store holds it.
    /// Non-finite or negative extents become zero.
    #[must_use]
    pub fn whole_pixels(self) -> Size {
        let px = |v: f64| if v.is_finite() && v > 0.0 { v.ceil() } else { 0.0 };
        Size { width: px(self.width), height: px(self.height) }
    }

    /// The longer of the two sides.
    #[must_use]
    pub fn longest_side(self) -> f64 {
        self.width.max(self.height)
    }
}

/// On-screen bounding rectangle of the drawing surface, in client pixels.
///
/// This is what `getBoundingClientRect()` reports. It can differ from the
/// surface's pixel size when the element is scaled by CSS, so gesture math
/// always derives the pivot from here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Client-space center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point { x: self.left + self.width / 2.0, y: self.top + self.height / 2.0 }
    }
}
