//! Input model: the events the host forwards and the drag state machine.
//!
//! The host translates DOM mouse, touch and wheel events into these types.
//! Coordinates are always client-space (`clientX` / `clientY`), the same
//! space the surface's bounding rectangle is reported in.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;

/// A press (mouse-down or touch-start) as seen by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Press {
    /// Client-space position of the primary contact.
    pub pos: Point,
    /// Number of simultaneous contacts. Mouse presses report 1.
    pub contacts: u32,
}

impl Press {
    /// A single-contact press, as produced by a mouse or one finger.
    #[must_use]
    pub fn single(pos: Point) -> Self {
        Self { pos, contacts: 1 }
    }

    /// Whether this press may start a drag. Multi-touch is reserved for
    /// pinch gestures, which the viewer does not recognize.
    #[must_use]
    pub fn starts_drag(&self) -> bool {
        self.contacts <= 1
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Drag state machine.
///
/// `Idle → Dragging` on a single-contact press while an image is loaded;
/// `Dragging → Idle` on any release, wherever it happens.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next press.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Client-space position of the previous pointer event.
        last_screen: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
