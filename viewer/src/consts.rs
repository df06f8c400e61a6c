//! Shared numeric constants for the viewer crate.
//!
//! These are the defaults behind [`crate::config::ViewerConfig`]; the engine
//! always reads the configured values, never these directly.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest uniform scale the viewport may reach.
pub const MIN_SCALE: f64 = 0.5;

/// Largest uniform scale the viewport may reach.
pub const MAX_SCALE: f64 = 5.0;

/// Multiplier applied for one wheel tick towards the user (zoom in).
pub const ZOOM_IN_FACTOR: f64 = 1.05;

/// Multiplier applied for one wheel tick away from the user (zoom out).
pub const ZOOM_OUT_FACTOR: f64 = 0.95;

// ── Gestures ────────────────────────────────────────────────────

/// Screen-space distance from the surface center beyond which a drag rotates.
pub const ROTATION_THRESHOLD_PX: f64 = 50.0;

/// Fraction of the pointer's angular sweep applied to the image rotation.
pub const ROTATION_SENSITIVITY: f64 = 0.5;

// ── Sizing ──────────────────────────────────────────────────────

/// Longest side allowed after the fit step of the fit-then-pad policy.
pub const MAX_CANVAS_SIZE: f64 = 550.0;

/// Headroom multiplier applied after fitting.
pub const FIT_PADDING: f64 = 1.2;

// ── Skew ────────────────────────────────────────────────────────

/// Lower bound of the skew sliders.
pub const SKEW_MIN: f64 = -1.0;

/// Upper bound of the skew sliders.
pub const SKEW_MAX: f64 = 1.0;

// ── Guides ──────────────────────────────────────────────────────

/// Stroke colour of the crosshair guide.
pub const GUIDE_LINE_COLOR: &str = "red";

/// Stroke width of the crosshair guide, in surface pixels.
pub const GUIDE_LINE_WIDTH: f64 = 2.0;

/// Half-length of each crosshair arm, in surface pixels.
pub const GUIDE_LINE_LENGTH: f64 = 100.0;
