//! Viewer configuration.
//!
//! Every field has a default, so an empty JSON object (or no configuration at
//! all) yields the stock behavior: diagonal sizing, guides on, 50px rotation
//! radius, zoom clamped to `[0.5, 5.0]`. Hosts pass a JSON string and get a
//! validated [`ViewerConfig`] back.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    GUIDE_LINE_COLOR, GUIDE_LINE_LENGTH, GUIDE_LINE_WIDTH, MAX_SCALE, MIN_SCALE, ROTATION_SENSITIVITY,
    ROTATION_THRESHOLD_PX, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};
use crate::sizing::SizingPolicy;

/// Error returned by [`ViewerConfig::from_json`] and [`ViewerConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not valid JSON for this schema.
    #[error("failed to parse viewer config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but its value is unusable.
    #[error("invalid viewer config: {field} {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Zoom clamp and per-tick multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
        }
    }
}

/// Rotate-vs-pan disambiguation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Drags farther than this from the surface center rotate; nearer ones pan.
    pub rotation_threshold: f64,
    /// Multiplier on the pointer's angular sweep.
    pub rotation_sensitivity: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self { rotation_threshold: ROTATION_THRESHOLD_PX, rotation_sensitivity: ROTATION_SENSITIVITY }
    }
}

/// Stroke style of the crosshair guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideStyle {
    /// Any CSS colour string.
    pub color: String,
    pub width: f64,
    /// Half-length of each arm.
    pub length: f64,
}

impl Default for GuideStyle {
    fn default() -> Self {
        Self { color: GUIDE_LINE_COLOR.to_owned(), width: GUIDE_LINE_WIDTH, length: GUIDE_LINE_LENGTH }
    }
}

/// Complete viewer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub sizing: SizingPolicy,
    /// Whether the crosshair guide is drawn initially.
    pub guides: bool,
    pub guide: GuideStyle,
    pub gesture: GestureConfig,
    pub zoom: ZoomConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            sizing: SizingPolicy::default(),
            guides: true,
            guide: GuideStyle::default(),
            gesture: GestureConfig::default(),
            zoom: ZoomConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for values that fail [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let zoom = &self.zoom;
        check(zoom.min_scale > 0.0, "zoom.min_scale", "must be positive")?;
        check(zoom.max_scale >= zoom.min_scale, "zoom.max_scale", "must not be below min_scale")?;
        check(zoom.zoom_in_factor > 0.0, "zoom.zoom_in_factor", "must be positive")?;
        check(zoom.zoom_out_factor > 0.0, "zoom.zoom_out_factor", "must be positive")?;
        check(
            self.gesture.rotation_threshold >= 0.0,
            "gesture.rotation_threshold",
            "must not be negative",
        )?;
        check(self.guide.width > 0.0, "guide.width", "must be positive")?;
        if let SizingPolicy::FitThenPad { max_size, padding } = self.sizing {
            check(max_size > 0.0, "sizing.max_size", "must be positive")?;
            check(padding >= 1.0, "sizing.padding", "must be at least 1")?;
        }
        Ok(())
    }
}

fn check(ok: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
    if ok { Ok(()) } else { Err(ConfigError::Invalid { field, reason }) }
}
