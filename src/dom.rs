//! Page lookups and the pure mappings between DOM values and engine types.

use viewer::config::{ConfigError, ViewerConfig};
use viewer::engine::StatusKind;
use viewer::geometry::{Point, Size};
use viewer::input::{Press, WheelDelta};
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent, TouchEvent, WheelEvent};

use crate::error::AppError;

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

pub const IMAGE_UPLOAD: &str = "imageUpload";
pub const STATUS_MESSAGE: &str = "statusMessage";
pub const CANVAS_CONTAINER: &str = "canvasContainer";
pub const INTERACTIVE_CANVAS: &str = "interactiveCanvas";
pub const SKEW_X: &str = "skewX";
pub const SKEW_Y: &str = "skewY";
pub const APPLY_TILT: &str = "applyTilt";
pub const SHOW_VIEWPORT: &str = "showViewport";
pub const TOGGLE_GUIDES: &str = "toggleGuides";

/// Canvas attribute holding optional JSON viewer configuration.
pub const CONFIG_ATTR: &str = "data-config";
/// Canvas attribute holding the console log level.
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

/// Look up a required element and cast it.
///
/// # Errors
///
/// [`AppError::MissingElement`] if no element has `id`, [`AppError::WrongElement`]
/// if it is not a `T`.
pub fn required<T: JsCast>(document: &Document, id: &'static str) -> Result<T, AppError> {
    optional(document, id)?.ok_or(AppError::MissingElement(id))
}

/// Look up an element that the page may leave out.
///
/// # Errors
///
/// [`AppError::WrongElement`] if the element exists but is not a `T`.
pub fn optional<T: JsCast>(document: &Document, id: &'static str) -> Result<Option<T>, AppError> {
    match document.get_element_by_id(id) {
        Some(element) => element.dyn_into::<T>().map(Some).map_err(|_| AppError::WrongElement(id)),
        None => Ok(None),
    }
}

/// Parse the canvas `data-config` attribute. Absent or blank means defaults.
///
/// # Errors
///
/// Propagates [`ConfigError`] for malformed or invalid JSON.
pub fn read_config(raw: Option<&str>) -> Result<ViewerConfig, ConfigError> {
    match raw.map(str::trim) {
        Some(json) if !json.is_empty() => ViewerConfig::from_json(json),
        _ => Ok(ViewerConfig::default()),
    }
}

/// Class list for the status element.
#[must_use]
pub fn status_class(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::Info => "status-message",
        StatusKind::Success => "status-message success",
        StatusKind::Error => "status-message error",
    }
}

/// CSS height for the canvas container, in whole pixels.
#[must_use]
pub fn container_height(size: Size) -> String {
    format!("{}px", size.height.max(0.0).ceil())
}

/// A press from the first of `contacts` simultaneous touches.
#[must_use]
pub fn touch_press(first: Option<Point>, contacts: u32) -> Option<Press> {
    first.map(|pos| Press { pos, contacts })
}

// --- Event readers ---

#[must_use]
pub fn mouse_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Client position of the first active touch, if any.
#[must_use]
pub fn first_touch(event: &TouchEvent) -> Option<Point> {
    event
        .touches()
        .get(0)
        .map(|touch| Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

#[must_use]
pub fn touch_start(event: &TouchEvent) -> Option<Press> {
    touch_press(first_touch(event), event.touches().length())
}

#[must_use]
pub fn wheel_delta(event: &WheelEvent) -> WheelDelta {
    WheelDelta { dx: event.delta_x(), dy: event.delta_y() }
}
