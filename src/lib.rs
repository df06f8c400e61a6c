//! Turntable: browser page shell for the `viewer` engine.
//!
//! Finds the page elements, installs console logging and hands every DOM
//! event to [`viewer::engine::Engine`]. All image math lives in `viewer`.

pub mod app;
pub mod dom;
pub mod error;
pub mod logging;

use tracing::error;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::error::AppError;

/// Module entry point, run once when the wasm module is instantiated.
///
/// # Errors
///
/// Returns a JS `Error` if the page is missing required elements or the
/// viewer cannot be created.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or(AppError::NoWindow)?;
    let document = window.document().ok_or(AppError::NoDocument)?;
    let canvas: HtmlCanvasElement = dom::required(&document, dom::INTERACTIVE_CANVAS)?;

    logging::init(logging::parse_level(canvas.get_attribute(dom::LOG_LEVEL_ATTR).as_deref()));

    if let Err(err) = app::mount(&window, &document, canvas) {
        error!(code = err.error_code(), %err, "viewer failed to start");
        return Err(err.into());
    }
    Ok(())
}
