//! Browser console logging.
//!
//! `tracing` events from both crates are emitted as `log` records (tracing's
//! `log` feature, active while no tracing subscriber is installed) and
//! `console_log` writes each record to the console method for its level.

use log::Level;
use wasm_bindgen::JsValue;
use web_sys::console;

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

/// Install the console logger and the panic hook.
///
/// Calling it twice is harmless; the second logger is refused and a console
/// warning is printed.
pub fn init(max_level: Level) {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(max_level) {
        console::warn_1(&JsValue::from_str(&format!("console logger not installed: {err}")));
    }
}

/// Parse a level name from the page (`"debug"`, `"warn"`, ...), defaulting to info.
#[must_use]
pub fn parse_level(raw: Option<&str>) -> Level {
    raw.map_or(Level::Info, |s| s.trim().parse().unwrap_or(Level::Info))
}
