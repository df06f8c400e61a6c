//! Image transform and gesture engine for the turntable viewer.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! transform pipeline of a single loaded image: translating raw pointer,
//! touch and wheel input into rotation, pan and zoom, applying slider-driven
//! skew, sizing the drawing surface so the transformed image never clips, and
//! issuing the draw calls in a fixed order. The host layer only wires DOM
//! events to the engine and shows the status text it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] session |
//! | [`viewport`] | Rotation / scale / pan state for viewport mode |
//! | [`gesture`] | Rotate-vs-pan classification of drag moves |
//! | [`input`] | Input event types and the drag state machine |
//! | [`sizing`] | Surface sizing policies (exact, diagonal, fit-then-pad) |
//! | [`skew`] | Skew state and expanded layout for tilt mode |
//! | [`render`] | Ordered transform and draw calls for both modes |
//! | [`surface`] | The drawing-surface trait |
//! | [`web`] | Canvas 2D surface and `createImageBitmap` decoding |
//! | [`image`] | Decoded images and load tickets |
//! | [`config`] | Serde configuration with validation |
//! | [`geometry`] | Point, size and screen-rectangle value types |
//! | [`error`] | Error types |
//! | [`consts`] | Default numeric constants (zoom limits, thresholds, etc.) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod image;
pub mod input;
pub mod render;
pub mod sizing;
pub mod skew;
pub mod surface;
pub mod viewport;
pub mod web;
