//! Error types for the viewer core.
//!
//! Nothing in this crate is fatal. Gesture entry points swallow
//! [`ViewerError::NoImageLoaded`] and become no-ops; decode failures turn into
//! a user-visible status; stale loads are logged and dropped.

use crate::config::ConfigError;

/// A drawing call on a [`crate::surface::Surface`] failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The backend rejected a call. Carries the backend's own description.
    #[error("surface call `{call}` failed: {reason}")]
    Call { call: &'static str, reason: String },
    /// The backend could not provide a 2D context at all.
    #[error("2d context unavailable: {0}")]
    Context(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("no image loaded")]
    NoImageLoaded,
    #[error("image decode failed: {0}")]
    DecodeFailure(String),
    #[error("stale load: ticket {ticket} superseded by {current}")]
    StaleLoad { ticket: u64, current: u64 },
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ViewerError {
    /// Stable machine-readable code, used as the `code` field in log events.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoImageLoaded => "E_NO_IMAGE",
            Self::DecodeFailure(_) => "E_DECODE",
            Self::StaleLoad { .. } => "E_STALE_LOAD",
            Self::Surface(_) => "E_SURFACE",
            Self::Config(_) => "E_CONFIG",
        }
    }
}
