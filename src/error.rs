use thiserror::Error;
use viewer::config::ConfigError;
use viewer::error::ViewerError;
use wasm_bindgen::JsValue;

/// Failures while mounting the page shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element #{0}")]
    MissingElement(&'static str),
    #[error("element #{0} has the wrong type")]
    WrongElement(&'static str),
    #[error("failed to register `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Viewer(#[from] ViewerError),
}

impl AppError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoWindow | Self::NoDocument => "E_NO_DOM",
            Self::MissingElement(_) | Self::WrongElement(_) => "E_ELEMENT",
            Self::Listener { .. } => "E_LISTENER",
            Self::Config(_) => "E_CONFIG",
            Self::Viewer(err) => err.error_code(),
        }
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        js_sys::Error::new(&format!("{}: {err}", err.error_code())).into()
    }
}
