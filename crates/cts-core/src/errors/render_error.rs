//! Chart rendering errors.

use super::error_code::{self, CtsErrorCode};

/// Errors raised while producing chart artifacts.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to draw {chart}: {message}")]
    Draw { chart: String, message: String },

    #[error("Image directory is not accessible: {path}")]
    OutputMissing { path: String },
}

impl CtsErrorCode for RenderError {
    fn error_code(&self) -> &'static str {
        error_code::RENDER_ERROR
    }
}
