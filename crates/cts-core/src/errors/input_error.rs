//! Input-unavailable and unreadable-dump errors.

use super::error_code::{self, CtsErrorCode};

/// Errors raised before any reduction starts.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Source path not specified")]
    SourceNotSpecified,

    #[error("Source path is not accessible: {path}")]
    SourceMissing { path: String },

    #[error("Required directory is not accessible: {path}")]
    DirectoryMissing { path: String },

    #[error("Dump file is not accessible: {path}")]
    DumpMissing { path: String },

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed dump {path}: {message}")]
    Malformed { path: String, message: String },
}

impl CtsErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => error_code::INPUT_MALFORMED,
            _ => error_code::INPUT_UNAVAILABLE,
        }
    }
}
