//! Repository synchronization errors.

use super::error_code::{self, CtsErrorCode};

/// Errors from shelling out to version control.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Failed to run `{command}`: {message}")]
    Spawn { command: String, message: String },

    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },
}

impl CtsErrorCode for SyncError {
    fn error_code(&self) -> &'static str {
        error_code::SYNC_ERROR
    }
}
