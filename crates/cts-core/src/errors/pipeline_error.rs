//! Top-level error for one tracker invocation.

use super::error_code::CtsErrorCode;
use super::{ConfigError, InputError, ReduceError, RenderError, StorageError, SyncError};

/// Errors that can end an invocation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Reduction error: {0}")]
    Reduce(#[from] ReduceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),
}

impl CtsErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
            Self::Reduce(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Render(e) => e.error_code(),
            Self::Sync(e) => e.error_code(),
        }
    }
}
