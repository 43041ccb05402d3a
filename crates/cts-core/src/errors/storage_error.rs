//! History storage errors.

use super::error_code::{self, CtsErrorCode};

/// Errors from the SQLite-backed history store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration to v{version} failed: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("History entry {seq} could not be decoded: {message}")]
    CorruptEntry { seq: i64, message: String },

    #[error("History entry could not be encoded: {message}")]
    Encode { message: String },
}

impl CtsErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } | Self::Encode { .. } => error_code::STORAGE_ERROR,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::CorruptEntry { .. } => error_code::HISTORY_CORRUPT,
        }
    }
}
