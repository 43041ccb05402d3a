//! CtsErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string,
/// printed by the CLI before the message.
pub trait CtsErrorCode {
    /// Returns the error code string (e.g., "REDUCE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn tagged(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INPUT_UNAVAILABLE: &str = "INPUT_UNAVAILABLE";
pub const INPUT_MALFORMED: &str = "INPUT_MALFORMED";
pub const MISSING_FIELD: &str = "MISSING_FIELD";
pub const UNKNOWN_PLATFORM: &str = "UNKNOWN_PLATFORM";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const HISTORY_CORRUPT: &str = "HISTORY_CORRUPT";
pub const RENDER_ERROR: &str = "RENDER_ERROR";
pub const SYNC_ERROR: &str = "SYNC_ERROR";
