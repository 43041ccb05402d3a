//! Shape faults found while reducing a dump.

use super::error_code::{self, CtsErrorCode};

/// Faults that abort the reduction of the current run.
///
/// `record` is the `category::test[::subtest]` path of the offending record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReduceError {
    #[error("Missing required field `{field}` in {record}")]
    MissingField { record: String, field: &'static str },

    #[error("Platform {name} not recognized in {record}")]
    UnknownPlatform { record: String, name: String },
}

impl CtsErrorCode for ReduceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => error_code::MISSING_FIELD,
            Self::UnknownPlatform { .. } => error_code::UNKNOWN_PLATFORM,
        }
    }
}
