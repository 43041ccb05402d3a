//! History retention configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_HISTORY_LENGTH;

/// Configuration for the run history.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of runs kept; oldest are evicted first. Default: 5.
    pub max_length: Option<usize>,
}

impl HistoryConfig {
    /// Returns the effective history bound, defaulting to 5.
    pub fn effective_max_length(&self) -> usize {
        self.max_length.unwrap_or(DEFAULT_MAX_HISTORY_LENGTH)
    }
}
