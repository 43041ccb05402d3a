//! Repository synchronization configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_COMMIT_MESSAGE;

/// Configuration for pulling the dump and publishing results.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SyncConfig {
    /// Pull before and commit/push after each recorded run. Default: true.
    pub enabled: Option<bool>,
    /// Commit message for published runs.
    pub commit_message: Option<String>,
}

impl SyncConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_commit_message(&self) -> &str {
        self.commit_message
            .as_deref()
            .unwrap_or(DEFAULT_COMMIT_MESSAGE)
    }
}
