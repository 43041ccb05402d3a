//! Reduction configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the tree reducer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReduceConfig {
    /// Derive the optimized passing counter from the Debug sequence, as
    /// older trackers did. Default: false.
    pub optimized_pass_from_debug: Option<bool>,
}

impl ReduceConfig {
    pub fn effective_optimized_pass_from_debug(&self) -> bool {
        self.optimized_pass_from_debug.unwrap_or(false)
    }
}
