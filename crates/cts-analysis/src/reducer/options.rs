//! Runtime options of the reducer.

use cts_core::config::ReduceConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReduceOptions {
    /// Derive the optimized passing counter from the Debug sequence
    /// instead of the Optimized one.
    pub optimized_pass_from_debug: bool,
}

impl ReduceOptions {
    pub fn from_config(config: &ReduceConfig) -> Self {
        Self {
            optimized_pass_from_debug: config.effective_optimized_pass_from_debug(),
        }
    }
}
