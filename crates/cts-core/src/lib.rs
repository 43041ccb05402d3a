//! Core crate for the CTS result tracker.
//!
//! Holds the aggregate model produced by a reduction pass, the
//! per-subsystem error enums, layered configuration, and tracing setup.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use types::{
    BuildType, LabelVocabulary, Level, LevelLabels, LevelStats, Platform, RunStats, Tier,
    TierTable,
};
