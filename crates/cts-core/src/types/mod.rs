//! Aggregate model for one reduction pass.
//! Closed tier/platform enums, fully populated counter tables, label sets.

pub mod enums;
pub mod labels;
pub mod run_stats;
pub mod table;

pub use enums::{BuildType, Level, ParseEnumError, Platform, Tier};
pub use labels::{LabelVocabulary, LevelLabels};
pub use run_stats::{LevelStats, RunStats};
pub use table::TierTable;
