//! Raw dump input: typed shape and file loading.

pub mod loader;
pub mod types;

pub use loader::{dump_modified, load_dump, LoadedDump};
pub use types::{
    BuildPair, Category, Dump, ExpectedOutcomes, ImplementationStatus, Properties,
    SubtestRecord, TestRecord,
};
