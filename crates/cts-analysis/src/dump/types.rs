//! Typed shape of a CTS result dump.
//!
//! ```text
//! { "<category path>": {
//!     "properties": { ... },                       (ignored)
//!     "tests": { "<test>": {
//!         "properties": { "is_disabled": bool,
//!                         "implementation_status": { "<platform>": { "Debug": id, "Optimized": id } },
//!                         "expected": { "<platform>": { "Debug": [label], "Optimized": [label] } } },
//!         "subtests": { "<subtest>": { "properties": { ... } } } } } } }
//! ```
//!
//! Fields the reducer requires are still `Option` here so that a missing
//! value surfaces as a `ReduceError` naming the record, not as a bare
//! deserialization failure. Unknown keys are ignored.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Whole dump: category path to category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Dump {
    pub categories: BTreeMap<String, Category>,
}

impl Dump {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub tests: BTreeMap<String, TestRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestRecord {
    #[serde(default)]
    pub properties: Option<Properties>,
    #[serde(default)]
    pub subtests: BTreeMap<String, SubtestRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubtestRecord {
    #[serde(default)]
    pub properties: Option<Properties>,
}

/// Per-platform implementation status identifiers.
pub type ImplementationStatus = BTreeMap<String, BuildPair<String>>;

/// Per-platform expected outcome sequences.
pub type ExpectedOutcomes = BTreeMap<String, BuildPair<Vec<String>>>;

/// Classification data attached to a test or subtest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub is_disabled: Option<bool>,
    #[serde(default)]
    pub implementation_status: Option<ImplementationStatus>,
    #[serde(default)]
    pub expected: Option<ExpectedOutcomes>,
}

/// A value recorded separately for debug and optimized builds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildPair<T> {
    #[serde(rename = "Debug", default)]
    pub debug: Option<T>,
    #[serde(rename = "Optimized", default)]
    pub optimized: Option<T>,
}
