//! Label vocabulary observed during a reduction pass.
//!
//! Diagnostic only: shows which implementation-status and outcome labels a
//! dump actually uses. Never persisted.

use std::collections::BTreeSet;

use super::enums::Level;

/// Labels seen at one record level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelLabels {
    pub implementation_status: BTreeSet<String>,
    pub expected: BTreeSet<String>,
}

/// Label sets for tests and subtests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelVocabulary {
    tests: LevelLabels,
    subtests: LevelLabels,
}

impl LabelVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, level: Level) -> &LevelLabels {
        match level {
            Level::Test => &self.tests,
            Level::Subtest => &self.subtests,
        }
    }

    fn level_mut(&mut self, level: Level) -> &mut LevelLabels {
        match level {
            Level::Test => &mut self.tests,
            Level::Subtest => &mut self.subtests,
        }
    }

    pub fn record_implementation_status(&mut self, level: Level, label: &str) {
        self.level_mut(level).implementation_status.insert(label.to_owned());
    }

    pub fn record_expected(&mut self, level: Level, label: &str) {
        self.level_mut(level).expected.insert(label.to_owned());
    }
}
