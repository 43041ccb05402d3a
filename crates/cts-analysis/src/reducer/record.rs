//! Location of a record inside the dump, used in fault messages.

use std::fmt;

use cts_core::errors::ReduceError;
use cts_core::Platform;

/// `category::test` or `category::test::subtest`.
#[derive(Debug, Clone, Copy)]
pub struct RecordPath<'a> {
    category: &'a str,
    test: &'a str,
    subtest: Option<&'a str>,
}

impl<'a> RecordPath<'a> {
    pub fn test(category: &'a str, test: &'a str) -> Self {
        Self {
            category,
            test,
            subtest: None,
        }
    }

    pub fn subtest(&self, subtest: &'a str) -> Self {
        Self {
            subtest: Some(subtest),
            ..*self
        }
    }

    pub fn missing(&self, field: &'static str) -> ReduceError {
        ReduceError::MissingField {
            record: self.to_string(),
            field,
        }
    }

    /// Resolve a platform key, faulting on names outside the closed set.
    pub fn platform(&self, name: &str) -> Result<Platform, ReduceError> {
        name.parse::<Platform>()
            .map_err(|_| ReduceError::UnknownPlatform {
                record: self.to_string(),
                name: name.to_string(),
            })
    }
}

impl fmt::Display for RecordPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.category, self.test)?;
        if let Some(subtest) = self.subtest {
            write!(f, "::{subtest}")?;
        }
        Ok(())
    }
}
