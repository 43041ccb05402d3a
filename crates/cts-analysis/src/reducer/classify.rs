//! Tier classification of a non-disabled record.

use cts_core::Tier;

use crate::dump::{ImplementationStatus, Properties};

/// Which tier a record belongs to, decided by whether it carries an
/// implementation status. No record is ever classified as Tier 1.
#[derive(Debug, Clone, Copy)]
pub enum Classification<'a> {
    /// Tier 3 on each platform named in the status map.
    Tracked(&'a ImplementationStatus),
    /// Tier 2 on every platform.
    Untracked,
}

impl<'a> Classification<'a> {
    pub fn of(properties: &'a Properties) -> Self {
        match &properties.implementation_status {
            Some(status) => Self::Tracked(status),
            None => Self::Untracked,
        }
    }

    pub fn tier(&self) -> Tier {
        match self {
            Self::Tracked(_) => Tier::Tier3,
            Self::Untracked => Tier::Tier2,
        }
    }
}
