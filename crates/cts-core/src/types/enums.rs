//! Closed enumerations for tiers, platforms, build types, and record levels.
//!
//! Dumps refer to platforms by name. Keeping the set closed turns an
//! unexpected name into a parse failure instead of a silently created bucket.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Failure to map a name onto one of the closed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} name: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Classification tier of a record.
///
/// `Tier1` is part of the fixed table shape but no classification rule
/// assigns it for the current dump format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Tier1,
    Tier2,
    Tier3,
}

impl Tier {
    pub const COUNT: usize = 3;
    pub const ALL: [Tier; Tier::COUNT] = [Tier::Tier1, Tier::Tier2, Tier::Tier3];

    /// Position of this tier in counter tables.
    pub const fn index(self) -> usize {
        match self {
            Tier::Tier1 => 0,
            Tier::Tier2 => 1,
            Tier::Tier3 => 2,
        }
    }

    /// Tier number as shown in reports (1, 2 or 3).
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Display name, e.g. `Tier 2`.
    pub const fn name(self) -> &'static str {
        match self {
            Tier::Tier1 => "Tier 1",
            Tier::Tier2 => "Tier 2",
            Tier::Tier3 => "Tier 3",
        }
    }

    /// Name with spaces replaced, for use in file names.
    pub const fn file_stem(self) -> &'static str {
        match self {
            Tier::Tier1 => "Tier_1",
            Tier::Tier2 => "Tier_2",
            Tier::Tier3 => "Tier_3",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.name() == s || tier.file_stem() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "tier",
                value: s.to_string(),
            })
    }
}

/// Target platform tracked independently in every counter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    pub const COUNT: usize = 3;
    pub const ALL: [Platform; Platform::COUNT] =
        [Platform::Windows, Platform::MacOs, Platform::Linux];

    /// Position of this platform in counter tables.
    pub const fn index(self) -> usize {
        match self {
            Platform::Windows => 0,
            Platform::MacOs => 1,
            Platform::Linux => 2,
        }
    }

    /// Name exactly as it appears in dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "MacOs",
            Platform::Linux => "Linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.name() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "platform",
                value: s.to_string(),
            })
    }
}

/// Build flavour a result sequence was recorded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildType {
    Debug,
    Optimized,
}

impl BuildType {
    pub const ALL: [BuildType; 2] = [BuildType::Debug, BuildType::Optimized];

    pub const fn name(self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Optimized => "Optimized",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Nesting level of a record in the dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Test,
    Subtest,
}

impl Level {
    pub const ALL: [Level; 2] = [Level::Test, Level::Subtest];

    /// The single outcome that counts as a clean pass at this level.
    pub const fn clean_pass_label(self) -> &'static str {
        match self {
            Level::Test => "OK",
            Level::Subtest => "PASS",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Level::Test => "test",
            Level::Subtest => "subtest",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_names_round_trip() {
        for tier in Tier::ALL {
            assert_eq!(tier.name().parse::<Tier>().unwrap(), tier);
            assert_eq!(tier.file_stem().parse::<Tier>().unwrap(), tier);
        }
        assert_eq!(Tier::Tier3.number(), 3);
    }

    #[test]
    fn platform_names_are_case_sensitive() {
        assert_eq!("MacOs".parse::<Platform>().unwrap(), Platform::MacOs);
        let err = "macos".parse::<Platform>().unwrap_err();
        assert_eq!(err.kind, "platform");
        assert_eq!(err.value, "macos");
    }

    #[test]
    fn indices_cover_the_table() {
        let tiers: Vec<usize> = Tier::ALL.iter().map(|t| t.index()).collect();
        let platforms: Vec<usize> = Platform::ALL.iter().map(|p| p.index()).collect();
        assert_eq!(tiers, vec![0, 1, 2]);
        assert_eq!(platforms, vec![0, 1, 2]);
    }

    #[test]
    fn clean_pass_labels_differ_by_level() {
        assert_eq!(Level::Test.clean_pass_label(), "OK");
        assert_eq!(Level::Subtest.clean_pass_label(), "PASS");
    }
}
