//! Tier × platform counter table.

use serde::{Deserialize, Serialize};

use super::enums::{ParseEnumError, Platform, Tier};

/// Non-negative counters for every (tier, platform) pair.
///
/// Every cell exists from construction and starts at zero. Cells only ever
/// move by increment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTable {
    cells: [[u64; Platform::COUNT]; Tier::COUNT],
}

impl TierTable {
    /// A table with every cell at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tier: Tier, platform: Platform) -> u64 {
        self.cells[tier.index()][platform.index()]
    }

    /// Look a cell up by its display names (`"Tier 3"`, `"Windows"`).
    pub fn get_by_name(&self, tier: &str, platform: &str) -> Result<u64, ParseEnumError> {
        Ok(self.get(tier.parse()?, platform.parse()?))
    }

    pub fn increment(&mut self, tier: Tier, platform: Platform) {
        self.cells[tier.index()][platform.index()] += 1;
    }

    /// Credit one record to `tier` on every platform.
    pub fn increment_all_platforms(&mut self, tier: Tier) {
        for platform in Platform::ALL {
            self.increment(tier, platform);
        }
    }

    pub fn tier_total(&self, tier: Tier) -> u64 {
        self.cells[tier.index()].iter().sum()
    }

    pub fn platform_total(&self, platform: Platform) -> u64 {
        self.cells.iter().map(|row| row[platform.index()]).sum()
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }

    /// Every cell in tier-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, Platform, u64)> + '_ {
        Tier::ALL.into_iter().flat_map(move |tier| {
            Platform::ALL
                .into_iter()
                .map(move |platform| (tier, platform, self.get(tier, platform)))
        })
    }
}
