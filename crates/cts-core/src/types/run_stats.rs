//! Reduced statistics for one processed run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{BuildType, Level, Platform, Tier};
use super::table::TierTable;

/// Counters for one record level (tests or subtests).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStats {
    count: u64,
    disabled_count: u64,
    tier_count: TierTable,
    dbg_intermittent_count: TierTable,
    opt_intermittent_count: TierTable,
    dbg_passing_count: TierTable,
    opt_passing_count: TierTable,
}

impl LevelStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records seen at this level, disabled ones included.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn disabled_count(&self) -> u64 {
        self.disabled_count
    }

    /// Tier membership per platform.
    pub fn tier_count(&self) -> &TierTable {
        &self.tier_count
    }

    pub fn intermittent_count(&self, build: BuildType) -> &TierTable {
        match build {
            BuildType::Debug => &self.dbg_intermittent_count,
            BuildType::Optimized => &self.opt_intermittent_count,
        }
    }

    pub fn passing_count(&self, build: BuildType) -> &TierTable {
        match build {
            BuildType::Debug => &self.dbg_passing_count,
            BuildType::Optimized => &self.opt_passing_count,
        }
    }

    pub fn record_seen(&mut self) {
        self.count += 1;
    }

    pub fn record_disabled(&mut self) {
        self.disabled_count += 1;
    }

    pub fn record_tier(&mut self, tier: Tier, platform: Platform) {
        self.tier_count.increment(tier, platform);
    }

    pub fn record_tier_all_platforms(&mut self, tier: Tier) {
        self.tier_count.increment_all_platforms(tier);
    }

    pub fn record_intermittent(&mut self, build: BuildType, tier: Tier, platform: Platform) {
        match build {
            BuildType::Debug => self.dbg_intermittent_count.increment(tier, platform),
            BuildType::Optimized => self.opt_intermittent_count.increment(tier, platform),
        }
    }

    pub fn record_passing(&mut self, build: BuildType, tier: Tier, platform: Platform) {
        match build {
            BuildType::Debug => self.dbg_passing_count.increment(tier, platform),
            BuildType::Optimized => self.opt_passing_count.increment(tier, platform),
        }
    }

    /// True when no counter at this level has moved.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Aggregate statistics of one dump, keyed by the dump's modification time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    run_timestamp: DateTime<Utc>,
    chunk_count: u64,
    tests: LevelStats,
    subtests: LevelStats,
}

impl RunStats {
    /// A fully zeroed model for the dump modified at `run_timestamp`.
    pub fn new(run_timestamp: DateTime<Utc>) -> Self {
        Self {
            run_timestamp,
            chunk_count: 0,
            tests: LevelStats::new(),
            subtests: LevelStats::new(),
        }
    }

    pub fn run_timestamp(&self) -> DateTime<Utc> {
        self.run_timestamp
    }

    pub fn chunk_count(&self) -> u64 {
        self.chunk_count
    }

    pub fn record_chunk(&mut self) {
        self.chunk_count += 1;
    }

    pub fn level(&self, level: Level) -> &LevelStats {
        match level {
            Level::Test => &self.tests,
            Level::Subtest => &self.subtests,
        }
    }

    pub fn level_mut(&mut self, level: Level) -> &mut LevelStats {
        match level {
            Level::Test => &mut self.tests,
            Level::Subtest => &mut self.subtests,
        }
    }

    pub fn tests(&self) -> &LevelStats {
        &self.tests
    }

    pub fn subtests(&self) -> &LevelStats {
        &self.subtests
    }

    pub fn test_count(&self) -> u64 {
        self.tests.count()
    }

    pub fn subtest_count(&self) -> u64 {
        self.subtests.count()
    }

    pub fn disabled_test_count(&self) -> u64 {
        self.tests.disabled_count()
    }

    pub fn disabled_subtest_count(&self) -> u64 {
        self.subtests.disabled_count()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn new_run_is_fully_zeroed() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let run = RunStats::new(ts);
        assert_eq!(run.run_timestamp(), ts);
        assert_eq!(run.chunk_count(), 0);
        for level in Level::ALL {
            let stats = run.level(level);
            assert!(stats.is_empty());
            assert!(stats.tier_count().is_zero());
            for build in BuildType::ALL {
                assert!(stats.intermittent_count(build).is_zero());
                assert!(stats.passing_count(build).is_zero());
            }
        }
    }

    #[test]
    fn build_types_land_in_separate_tables() {
        let mut stats = LevelStats::new();
        stats.record_passing(BuildType::Optimized, Tier::Tier3, Platform::MacOs);
        stats.record_intermittent(BuildType::Debug, Tier::Tier2, Platform::Linux);

        assert_eq!(stats.passing_count(BuildType::Optimized).get(Tier::Tier3, Platform::MacOs), 1);
        assert!(stats.passing_count(BuildType::Debug).is_zero());
        assert_eq!(stats.intermittent_count(BuildType::Debug).get(Tier::Tier2, Platform::Linux), 1);
        assert!(stats.intermittent_count(BuildType::Optimized).is_zero());
    }

    #[test]
    fn serde_round_trip_preserves_value() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 15).unwrap();
        let mut run = RunStats::new(ts);
        run.record_chunk();
        run.level_mut(Level::Test).record_seen();
        run.level_mut(Level::Test).record_tier_all_platforms(Tier::Tier2);

        let json = serde_json::to_string(&run).unwrap();
        let back: RunStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, run);
    }
}
