//! Backend-independent chart data.

use chrono::{DateTime, Utc};
use cts_core::{BuildType, Platform, RunStats, Tier};

pub const CHARTED_TIER_COUNT: usize = Tier::COUNT;

/// Tiers that appear in charts. Tier 1 is charted even though the reducer
/// never assigns it, so its band and breakdowns stay at zero.
pub const CHARTED_TIERS: [Tier; CHARTED_TIER_COUNT] = Tier::ALL;

/// Platform whose membership stands in for all platforms in the trend chart.
const TREND_PLATFORM: Platform = Platform::ALL[0];

const DATE_LABEL_FORMAT: &str = "%b %d %H:%M";

/// One run on the tier migration chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationPoint {
    pub run_timestamp: DateTime<Utc>,
    pub label: String,
    /// Test membership per charted tier, in [`CHARTED_TIERS`] order.
    pub counts: [u64; CHARTED_TIER_COUNT],
}

impl MigrationPoint {
    /// Sum of the counts of the first `through + 1` charted tiers, i.e. the
    /// top edge of that tier's band in a stacked chart.
    pub fn stacked_through(&self, through: usize) -> u64 {
        self.counts.iter().take(through + 1).sum()
    }

    pub fn stacked_total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Test tier membership over the recorded runs, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierMigrationSeries {
    points: Vec<MigrationPoint>,
}

impl TierMigrationSeries {
    pub fn from_history(history: &[RunStats]) -> Self {
        let points = history
            .iter()
            .map(|run| {
                let tiers = run.tests().tier_count();
                MigrationPoint {
                    run_timestamp: run.run_timestamp(),
                    label: run.run_timestamp().format(DATE_LABEL_FORMAT).to_string(),
                    counts: CHARTED_TIERS.map(|tier| tiers.get(tier, TREND_PLATFORM)),
                }
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[MigrationPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest stacked total across runs.
    pub fn max_stacked_total(&self) -> u64 {
        self.points
            .iter()
            .map(MigrationPoint::stacked_total)
            .max()
            .unwrap_or(0)
    }
}

/// Which per-build counter a breakdown chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketKind {
    Intermittents,
    Passing,
}

impl BucketKind {
    pub fn title(self) -> &'static str {
        match self {
            BucketKind::Intermittents => "Intermittents",
            BucketKind::Passing => "Passing",
        }
    }

    /// Suffix used in artifact file names.
    pub fn file_suffix(self) -> &'static str {
        match self {
            BucketKind::Intermittents => "intermittents",
            BucketKind::Passing => "passing",
        }
    }
}

/// Counter values of one (tier, platform) cell of the latest run, per build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketBreakdown {
    pub kind: BucketKind,
    pub tier: Tier,
    pub platform: Platform,
    /// Test membership of the cell.
    pub total: u64,
    pub debug: u64,
    pub optimized: u64,
}

impl BucketBreakdown {
    pub fn intermittents(run: &RunStats) -> Vec<Self> {
        Self::collect(run, BucketKind::Intermittents)
    }

    pub fn passing(run: &RunStats) -> Vec<Self> {
        Self::collect(run, BucketKind::Passing)
    }

    fn collect(run: &RunStats, kind: BucketKind) -> Vec<Self> {
        let tests = run.tests();
        let counter = |build: BuildType| match kind {
            BucketKind::Intermittents => tests.intermittent_count(build),
            BucketKind::Passing => tests.passing_count(build),
        };

        let mut out = Vec::with_capacity(CHARTED_TIERS.len() * Platform::COUNT);
        for tier in CHARTED_TIERS {
            for platform in Platform::ALL {
                out.push(Self {
                    kind,
                    tier,
                    platform,
                    total: tests.tier_count().get(tier, platform),
                    debug: counter(BuildType::Debug).get(tier, platform),
                    optimized: counter(BuildType::Optimized).get(tier, platform),
                });
            }
        }
        out
    }

    pub fn title(&self) -> String {
        format!("{}: {} {}", self.tier, self.platform, self.kind.title())
    }

    pub fn count(&self, build: BuildType) -> u64 {
        match build {
            BuildType::Debug => self.debug,
            BuildType::Optimized => self.optimized,
        }
    }

    /// Membership not covered by the counter for `build`.
    pub fn remainder(&self, build: BuildType) -> u64 {
        self.total.saturating_sub(self.count(build))
    }

    /// Height of the tallest stacked bar.
    pub fn max_stacked(&self) -> u64 {
        BuildType::ALL
            .into_iter()
            .map(|build| self.count(build) + self.remainder(build))
            .max()
            .unwrap_or(0)
    }
}
