//! Single-pass reduction of a dump tree into a [`RunStats`] and a
//! [`LabelVocabulary`].
//!
//! Tests and subtests go through the same per-record algorithm; only the
//! level they are tallied under and the clean-pass label differ.

pub mod classify;
pub mod options;
pub mod record;

use std::time::Instant;

use chrono::{DateTime, Utc};
use cts_core::errors::ReduceError;
use cts_core::{BuildType, LabelVocabulary, Level, Platform, RunStats, Tier};

use crate::dump::{Dump, ExpectedOutcomes, ImplementationStatus, Properties};

pub use classify::Classification;
pub use options::ReduceOptions;
pub use record::RecordPath;

/// A completed reduction: the run's counters plus the identifiers seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub stats: RunStats,
    pub labels: LabelVocabulary,
}

/// Reduce `dump` into fresh accumulators stamped with `run_timestamp`.
///
/// On a fault the partially filled accumulators are dropped.
pub fn reduce_dump(
    dump: &Dump,
    run_timestamp: DateTime<Utc>,
    options: &ReduceOptions,
) -> Result<Reduction, ReduceError> {
    let start = Instant::now();
    let mut stats = RunStats::new(run_timestamp);
    let mut labels = LabelVocabulary::new();
    reduce(dump, &mut stats, &mut labels, options)?;

    tracing::info!(
        chunks = stats.chunk_count(),
        tests = stats.test_count(),
        subtests = stats.subtest_count(),
        disabled_tests = stats.disabled_test_count(),
        disabled_subtests = stats.disabled_subtest_count(),
        duration_ms = start.elapsed().as_millis() as u64,
        "reduced dump"
    );
    Ok(Reduction { stats, labels })
}

/// Walk every category, test, and subtest of `dump`, accumulating into
/// `stats` and `labels`.
///
/// Stops at the first malformed record. The accumulators are left in a
/// partial state in that case and must not be kept.
pub fn reduce(
    dump: &Dump,
    stats: &mut RunStats,
    labels: &mut LabelVocabulary,
    options: &ReduceOptions,
) -> Result<(), ReduceError> {
    if options.optimized_pass_from_debug {
        tracing::warn!(
            "optimized passing counts are taken from the Debug expectation sequence"
        );
    }

    let mut tally = Tally {
        stats,
        labels,
        options,
    };

    for (category_path, category) in &dump.categories {
        tally.stats.record_chunk();
        tracing::trace!(category = %category_path, tests = category.tests.len(), "reducing category");

        for (test_name, test) in &category.tests {
            let test_path = RecordPath::test(category_path, test_name);
            tally.record(Level::Test, &test_path, test.properties.as_ref())?;

            for (subtest_name, subtest) in &test.subtests {
                let subtest_path = test_path.subtest(subtest_name);
                tally.record(Level::Subtest, &subtest_path, subtest.properties.as_ref())?;
            }
        }
    }
    Ok(())
}

struct Tally<'a> {
    stats: &'a mut RunStats,
    labels: &'a mut LabelVocabulary,
    options: &'a ReduceOptions,
}

impl Tally<'_> {
    fn record(
        &mut self,
        level: Level,
        path: &RecordPath<'_>,
        properties: Option<&Properties>,
    ) -> Result<(), ReduceError> {
        self.stats.level_mut(level).record_seen();

        let Some(properties) = properties else {
            return Ok(());
        };

        let disabled = properties
            .is_disabled
            .ok_or_else(|| path.missing("is_disabled"))?;
        if disabled {
            self.stats.level_mut(level).record_disabled();
            return Ok(());
        }

        let classification = Classification::of(properties);
        let tier = classification.tier();
        match classification {
            Classification::Tracked(status) => {
                self.tally_implementation_status(level, path, tier, status)?;
            }
            Classification::Untracked => {
                self.stats.level_mut(level).record_tier_all_platforms(tier);
            }
        }

        if let Some(expected) = &properties.expected {
            self.tally_expected(level, path, tier, expected)?;
        }
        Ok(())
    }

    fn tally_implementation_status(
        &mut self,
        level: Level,
        path: &RecordPath<'_>,
        tier: Tier,
        status: &ImplementationStatus,
    ) -> Result<(), ReduceError> {
        for (name, builds) in status {
            let debug = builds.debug.as_deref().ok_or_else(|| path.missing("Debug"))?;
            let optimized = builds
                .optimized
                .as_deref()
                .ok_or_else(|| path.missing("Optimized"))?;
            self.labels.record_implementation_status(level, debug);
            self.labels.record_implementation_status(level, optimized);

            let platform = path.platform(name)?;
            self.stats.level_mut(level).record_tier(tier, platform);
        }
        Ok(())
    }

    fn tally_expected(
        &mut self,
        level: Level,
        path: &RecordPath<'_>,
        tier: Tier,
        expected: &ExpectedOutcomes,
    ) -> Result<(), ReduceError> {
        for (name, builds) in expected {
            let platform = path.platform(name)?;
            let debug = builds.debug.as_deref().ok_or_else(|| path.missing("Debug"))?;
            let optimized = builds
                .optimized
                .as_deref()
                .ok_or_else(|| path.missing("Optimized"))?;

            let optimized_pass_source = if self.options.optimized_pass_from_debug {
                debug
            } else {
                optimized
            };
            self.tally_outcomes(level, BuildType::Debug, tier, platform, debug, debug);
            self.tally_outcomes(
                level,
                BuildType::Optimized,
                tier,
                platform,
                optimized,
                optimized_pass_source,
            );

            for label in debug.iter().chain(optimized) {
                self.labels.record_expected(level, label);
            }
        }
        Ok(())
    }

    fn tally_outcomes(
        &mut self,
        level: Level,
        build: BuildType,
        tier: Tier,
        platform: Platform,
        outcomes: &[String],
        pass_source: &[String],
    ) {
        let stats = self.stats.level_mut(level);
        if is_clean_pass(pass_source, level) {
            stats.record_passing(build, tier, platform);
        }
        if outcomes.len() > 1 {
            stats.record_intermittent(build, tier, platform);
        }
    }
}

/// A single expected outcome equal to the level's clean-pass label.
fn is_clean_pass(outcomes: &[String], level: Level) -> bool {
    matches!(outcomes, [only] if only == level.clean_pass_label())
}
