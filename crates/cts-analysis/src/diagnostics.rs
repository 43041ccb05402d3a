//! Human-readable dump of a reduction, printed on request.

use std::collections::BTreeSet;
use std::fmt;

use cts_core::{BuildType, LabelVocabulary, Level, LevelStats, Platform, RunStats, Tier, TierTable};

/// Totals, label sets, and per-tier counter rows of one run.
pub struct DiagnosticsReport<'a> {
    stats: &'a RunStats,
    labels: &'a LabelVocabulary,
}

impl<'a> DiagnosticsReport<'a> {
    pub fn new(stats: &'a RunStats, labels: &'a LabelVocabulary) -> Self {
        Self { stats, labels }
    }

    /// One-line summary for the log.
    pub fn summary(&self) -> String {
        format!(
            "{} chunks, {} tests ({} disabled), {} subtests ({} disabled)",
            self.stats.chunk_count(),
            self.stats.test_count(),
            self.stats.disabled_test_count(),
            self.stats.subtest_count(),
            self.stats.disabled_subtest_count(),
        )
    }
}

impl fmt::Display for DiagnosticsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run {}", self.stats.run_timestamp().to_rfc3339())?;
        writeln!(f, "Chunks: {}", self.stats.chunk_count())?;
        writeln!(
            f,
            "Tests: {} ({} disabled)",
            self.stats.test_count(),
            self.stats.disabled_test_count()
        )?;
        writeln!(
            f,
            "Subtests: {} ({} disabled)",
            self.stats.subtest_count(),
            self.stats.disabled_subtest_count()
        )?;

        for level in Level::ALL {
            let labels = self.labels.level(level);
            write_label_set(f, level, "implementation status", &labels.implementation_status)?;
            write_label_set(f, level, "expected", &labels.expected)?;
        }

        for level in Level::ALL {
            write_level(f, level, self.stats.level(level))?;
        }
        Ok(())
    }
}

fn write_label_set(
    f: &mut fmt::Formatter<'_>,
    level: Level,
    kind: &str,
    set: &BTreeSet<String>,
) -> fmt::Result {
    let joined = set.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    writeln!(f, "{} {kind} labels: [{joined}]", level.name())
}

fn write_level(f: &mut fmt::Formatter<'_>, level: Level, stats: &LevelStats) -> fmt::Result {
    for tier in Tier::ALL {
        writeln!(f, "{} {}", level.name(), tier)?;
        write_row(f, "membership", stats.tier_count(), tier)?;
        for build in BuildType::ALL {
            let label = format!("{} intermittent", build.name());
            write_row(f, &label, stats.intermittent_count(build), tier)?;
        }
        for build in BuildType::ALL {
            let label = format!("{} passing", build.name());
            write_row(f, &label, stats.passing_count(build), tier)?;
        }
    }
    Ok(())
}

fn write_row(f: &mut fmt::Formatter<'_>, label: &str, table: &TierTable, tier: Tier) -> fmt::Result {
    write!(f, "  {label:<22}")?;
    for platform in Platform::ALL {
        write!(f, " {}={}", platform, table.get(tier, platform))?;
    }
    writeln!(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn report_lists_totals_labels_and_rows() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut stats = RunStats::new(ts);
        stats.record_chunk();
        stats.level_mut(Level::Test).record_seen();
        stats.level_mut(Level::Test).record_tier(Tier::Tier3, Platform::Linux);
        let mut labels = LabelVocabulary::new();
        labels.record_expected(Level::Test, "TIMEOUT");
        labels.record_expected(Level::Test, "OK");

        let report = DiagnosticsReport::new(&stats, &labels);
        let text = report.to_string();
        assert!(text.contains("Chunks: 1"));
        assert!(text.contains("Tests: 1 (0 disabled)"));
        assert!(text.contains("test expected labels: [OK, TIMEOUT]"));
        assert!(text.contains("Linux=1"));
        assert_eq!(report.summary(), "1 chunks, 1 tests (0 disabled), 0 subtests (0 disabled)");
    }
}
