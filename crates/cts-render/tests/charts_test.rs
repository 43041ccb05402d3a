//! Chart data preparation, naming, and regeneration scheduling.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use cts_core::config::RendererChoice;
use cts_core::errors::{CtsErrorCode, RenderError};
use cts_core::{BuildType, Level, Platform, RunStats, Tier};
use cts_render::{
    available_renderers, create_renderer, regenerate_charts, BucketBreakdown, BucketKind,
    ChartRenderer, TierMigrationSeries, CHARTED_TIERS,
};

fn run(hour: u32, tier2: u64, tier3: u64) -> RunStats {
    let mut stats = RunStats::new(Utc.with_ymd_and_hms(2024, 2, 9, hour, 30, 0).unwrap());
    let tests = stats.level_mut(Level::Test);
    for _ in 0..tier2 {
        tests.record_tier_all_platforms(Tier::Tier2);
    }
    for _ in 0..tier3 {
        tests.record_tier(Tier::Tier3, Platform::Windows);
        tests.record_tier(Tier::Tier3, Platform::Linux);
    }
    stats
}

/// Records what would have been drawn.
#[derive(Default)]
struct RecordingRenderer {
    drawn: Mutex<Vec<PathBuf>>,
}

impl RecordingRenderer {
    fn drawn(&self) -> Vec<String> {
        self.drawn
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn extension(&self) -> &'static str {
        "rec"
    }

    fn draw_tier_migration(
        &self,
        series: &TierMigrationSeries,
        path: &Path,
    ) -> Result<(), RenderError> {
        assert!(series.len() >= 2);
        self.drawn.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    fn draw_breakdown(&self, _: &BucketBreakdown, path: &Path) -> Result<(), RenderError> {
        self.drawn.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

#[test]
fn migration_series_uses_first_platform_per_charted_tier() {
    let series = TierMigrationSeries::from_history(&[run(1, 4, 2), run(2, 3, 5)]);
    let points = series.points();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].counts, [0, 4, 2]);
    assert_eq!(points[1].counts, [0, 3, 5]);
    assert_eq!(points[0].label, "Feb 09 01:30");
    assert_eq!(points[1].stacked_through(0), 0);
    assert_eq!(points[1].stacked_through(1), 3);
    assert_eq!(points[1].stacked_through(2), 8);
    assert_eq!(series.max_stacked_total(), 8);
}

#[test]
fn empty_history_gives_empty_series() {
    let series = TierMigrationSeries::from_history(&[]);
    assert!(series.is_empty());
    assert_eq!(series.max_stacked_total(), 0);
}

#[test]
fn breakdowns_cover_charted_tiers_and_platforms() {
    let mut stats = run(0, 2, 3);
    let tests = stats.level_mut(Level::Test);
    tests.record_intermittent(BuildType::Debug, Tier::Tier3, Platform::Linux);
    tests.record_passing(BuildType::Optimized, Tier::Tier2, Platform::MacOs);
    tests.record_passing(BuildType::Optimized, Tier::Tier2, Platform::MacOs);

    let intermittents = BucketBreakdown::intermittents(&stats);
    assert_eq!(intermittents.len(), CHARTED_TIERS.len() * Platform::COUNT);
    let tier1: Vec<_> = intermittents.iter().filter(|b| b.tier == Tier::Tier1).collect();
    assert_eq!(tier1.len(), Platform::COUNT);
    assert!(tier1.iter().all(|b| (b.total, b.debug, b.optimized) == (0, 0, 0)));

    let linux = intermittents
        .iter()
        .find(|b| b.tier == Tier::Tier3 && b.platform == Platform::Linux)
        .unwrap();
    assert_eq!((linux.total, linux.debug, linux.optimized), (3, 1, 0));
    assert_eq!(linux.remainder(BuildType::Debug), 2);
    assert_eq!(linux.title(), "Tier 3: Linux Intermittents");

    let passing = BucketBreakdown::passing(&stats);
    let macos = passing
        .iter()
        .find(|b| b.tier == Tier::Tier2 && b.platform == Platform::MacOs)
        .unwrap();
    assert_eq!(macos.kind, BucketKind::Passing);
    assert_eq!(macos.optimized, 2);
    assert_eq!(macos.max_stacked(), 2);
    assert_eq!(macos.file_name("svg"), "Tier_2_MacOs_passing.svg");
}

#[test]
fn remainder_saturates_when_counter_exceeds_membership() {
    let mut stats = RunStats::new(Utc::now());
    stats
        .level_mut(Level::Test)
        .record_passing(BuildType::Debug, Tier::Tier2, Platform::Windows);
    let windows = BucketBreakdown::passing(&stats)
        .into_iter()
        .find(|b| b.tier == Tier::Tier2 && b.platform == Platform::Windows)
        .unwrap();
    assert_eq!(windows.remainder(BuildType::Debug), 0);
    assert_eq!(windows.max_stacked(), 1);
}

#[test]
fn single_run_draws_only_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = RecordingRenderer::default();
    let written = regenerate_charts(&renderer, &[run(1, 1, 1)], dir.path()).unwrap();

    let names = renderer.drawn();
    assert_eq!(written.len(), 18);
    assert!(!names.contains(&"Tier_Migration.rec".to_string()));
    assert!(names.contains(&"Tier_1_MacOs_intermittents.rec".to_string()));
    assert!(names.contains(&"Tier_1_Windows_passing.rec".to_string()));
    assert!(names.contains(&"Tier_2_Windows_intermittents.rec".to_string()));
    assert!(names.contains(&"Tier_3_Linux_passing.rec".to_string()));
}

#[test]
fn two_runs_add_the_trend_chart_first() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = RecordingRenderer::default();
    let written = regenerate_charts(&renderer, &[run(1, 1, 1), run(2, 0, 2)], dir.path()).unwrap();

    assert_eq!(written.len(), 19);
    assert_eq!(written[0], dir.path().join("Tier_Migration.rec"));
    let tier1_files = renderer
        .drawn()
        .iter()
        .filter(|name| name.starts_with("Tier_1_"))
        .count();
    assert_eq!(tier1_files, 2 * Platform::COUNT);
}

#[test]
fn empty_history_draws_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = RecordingRenderer::default();
    assert!(regenerate_charts(&renderer, &[], dir.path()).unwrap().is_empty());
}

#[test]
fn missing_image_dir_is_a_render_error() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = RecordingRenderer::default();
    let err = regenerate_charts(&renderer, &[run(1, 1, 1)], &dir.path().join("images")).unwrap_err();
    assert!(matches!(err, RenderError::OutputMissing { .. }));
    assert_eq!(err.error_code(), "RENDER_ERROR");
    assert!(renderer.drawn().is_empty());
}

#[test]
fn factory_maps_choice_to_backend() {
    let bitmap = create_renderer(RendererChoice::Bitmap);
    assert_eq!((bitmap.name(), bitmap.extension()), ("bitmap", "png"));
    let svg = create_renderer(RendererChoice::Svg);
    assert_eq!((svg.name(), svg.extension()), ("svg", "svg"));
    assert_eq!(available_renderers(), &["bitmap", "svg"]);
}
