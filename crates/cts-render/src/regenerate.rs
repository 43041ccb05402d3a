//! Redraws every chart artifact from the current history.

use std::path::{Path, PathBuf};
use std::time::Instant;

use cts_core::errors::RenderError;
use cts_core::RunStats;

use crate::backends::ChartRenderer;
use crate::naming::tier_migration_file;
use crate::series::{BucketBreakdown, TierMigrationSeries};

/// Runs needed before a trend line means anything.
pub const MIN_TREND_RUNS: usize = 2;

/// Draw the tier migration chart (with at least [`MIN_TREND_RUNS`] runs) and
/// the intermittent and passing breakdowns of the newest run into
/// `image_dir`. Returns the paths written, in drawing order.
pub fn regenerate_charts(
    renderer: &dyn ChartRenderer,
    history: &[RunStats],
    image_dir: &Path,
) -> Result<Vec<PathBuf>, RenderError> {
    if !image_dir.is_dir() {
        return Err(RenderError::OutputMissing {
            path: image_dir.display().to_string(),
        });
    }

    let start = Instant::now();
    let mut written = Vec::new();
    let ext = renderer.extension();

    if history.len() >= MIN_TREND_RUNS {
        let path = image_dir.join(tier_migration_file(ext));
        renderer.draw_tier_migration(&TierMigrationSeries::from_history(history), &path)?;
        written.push(path);
    } else {
        tracing::debug!(runs = history.len(), "not enough runs for the tier migration chart");
    }

    if let Some(latest) = history.last() {
        let breakdowns = BucketBreakdown::intermittents(latest)
            .into_iter()
            .chain(BucketBreakdown::passing(latest));
        for breakdown in breakdowns {
            let path = image_dir.join(breakdown.file_name(ext));
            renderer.draw_breakdown(&breakdown, &path)?;
            written.push(path);
        }
    }

    tracing::info!(
        renderer = renderer.name(),
        charts = written.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "regenerated charts"
    );
    Ok(written)
}
