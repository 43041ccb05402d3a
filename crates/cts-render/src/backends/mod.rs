//! Chart backends: output formats for the prepared chart data.
//!
//! Two backends: PNG through the plotters bitmap backend, and SVG.

pub mod bitmap;
pub mod svg;

use std::path::Path;

use cts_core::config::RendererChoice;
use cts_core::errors::RenderError;

use crate::series::{BucketBreakdown, TierMigrationSeries};

/// Trait for chart generation.
pub trait ChartRenderer: Send + Sync {
    fn name(&self) -> &'static str;

    /// File extension of the artifacts this backend writes, without the dot.
    fn extension(&self) -> &'static str;

    fn draw_tier_migration(
        &self,
        series: &TierMigrationSeries,
        path: &Path,
    ) -> Result<(), RenderError>;

    fn draw_breakdown(&self, breakdown: &BucketBreakdown, path: &Path) -> Result<(), RenderError>;
}

/// Create the renderer for a configured backend.
pub fn create_renderer(choice: RendererChoice) -> Box<dyn ChartRenderer> {
    match choice {
        RendererChoice::Bitmap => Box::new(bitmap::BitmapRenderer::default()),
        RendererChoice::Svg => Box::new(svg::SvgRenderer::default()),
    }
}

/// List all available renderer names.
pub fn available_renderers() -> &'static [&'static str] {
    &["bitmap", "svg"]
}

pub(crate) fn draw_failed(chart: &Path, e: impl std::fmt::Display) -> RenderError {
    RenderError::Draw {
        chart: chart.display().to_string(),
        message: e.to_string(),
    }
}
