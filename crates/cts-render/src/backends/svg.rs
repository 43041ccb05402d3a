//! SVG charts through the plotters SVG backend.

use std::path::Path;

use cts_core::errors::RenderError;
use plotters::prelude::*;

use super::{draw_failed, ChartRenderer};
use crate::draw::{self, CHART_SIZE};
use crate::series::{BucketBreakdown, TierMigrationSeries};

#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    size: (u32, u32),
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { size: CHART_SIZE }
    }
}

impl ChartRenderer for SvgRenderer {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn extension(&self) -> &'static str {
        "svg"
    }

    fn draw_tier_migration(
        &self,
        series: &TierMigrationSeries,
        path: &Path,
    ) -> Result<(), RenderError> {
        let root = SVGBackend::new(path, self.size).into_drawing_area();
        draw::draw_tier_migration(&root, series).map_err(|e| draw_failed(path, e))
    }

    fn draw_breakdown(&self, breakdown: &BucketBreakdown, path: &Path) -> Result<(), RenderError> {
        let root = SVGBackend::new(path, self.size).into_drawing_area();
        draw::draw_breakdown(&root, breakdown).map_err(|e| draw_failed(path, e))
    }
}
