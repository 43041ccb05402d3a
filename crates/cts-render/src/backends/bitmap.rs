//! PNG charts through the plotters bitmap backend.

use std::path::Path;

use cts_core::errors::RenderError;
use plotters::prelude::*;

use super::{draw_failed, ChartRenderer};
use crate::draw::{self, CHART_SIZE};
use crate::series::{BucketBreakdown, TierMigrationSeries};

#[derive(Debug, Clone, Copy)]
pub struct BitmapRenderer {
    size: (u32, u32),
}

impl BitmapRenderer {
    pub fn new(size: (u32, u32)) -> Self {
        Self { size }
    }
}

impl Default for BitmapRenderer {
    fn default() -> Self {
        Self::new(CHART_SIZE)
    }
}

impl ChartRenderer for BitmapRenderer {
    fn name(&self) -> &'static str {
        "bitmap"
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn draw_tier_migration(
        &self,
        series: &TierMigrationSeries,
        path: &Path,
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        draw::draw_tier_migration(&root, series).map_err(|e| draw_failed(path, e))
    }

    fn draw_breakdown(&self, breakdown: &BucketBreakdown, path: &Path) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        draw::draw_breakdown(&root, breakdown).map_err(|e| draw_failed(path, e))
    }
}
