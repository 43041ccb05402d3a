//! Chart layouts, generic over the plotters drawing backend.

use std::error::Error;

use cts_core::BuildType;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::series::{BucketBreakdown, TierMigrationSeries, CHARTED_TIERS, CHARTED_TIER_COUNT};

pub(crate) type DrawResult = Result<(), Box<dyn Error>>;

pub(crate) const CHART_SIZE: (u32, u32) = (960, 640);

const TIER_COLORS: [RGBColor; CHARTED_TIER_COUNT] = [
    RGBColor(214, 39, 40),
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
];
const COUNT_COLOR: RGBColor = RGBColor(44, 160, 44);
const REMAINDER_COLOR: RGBColor = RGBColor(199, 199, 199);

/// Stacked area chart of test tier membership across runs.
pub(crate) fn draw_tier_migration<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &TierMigrationSeries,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let points = series.points();
    let x_max = points.len().saturating_sub(1).max(1) as i32;
    let y_max = (series.max_stacked_total() as f64 * 1.15).max(1.0);

    let mut chart = ChartBuilder::on(root)
        .caption("Tier Migration", ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(0i32..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Run Dates")
        .y_desc("Total Tests")
        .x_labels(points.len())
        .x_label_formatter(&|x| {
            usize::try_from(*x)
                .ok()
                .and_then(|i| points.get(i))
                .map(|p| p.label.clone())
                .unwrap_or_default()
        })
        .draw()?;

    // Highest band first so lower bands paint over the shared area.
    for (i, tier) in CHARTED_TIERS.iter().enumerate().rev() {
        let color = TIER_COLORS[i];
        let edge = points
            .iter()
            .enumerate()
            .map(move |(x, p)| (x as i32, p.stacked_through(i) as f64));
        chart
            .draw_series(AreaSeries::new(edge, 0.0, color.mix(0.7)).border_style(color))?
            .label(tier.name())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], color.filled()));
    }

    let font = ("sans-serif", 14).into_font().color(&BLACK);
    for (x, point) in points.iter().enumerate() {
        for (i, count) in point.counts.iter().enumerate() {
            if *count != 0 {
                chart.draw_series(std::iter::once(Text::new(
                    count.to_string(),
                    (x as i32, point.stacked_through(i) as f64),
                    font.clone(),
                )))?;
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// One stacked bar per build type: the counter value, then the rest of the
/// tier membership on top of it.
pub(crate) fn draw_breakdown<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    breakdown: &BucketBreakdown,
) -> DrawResult
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let builds = BuildType::ALL;
    let y_max = (breakdown.max_stacked() as f64 * 1.15).max(1.0);

    let mut chart = ChartBuilder::on(root)
        .caption(breakdown.title(), ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d((0i32..builds.len() as i32).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Build Type")
        .y_desc("Count of Tests")
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => usize::try_from(*i)
                .ok()
                .and_then(|i| builds.get(i))
                .map(|b| b.name().to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    let bar = |i: usize, bottom: u64, top: u64, color: RGBColor| {
        let mut rect = Rectangle::new(
            [
                (SegmentValue::Exact(i as i32), bottom as f64),
                (SegmentValue::Exact(i as i32 + 1), top as f64),
            ],
            color.filled(),
        );
        rect.set_margin(0, 0, 40, 40);
        rect
    };

    chart
        .draw_series(
            builds
                .iter()
                .enumerate()
                .map(|(i, build)| bar(i, 0, breakdown.count(*build), COUNT_COLOR)),
        )?
        .label(breakdown.kind.title())
        .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], COUNT_COLOR.filled()));

    chart
        .draw_series(builds.iter().enumerate().map(|(i, build)| {
            let count = breakdown.count(*build);
            bar(i, count, count + breakdown.remainder(*build), REMAINDER_COLOR)
        }))?
        .label("Total")
        .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 16, y + 6)], REMAINDER_COLOR.filled()));

    let font = ("sans-serif", 14).into_font().color(&BLACK);
    for (i, build) in builds.iter().enumerate() {
        let count = breakdown.count(*build);
        let remainder = breakdown.remainder(*build);
        for (value, bottom) in [(count, 0), (remainder, count)] {
            if value != 0 {
                chart.draw_series(std::iter::once(Text::new(
                    value.to_string(),
                    (SegmentValue::CenterOf(i as i32), bottom as f64 + value as f64 / 2.0),
                    font.clone(),
                )))?;
            }
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
