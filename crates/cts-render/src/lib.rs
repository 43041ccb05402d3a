//! Charts derived from the run history.
//!
//! Data preparation ([`series`]) and artifact naming ([`naming`]) are
//! backend-independent; [`backends`] turns prepared data into image files.

pub mod backends;
mod draw;
pub mod naming;
pub mod regenerate;
pub mod series;

pub use backends::{available_renderers, create_renderer, ChartRenderer};
pub use regenerate::regenerate_charts;
pub use series::{
    BucketBreakdown, BucketKind, MigrationPoint, TierMigrationSeries, CHARTED_TIERS,
    CHARTED_TIER_COUNT,
};
