//! Configuration system for the tracker.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod history_config;
pub mod paths_config;
pub mod reduce_config;
pub mod render_config;
pub mod sync_config;
pub mod tracker_config;

pub use history_config::HistoryConfig;
pub use paths_config::{PathsConfig, RepoLayout};
pub use reduce_config::ReduceConfig;
pub use render_config::{RenderConfig, RendererChoice};
pub use sync_config::SyncConfig;
pub use tracker_config::{CliOverrides, TrackerConfig};
