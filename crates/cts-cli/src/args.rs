use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cts_core::config::{CliOverrides, RendererChoice};
use cts_core::errors::InputError;

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum RendererArg {
    Bitmap,
    Svg,
}

impl RendererArg {
    pub fn as_choice(self) -> RendererChoice {
        match self {
            RendererArg::Bitmap => RendererChoice::Bitmap,
            RendererArg::Svg => RendererChoice::Svg,
        }
    }
}

/// Reduce the latest CTS dump into the run history and refresh the charts.
#[derive(Debug, Clone, Parser)]
#[command(name = "cts-tracker", version, about)]
pub struct TrackerArgs {
    /// Root of the results repository (contains data/ and images/)
    #[arg(short = 'R', long = "repo", value_name = "PATH", env = "CTS_SOURCE_PATH")]
    pub repo: Option<PathBuf>,

    /// Number of runs to keep in the history
    #[arg(short = 'm', long = "max-history", value_name = "N")]
    pub max_history: Option<usize>,

    /// Chart backend; charts are left untouched when neither is configured
    #[arg(long, value_enum)]
    pub renderer: Option<RendererArg>,

    /// Skip `git pull` before and commit/push after the run
    #[arg(long)]
    pub no_sync: bool,

    /// Record the dump even if it was already recorded
    #[arg(long)]
    pub force: bool,

    /// Print the full counter report of the reduced run
    #[arg(long)]
    pub diagnostics: bool,

    /// Take optimized passing counts from the Debug expectation sequence
    #[arg(long)]
    pub optimized_pass_from_debug: bool,
}

impl TrackerArgs {
    pub fn repo(&self) -> Result<&PathBuf, InputError> {
        self.repo.as_ref().ok_or(InputError::SourceNotSpecified)
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            max_history_length: self.max_history,
            renderer: self.renderer.map(RendererArg::as_choice),
            sync_enabled: self.no_sync.then_some(false),
            optimized_pass_from_debug: self.optimized_pass_from_debug.then_some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_overrides() {
        let args = TrackerArgs::try_parse_from([
            "cts-tracker",
            "-R",
            "/srv/cts",
            "-m",
            "8",
            "--renderer",
            "svg",
            "--no-sync",
        ])
        .unwrap();
        assert_eq!(args.repo().unwrap(), &PathBuf::from("/srv/cts"));

        let overrides = args.overrides();
        assert_eq!(overrides.max_history_length, Some(8));
        assert_eq!(overrides.renderer, Some(RendererChoice::Svg));
        assert_eq!(overrides.sync_enabled, Some(false));
        assert_eq!(overrides.optimized_pass_from_debug, None);
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let args = TrackerArgs::try_parse_from(["cts-tracker", "--repo", "."]).unwrap();
        let overrides = args.overrides();
        assert!(overrides.max_history_length.is_none());
        assert!(overrides.renderer.is_none());
        assert!(overrides.sync_enabled.is_none());
    }

    #[test]
    fn unknown_renderer_is_rejected() {
        assert!(TrackerArgs::try_parse_from(["cts-tracker", "--renderer", "pdf"]).is_err());
    }
}
