//! One tracker invocation, start to finish.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use cts_analysis::dump::{dump_modified, load_dump};
use cts_analysis::{reduce_dump, DiagnosticsReport, ReduceOptions, Reduction};
use cts_core::config::{RepoLayout, TrackerConfig};
use cts_core::errors::PipelineError;
use cts_render::{create_renderer, regenerate_charts, ChartRenderer};
use cts_storage::{append_and_bound, HistoryStore};

use crate::sync::{GitCli, NoSync, VersionControl};

/// What an invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The dump was already recorded; nothing was written or published.
    Unchanged { run_timestamp: DateTime<Utc> },
    /// A new run was appended and the artifacts refreshed.
    Recorded {
        history_len: usize,
        charts: Vec<PathBuf>,
    },
}

/// Drives pull, reduce, record, chart, and publish for one repository.
pub struct Tracker {
    layout: RepoLayout,
    config: TrackerConfig,
    vcs: Box<dyn VersionControl>,
    renderer: Option<Box<dyn ChartRenderer>>,
    force: bool,
    diagnostics: bool,
}

impl Tracker {
    pub fn new(layout: RepoLayout, config: TrackerConfig, vcs: Box<dyn VersionControl>) -> Self {
        Self {
            layout,
            config,
            vcs,
            renderer: None,
            force: false,
            diagnostics: false,
        }
    }

    /// Build a tracker for `root` with the collaborators `config` selects.
    pub fn from_config(root: &Path, config: TrackerConfig) -> Self {
        let layout = config.paths.layout(root);
        let vcs: Box<dyn VersionControl> = if config.sync.effective_enabled() {
            Box::new(GitCli::new())
        } else {
            Box::new(NoSync)
        };
        let renderer = config.render.renderer.map(create_renderer);
        Self::new(layout, config, vcs).with_renderer(renderer)
    }

    pub fn with_renderer(mut self, renderer: Option<Box<dyn ChartRenderer>>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn layout(&self) -> &RepoLayout {
        &self.layout
    }

    pub fn run(&self) -> Result<RunOutcome, PipelineError> {
        let start = Instant::now();
        let layout = &self.layout;
        layout.validate()?;

        self.vcs.pull(&layout.root)?;
        let dump_time = dump_modified(&layout.dump_file)?;

        // The store is closed at the end of this block so the database file
        // is complete on disk before it is published.
        let (history, labels) = {
            let store = HistoryStore::open(&layout.history_file)?;
            if !self.force && store.latest_run_timestamp()? == Some(dump_time) {
                tracing::info!(
                    run_timestamp = %dump_time.to_rfc3339(),
                    "dump already recorded, nothing to do"
                );
                return Ok(RunOutcome::Unchanged {
                    run_timestamp: dump_time,
                });
            }

            let loaded = load_dump(&layout.dump_file)?;
            let options = ReduceOptions::from_config(&self.config.reduce);
            let Reduction { stats, labels } = reduce_dump(&loaded.dump, loaded.modified, &options)?;

            let history = append_and_bound(
                store.load()?,
                stats,
                self.config.history.effective_max_length(),
            );
            store.save(&history)?;
            (history, labels)
        };

        let charts = match &self.renderer {
            Some(renderer) => regenerate_charts(renderer.as_ref(), &history, &layout.image_dir)?,
            None => {
                tracing::debug!("no renderer configured, charts left as they are");
                Vec::new()
            }
        };

        if let Some(latest) = history.last() {
            let report = DiagnosticsReport::new(latest, &labels);
            tracing::info!(summary = %report.summary(), runs = history.len(), "recorded run");
            if self.diagnostics {
                println!("{report}");
            }
        }

        self.vcs
            .publish(&layout.root, self.config.sync.effective_commit_message())?;

        tracing::info!(
            vcs = self.vcs.name(),
            charts = charts.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "run complete"
        );
        Ok(RunOutcome::Recorded {
            history_len: history.len(),
            charts,
        })
    }
}
