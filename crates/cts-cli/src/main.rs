use std::process::ExitCode;

use clap::Parser;
use cts_cli::{RunOutcome, Tracker, TrackerArgs};
use cts_core::config::TrackerConfig;
use cts_core::constants::VERSION;
use cts_core::errors::{CtsErrorCode, PipelineError};
use cts_core::tracing::init_tracing;

fn main() -> ExitCode {
    init_tracing();
    let args = TrackerArgs::parse();

    match run(&args) {
        Ok(RunOutcome::Unchanged { .. }) => {
            println!("No new dump; history unchanged.");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Recorded { history_len, charts }) => {
            println!(
                "Recorded run ({history_len} in history, {} charts written).",
                charts.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.tagged());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &TrackerArgs) -> Result<RunOutcome, PipelineError> {
    let repo = args.repo()?;
    tracing::info!(version = VERSION, repo = %repo.display(), "cts-tracker starting");
    let config = TrackerConfig::load(repo, Some(&args.overrides()))?;
    Tracker::from_config(repo, config)
        .force(args.force)
        .diagnostics(args.diagnostics)
        .run()
}
