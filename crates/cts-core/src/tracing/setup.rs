//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracker's tracing/logging system.
///
/// Reads the `CTS_LOG` environment variable for per-crate log levels.
/// Format: `CTS_LOG=cts_analysis=debug,cts_storage=warn`
///
/// Falls back to `cts=info` if `CTS_LOG` is not set or is invalid.
/// Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("CTS_LOG").unwrap_or_else(|_| EnvFilter::new("cts=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
