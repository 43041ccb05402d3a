//! Shared constants for the CTS result tracker.

/// Tracker version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of runs kept in history.
pub const DEFAULT_MAX_HISTORY_LENGTH: usize = 5;

/// Default data directory, relative to the source root.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default dump file name inside the data directory.
pub const DEFAULT_DUMP_FILE: &str = "dump.json";

/// Default history database name inside the data directory.
pub const DEFAULT_HISTORY_FILE: &str = "history.db";

/// Default chart output directory, relative to the source root.
pub const DEFAULT_IMAGE_DIR: &str = "images";

/// Project config file name, looked up in the source root.
pub const PROJECT_CONFIG_FILE: &str = "cts-tracker.toml";

/// Default commit message used when publishing a new run.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Automatic update of history and charts";
