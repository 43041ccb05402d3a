//! V001: run history table.

pub const MIGRATION_SQL: &str = r#"
-- One row per recorded run, oldest first by seq.
-- stats_json holds the serialized RunStats; run_timestamp duplicates its
-- timestamp so change detection does not need to decode the model.
CREATE TABLE IF NOT EXISTS run_history (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    run_timestamp TEXT NOT NULL,
    stats_json TEXT NOT NULL
) STRICT;
"#;
