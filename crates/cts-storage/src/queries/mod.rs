//! SQL access, one module per table.

pub mod run_history;
