//! Persistence of the bounded run history in a SQLite file.

pub mod connection;
pub mod history;
pub mod migrations;
pub mod queries;

pub use history::{append_and_bound, HistoryStore};
