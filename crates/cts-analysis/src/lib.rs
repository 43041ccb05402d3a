//! Reduction of a raw CTS result dump into per-tier, per-platform counters.
//!
//! - [`dump`]: typed input model and loader
//! - [`reducer`]: the single-pass tree reducer
//! - [`diagnostics`]: human-readable report of a reduction

pub mod diagnostics;
pub mod dump;
pub mod reducer;

pub use diagnostics::DiagnosticsReport;
pub use dump::{load_dump, Dump, LoadedDump};
pub use reducer::{reduce, reduce_dump, ReduceOptions, Reduction};
