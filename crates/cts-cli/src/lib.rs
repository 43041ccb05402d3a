//! The `cts-tracker` invocation: arguments, repository sync, and the
//! pull / reduce / record / chart / publish pipeline.

pub mod args;
pub mod pipeline;
pub mod sync;

pub use args::TrackerArgs;
pub use pipeline::{RunOutcome, Tracker};
pub use sync::{GitCli, NoSync, VersionControl};
