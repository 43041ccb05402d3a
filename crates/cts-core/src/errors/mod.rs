//! Error handling for the tracker.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod pipeline_error;
pub mod reduce_error;
pub mod render_error;
pub mod storage_error;
pub mod sync_error;

pub use config_error::ConfigError;
pub use error_code::CtsErrorCode;
pub use input_error::InputError;
pub use pipeline_error::PipelineError;
pub use reduce_error::ReduceError;
pub use render_error::RenderError;
pub use storage_error::StorageError;
pub use sync_error::SyncError;
