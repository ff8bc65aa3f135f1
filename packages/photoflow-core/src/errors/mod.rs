pub mod types;

pub use types::{PipelineError, StorageError, TransformError};
