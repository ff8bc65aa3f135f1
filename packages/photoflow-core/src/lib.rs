pub mod constants;
pub mod errors;
pub mod format;
pub mod pipeline;
pub mod storage;
pub mod transform;
pub mod validation;

// 公開API
pub use constants::{MAX_INPUT_SIZE, MAX_KEY_LENGTH, MAX_PIXELS, RESIZE_TARGET_WIDTH};
pub use errors::{PipelineError, StorageError, TransformError};
pub use format::{CodecFormat, resolve_format};
pub use pipeline::{TransformRequest, TransformResult, run_pipeline};
pub use storage::{FetchedObject, StorageGateway};
pub use transform::{
    TransformKind, TransformOutcome, apply_transform, decode_image, encode_image,
    grayscale_image, resize_image, rotate_image,
};
pub use validation::{validate_container, validate_key};
