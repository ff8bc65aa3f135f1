pub mod decode;
pub mod encode;
pub mod engine;
pub mod grayscale;
pub mod kind;
pub mod resize;
pub mod rotate;

pub use decode::decode_image;
pub use encode::encode_image;
pub use engine::{TransformOutcome, apply_transform};
pub use grayscale::grayscale_image;
pub use kind::TransformKind;
pub use resize::{resize_dimensions, resize_image};
pub use rotate::rotate_image;
