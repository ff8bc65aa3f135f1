pub mod gateway;

pub use gateway::{FetchedObject, StorageGateway};
// StorageError は errors モジュールで定義済み
pub use crate::errors::StorageError;
