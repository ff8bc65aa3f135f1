pub mod request;

pub use request::{validate_container, validate_key};
