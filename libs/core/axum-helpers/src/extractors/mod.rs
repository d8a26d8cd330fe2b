//! Extractors that turn every rejection into the shared JSON error body.

pub mod id_path;
pub mod json_body;

pub use id_path::IdPath;
pub use json_body::JsonBody;
