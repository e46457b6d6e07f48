//! HTTP body helpers.

mod body_builder;

pub use body_builder::{BodyBuildError, BuiltBody, build_body, load_upload_file};
