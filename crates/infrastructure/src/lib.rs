//! LifeTube Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer:
//! - [`ReqwestTransport`] for HTTP
//! - [`FileTokenStorage`] and [`InMemoryTokenStorage`] for the session token
//! - [`ClientSettings`] to wire them from the environment

pub mod adapters;
pub mod http;
pub mod persistence;
pub mod serialization;
pub mod settings;

pub use adapters::{DEFAULT_TIMEOUT, ReqwestTransport};
pub use http::{BodyBuildError, BuiltBody, build_body, load_upload_file};
pub use persistence::{FileTokenStorage, InMemoryTokenStorage};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable_bytes};
pub use settings::{ClientSettings, SettingsError, default_session_file};
