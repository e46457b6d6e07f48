//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod credentials;
mod http_transport;
mod token_storage;

pub use credentials::{Anonymous, CredentialProvider};
pub use http_transport::{HttpTransport, TransportError, TransportRequest, TransportResponse};
pub use token_storage::{StorageError, TokenStorage};
