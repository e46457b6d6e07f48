//! LifeTube Application - Session and request gateway
//!
//! This crate defines the application layer with:
//! - Port traits (transport, token storage, credential supply)
//! - The authorized request gateway and its error taxonomy
//! - The session store
//! - Typed endpoint namespaces

pub mod api;
pub mod client;
pub mod error;
pub mod gateway;
pub mod ports;
pub mod session;

pub use api::{AuthApi, CommentsApi, UsersApi, VideosApi};
pub use client::LifeTubeClient;
pub use error::{FieldError, GatewayError, GatewayResult, SessionError, SessionResult};
pub use gateway::Gateway;
pub use ports::{
    Anonymous, CredentialProvider, HttpTransport, StorageError, TokenStorage, TransportError,
    TransportRequest, TransportResponse,
};
pub use session::SessionStore;
