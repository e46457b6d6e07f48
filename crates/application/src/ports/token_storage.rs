//! Durable token storage port

use async_trait::async_trait;
use lifetube_domain::AuthToken;

/// Errors that can occur while persisting the session token.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Durable storage for the session token across process restarts.
///
/// Only the session store talks to this port.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Loads the persisted token. Returns `None` if nothing is stored.
    async fn load(&self) -> Result<Option<AuthToken>, StorageError>;

    /// Persists the token, replacing any previous one.
    async fn save(&self, token: &AuthToken) -> Result<(), StorageError>;

    /// Removes the persisted token. Clearing empty storage succeeds.
    async fn clear(&self) -> Result<(), StorageError>;
}
