//! Process-local token storage.

use async_trait::async_trait;
use lifetube_application::{StorageError, TokenStorage};
use lifetube_domain::AuthToken;
use tokio::sync::RwLock;

/// Keeps the token in memory only; a restart starts logged out.
#[derive(Debug, Default)]
pub struct InMemoryTokenStorage {
    token: RwLock<Option<AuthToken>>,
}

impl InMemoryTokenStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStorage for InMemoryTokenStorage {
    async fn load(&self) -> Result<Option<AuthToken>, StorageError> {
        Ok(self.token.read().await.clone())
    }

    async fn save(&self, token: &AuthToken) -> Result<(), StorageError> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.token.write().await.take();
        Ok(())
    }
}
