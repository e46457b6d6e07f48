//! Credential supply port

use async_trait::async_trait;
use lifetube_domain::AuthToken;

/// Supplies the bearer token for outbound requests and is told when the
/// backend rejects it.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// The token to attach, if any.
    async fn bearer_token(&self) -> Option<AuthToken>;

    /// Called once the backend answered 401 to a request carrying `rejected`.
    ///
    /// Implementations must ignore the call if they have moved on to a
    /// different token in the meantime.
    async fn invalidate(&self, rejected: &AuthToken);
}

/// Provider for gateways that never authenticate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

#[async_trait]
impl CredentialProvider for Anonymous {
    async fn bearer_token(&self) -> Option<AuthToken> {
        None
    }

    async fn invalidate(&self, _rejected: &AuthToken) {}
}
