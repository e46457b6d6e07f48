//! Entry point bundling the session store with the endpoint namespaces.

use std::sync::Arc;

use lifetube_domain::ApiBaseUrl;

use crate::api::{AuthApi, CommentsApi, UsersApi, VideosApi};
use crate::ports::{HttpTransport, TokenStorage};
use crate::session::SessionStore;

/// One per process: owns the session and hands out namespaces that share
/// its gateway.
#[derive(Debug, Clone)]
pub struct LifeTubeClient {
    session: SessionStore,
}

impl LifeTubeClient {
    /// Wires a client for the given backend root.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: ApiBaseUrl,
        storage: Arc<dyn TokenStorage>,
    ) -> Self {
        Self {
            session: SessionStore::new(transport, base_url, storage),
        }
    }

    /// The session store.
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Auth endpoints.
    #[must_use]
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.session.gateway().clone())
    }

    /// Video endpoints.
    #[must_use]
    pub fn videos(&self) -> VideosApi {
        VideosApi::new(self.session.gateway().clone())
    }

    /// Comment endpoints.
    #[must_use]
    pub fn comments(&self) -> CommentsApi {
        CommentsApi::new(self.session.gateway().clone())
    }

    /// User and subscription endpoints.
    #[must_use]
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.session.gateway().clone())
    }

    /// Resolves a media path from a backend record against the API root.
    #[must_use]
    pub fn media_url(&self, path: &str) -> Option<String> {
        self.session.gateway().base_url().resolve_media(path)
    }
}
