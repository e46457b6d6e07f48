//! Session store: the single owner of "who is logged in".

use std::sync::Arc;

use async_trait::async_trait;
use lifetube_domain::{
    ApiBaseUrl, AuthResponse, AuthToken, Credentials, Registration, Session, SessionStatus, User,
};
use tokio::sync::{Mutex, watch};
use tracing::{info, warn};

use crate::api::AuthApi;
use crate::error::{SessionError, SessionResult};
use crate::gateway::Gateway;
use crate::ports::{CredentialProvider, HttpTransport, TokenStorage};

/// In-memory session plus its durable token copy.
///
/// Every write replaces the whole [`Session`] in one step through the watch
/// channel, so readers never observe a half-updated state. Writes that touch
/// storage hold `writes` so memory and disk change in the same order.
struct SessionState {
    session: watch::Sender<Session>,
    storage: Arc<dyn TokenStorage>,
    writes: Mutex<()>,
}

impl SessionState {
    fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            session: watch::Sender::new(Session::empty()),
            storage,
            writes: Mutex::new(()),
        }
    }

    fn holds(&self, token: &AuthToken) -> bool {
        self.session.borrow().token() == Some(token)
    }

    async fn clear(&self) -> SessionResult<()> {
        let _writes = self.writes.lock().await;
        self.session.send_replace(Session::empty());
        self.storage.clear().await?;
        Ok(())
    }

    /// Clears only if `token` is still the held one; returns whether it did.
    async fn clear_if_holding(&self, token: &AuthToken) -> SessionResult<bool> {
        let _writes = self.writes.lock().await;
        if !self.holds(token) {
            return Ok(false);
        }
        self.session.send_replace(Session::empty());
        self.storage.clear().await?;
        Ok(true)
    }

    async fn establish(&self, session: Session) {
        let _writes = self.writes.lock().await;
        if let Some(token) = session.token()
            && let Err(e) = self.storage.save(token).await
        {
            // The session still holds for this process.
            warn!(error = %e, "failed to persist session token");
        }
        self.session.send_replace(session);
    }
}

#[async_trait]
impl CredentialProvider for SessionState {
    async fn bearer_token(&self) -> Option<AuthToken> {
        self.session.borrow().token().cloned()
    }

    async fn invalidate(&self, rejected: &AuthToken) {
        match self.clear_if_holding(rejected).await {
            Ok(true) => info!("session expired"),
            Ok(false) => {}
            Err(e) => warn!(error = %e, "failed to remove persisted token after expiry"),
        }
    }
}

/// Owns the current session and the gateway that reads from it.
///
/// Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<SessionState>,
    gateway: Gateway,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("status", &self.status())
            .field("gateway", &self.gateway)
            .finish()
    }
}

impl SessionStore {
    /// Creates an empty store and the gateway bound to it.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: ApiBaseUrl,
        storage: Arc<dyn TokenStorage>,
    ) -> Self {
        let state = Arc::new(SessionState::new(storage));
        let gateway = Gateway::new(transport, base_url, state.clone());
        Self { state, gateway }
    }

    /// The gateway every data call should go through.
    #[must_use]
    pub const fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> Session {
        self.state.session.borrow().clone()
    }

    /// True iff a token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.session.borrow().is_authenticated()
    }

    /// The resolved user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.session.borrow().user().cloned()
    }

    /// Derived status; `Restoring` while a persisted token is being resolved.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.state.session.borrow().status()
    }

    /// Subscribes to session changes, including expiry on 401.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.session.subscribe()
    }

    /// Reloads a persisted token and resolves its user.
    ///
    /// While the profile request is in flight the status reads `Restoring`.
    /// Any failure to resolve the user clears the session, in memory and on
    /// disk; the failure is returned so the caller can tell a network outage
    /// from a rejected token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the token cannot be read, or the
    /// error of the profile request.
    pub async fn restore(&self) -> SessionResult<SessionStatus> {
        let Some(token) = self.state.storage.load().await? else {
            return Ok(self.status());
        };
        if token.is_blank() {
            self.state.clear().await?;
            return Ok(SessionStatus::Anonymous);
        }

        self.state.session.send_replace(Session::restoring(token.clone()));

        match AuthApi::new(self.gateway.clone()).current_user().await {
            Ok(user) => {
                info!(user = %user.username, "session restored");
                // A logout or a fresh login may have replaced the token meanwhile.
                self.state.session.send_if_modified(|session| {
                    if session.token() == Some(&token) {
                        *session = Session::authenticated(token.clone(), user.clone());
                        true
                    } else {
                        false
                    }
                });
                Ok(self.status())
            }
            Err(e) => {
                warn!(error = %e, "could not restore session, clearing it");
                self.state.clear_if_holding(&token).await?;
                Err(e.into())
            }
        }
    }

    /// Logs in and persists the issued token.
    ///
    /// On failure the session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// [`SessionError::Rejected`] with the backend's message, or
    /// [`SessionError::NetworkUnavailable`].
    pub async fn login(&self, credentials: &Credentials) -> SessionResult<Session> {
        let response = AuthApi::new(self.gateway.clone())
            .login(credentials)
            .await
            .map_err(|e| {
                warn!(username = %credentials.username, error = %e, "login failed");
                SessionError::from(e)
            })?;
        Ok(self.establish(response).await)
    }

    /// Creates an account and logs into it.
    ///
    /// # Errors
    ///
    /// Same as [`login`](Self::login); uniqueness failures carry the
    /// backend's message verbatim.
    pub async fn register(&self, registration: &Registration) -> SessionResult<Session> {
        let response = AuthApi::new(self.gateway.clone())
            .register(registration)
            .await
            .map_err(|e| {
                warn!(username = %registration.username, error = %e, "registration failed");
                SessionError::from(e)
            })?;
        Ok(self.establish(response).await)
    }

    /// Forgets the session locally. Calling it while logged out is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] if the persisted token could not be
    /// removed; the in-memory session is cleared regardless.
    pub async fn logout(&self) -> SessionResult<()> {
        if self.is_authenticated() {
            info!("logged out");
        }
        self.state.clear().await
    }

    async fn establish(&self, response: AuthResponse) -> Session {
        let AuthResponse { token, user } = response;
        info!(user = %user.username, "logged in");
        let session = Session::authenticated(token, user);
        self.state.establish(session.clone()).await;
        session
    }
}
