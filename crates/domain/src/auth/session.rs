//! Client-side session snapshot.

use crate::auth::AuthToken;
use crate::user::User;

/// Current authentication state: token plus resolved user.
///
/// A user is only ever present together with a token. A token may be present
/// without a user while a persisted token is being re-resolved at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<AuthToken>,
    user: Option<User>,
}

impl Session {
    /// An empty, logged-out session.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            token: None,
            user: None,
        }
    }

    /// A fully authenticated session.
    #[must_use]
    pub const fn authenticated(token: AuthToken, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    /// A session holding a restored token whose user is not yet known.
    #[must_use]
    pub const fn restoring(token: AuthToken) -> Self {
        Self {
            token: Some(token),
            user: None,
        }
    }

    /// The bearer token, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// The resolved user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// True iff a token is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Derived status for consumers.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match (&self.token, &self.user) {
            (None, _) => SessionStatus::Anonymous,
            (Some(_), None) => SessionStatus::Restoring,
            (Some(_), Some(user)) => SessionStatus::Authenticated(user.clone()),
        }
    }
}

/// What a consumer should render for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// No token.
    Anonymous,
    /// A token is held but the user has not been resolved yet. Treat as
    /// loading rather than logged out.
    Restoring,
    /// Logged in as this user.
    Authenticated(User),
}

impl SessionStatus {
    /// True while the session is still being resolved.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Restoring)
    }
}
