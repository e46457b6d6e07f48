//! `/auth` endpoints.

use lifetube_domain::{
    ApiRequest, AuthResponse, Credentials, CurrentUserResponse, Registration, User,
};

use super::with_json;
use crate::error::GatewayResult;
use crate::gateway::Gateway;

/// Login, registration and current-user lookup.
#[derive(Debug, Clone)]
pub struct AuthApi {
    gateway: Gateway,
}

impl AuthApi {
    /// Creates the namespace.
    #[must_use]
    pub const fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the gateway error; a wrong password is a 401 carrying the
    /// backend's message and does not expire any held session.
    pub async fn login(&self, credentials: &Credentials) -> GatewayResult<AuthResponse> {
        let request = with_json(ApiRequest::post("/auth/login"), credentials)?;
        self.gateway.send(request.credential_exchange()).await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the gateway error, e.g. a taken username.
    pub async fn register(&self, registration: &Registration) -> GatewayResult<AuthResponse> {
        let request = with_json(ApiRequest::post("/auth/register"), registration)?;
        self.gateway.send(request.credential_exchange()).await
    }

    /// `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` when the held token is no longer valid.
    pub async fn current_user(&self) -> GatewayResult<User> {
        let response: CurrentUserResponse = self.gateway.send(ApiRequest::get("/auth/me")).await?;
        Ok(response.user)
    }
}
