//! Authorized request gateway.
//!
//! Every backend call goes through [`Gateway::send`]. The gateway resolves
//! the path against the API root, attaches the bearer credential when one is
//! held, picks the content type for the payload, and turns responses into
//! [`GatewayError`]s. A 401 to a request that carried a credential expires
//! the session here, once, instead of at each call site.

use std::sync::Arc;

use lifetube_domain::{ApiBaseUrl, ApiRequest};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{GatewayError, GatewayResult};
use crate::ports::{CredentialProvider, HttpTransport, TransportRequest, TransportResponse};

/// Shared entry point for backend calls. Cheap to clone.
#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn HttpTransport>,
    base_url: ApiBaseUrl,
    credentials: Arc<dyn CredentialProvider>,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    /// Creates a gateway for the given backend root.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: ApiBaseUrl,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            transport,
            base_url,
            credentials,
        }
    }

    /// The configured backend root.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Sends a request and decodes the JSON success body into `T`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`GatewayError`] for non-success answers,
    /// `Network` if nothing was received, and `Decode` if the body does not
    /// match `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> GatewayResult<T> {
        let response = self.dispatch(request).await?;
        let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &response.body
        };
        serde_json::from_slice(body).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    /// Sends a request whose success body is irrelevant.
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send), minus decoding.
    pub async fn execute(&self, request: ApiRequest) -> GatewayResult<()> {
        self.dispatch(request).await.map(|_| ())
    }

    async fn dispatch(&self, request: ApiRequest) -> GatewayResult<TransportResponse> {
        let url = self.base_url.endpoint(&request.path, &request.query)?;
        let token = self.credentials.bearer_token().await;

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if let Some(content_type) = request.body.content_type() {
            headers.push(("Content-Type".to_string(), content_type.to_string()));
        }
        if let Some(token) = &token {
            headers.push(("Authorization".to_string(), token.bearer_header()));
        }

        debug!(
            method = %request.method,
            path = %request.path,
            authenticated = token.is_some(),
            "sending request"
        );

        let response = self
            .transport
            .send(TransportRequest {
                method: request.method,
                url: url.to_string(),
                headers,
                body: request.body,
            })
            .await
            .map_err(|e| {
                warn!(path = %request.path, error = %e, "request did not reach the backend");
                GatewayError::Network(e)
            })?;

        if response.is_success() {
            debug!(path = %request.path, status = response.status, "request succeeded");
            return Ok(response);
        }

        let error = GatewayError::from_status(response.status, &response.body);
        debug!(path = %request.path, status = response.status, error = %error, "request failed");

        if let Some(token) = token.as_ref().filter(|_| {
            request.expires_session && matches!(error, GatewayError::Unauthorized { .. })
        }) {
            warn!(path = %request.path, "credential rejected, clearing session");
            self.credentials.invalidate(token).await;
        }

        Err(error)
    }
}
