//! Transport implementation using reqwest.
//!
//! Sends exactly the request it is handed. Credentials, status
//! interpretation and decoding belong to the gateway.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use lifetube_application::{HttpTransport, TransportError, TransportRequest, TransportResponse};
use lifetube_domain::HttpMethod;
use reqwest::{Client, Method, Url};
use tracing::debug;

use crate::http::{BuiltBody, build_body};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport backed by `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport with the given per-request timeout.
    ///
    /// Configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "LifeTube/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("LifeTube/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let host = error
                .url()
                .and_then(Url::host_str)
                .unwrap_or("unknown")
                .to_string();
            return TransportError::ConnectionFailed(format!("{host}: {error}"));
        }

        if error.is_builder() || error.is_request() {
            return TransportError::InvalidRequest(error.to_string());
        }

        TransportError::Other(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let timeout_ms = self.timeout_ms();
        let url = Url::parse(&request.url)
            .map_err(|e| TransportError::InvalidRequest(format!("{e}: {}", request.url)))?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(self.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        builder = match build_body(&request.body)
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?
        {
            BuiltBody::None => builder,
            BuiltBody::Json(bytes) => builder.body(bytes),
            BuiltBody::Multipart(form) => builder.multipart(form),
        };

        let start = Instant::now();
        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other(format!("Failed to read body: {e}")))?
            .to_vec();

        debug!(
            method = %request.method,
            url = %request.url,
            status,
            elapsed_ms = start.elapsed().as_millis(),
            "response received"
        );

        Ok(TransportResponse::new(status, body))
    }
}
