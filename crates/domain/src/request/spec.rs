//! Request specification type

use serde::Serialize;

use super::{HttpMethod, MultipartForm, RequestBody};

/// An outbound call to the backend, relative to the API base URL.
///
/// The gateway resolves `path` against the configured base URL and attaches
/// the bearer credential; callers never set `Authorization` themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Path below the API root, e.g. `/videos/trending`
    pub path: String,
    /// Query string pairs in order
    pub query: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
    /// Whether a 401 answer means the held session has expired.
    ///
    /// Credential exchanges (login, register) answer 401 for bad passwords,
    /// which says nothing about the current session.
    pub expires_session: bool,
}

impl ApiRequest {
    /// Creates a request with no query and no body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::None,
            expires_session: true,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST request with no body.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attaches a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attaches a multipart form.
    #[must_use]
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Appends query string pairs.
    #[must_use]
    pub fn query(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Marks the request as a credential exchange whose 401 does not expire
    /// the session.
    #[must_use]
    pub const fn credential_exchange(mut self) -> Self {
        self.expires_session = false;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_get_request_defaults() {
        let req = ApiRequest::get("/videos");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/videos");
        assert_eq!(req.body, RequestBody::None);
        assert!(req.expires_session);
    }

    #[test]
    fn test_json_body_and_exchange_flag() {
        let req = ApiRequest::post("/auth/login")
            .json(&serde_json::json!({"username": "alice"}))
            .unwrap()
            .credential_exchange();
        assert_eq!(req.body.content_type(), Some("application/json"));
        assert!(!req.expires_session);
    }
}
