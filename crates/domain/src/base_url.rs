//! Backend root URL and media URL resolution.

use std::fmt;

use url::Url;

use crate::error::{DomainError, DomainResult};

/// API root used when no configuration is supplied.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Validated root of the backend REST API, e.g. `http://localhost:5000/api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl {
    root: String,
}

impl ApiBaseUrl {
    /// Parses and validates an API root.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if `raw` is not an absolute
    /// `http`/`https` URL, or carries a query or fragment.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let url = Url::parse(raw.trim()).map_err(|e| DomainError::InvalidUrl(format!("{e}: {raw}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "unsupported scheme `{}`: {raw}",
                url.scheme()
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(DomainError::InvalidUrl(format!(
                "API root must not carry a query or fragment: {raw}"
            )));
        }
        Ok(Self {
            root: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// The root without a trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.root
    }

    /// Builds the absolute URL of an endpoint below the root.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the joined URL does not parse.
    pub fn endpoint(&self, path: &str, query: &[(String, String)]) -> DomainResult<Url> {
        let path = path.trim_start_matches('/');
        let mut url = Url::parse(&format!("{}/{path}", self.root))
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {path}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Root under which the backend serves uploaded media: the API root with
    /// a trailing `/api` segment removed.
    #[must_use]
    pub fn media_root(&self) -> &str {
        self.root.strip_suffix("/api").unwrap_or(&self.root)
    }

    /// Turns a media path from a backend record into a fetchable URL.
    ///
    /// Server-relative paths (`/uploads/...`) are prefixed with the media
    /// root; absolute URLs pass through; blank input yields `None`.
    #[must_use]
    pub fn resolve_media(&self, path: &str) -> Option<String> {
        let path = path.trim();
        if path.is_empty() {
            None
        } else if path.starts_with('/') {
            Some(format!("{}{path}", self.media_root()))
        } else {
            Some(path.to_string())
        }
    }
}

impl Default for ApiBaseUrl {
    fn default() -> Self {
        Self {
            root: DEFAULT_API_URL.to_string(),
        }
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)
    }
}
