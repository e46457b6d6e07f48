//! Application error types

use lifetube_domain::DomainError;
use serde::Deserialize;
use thiserror::Error;

use crate::ports::{StorageError, TransportError};

/// A field-level validation message from a 400 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field, when the backend names one.
    pub field: Option<String>,
    /// Human-readable message.
    pub message: String,
}

/// Uniform failure of a backend call.
///
/// Every HTTP variant keeps the backend's own message when it sent one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// 401: the credential is missing, invalid or expired.
    #[error("{}", .message.as_deref().unwrap_or("not authorized"))]
    Unauthorized {
        /// Backend message.
        message: Option<String>,
    },

    /// 403: the action is not permitted for this user.
    #[error("{}", .message.as_deref().unwrap_or("forbidden"))]
    Forbidden {
        /// Backend message.
        message: Option<String>,
    },

    /// 404: the resource does not exist.
    #[error("{}", .message.as_deref().unwrap_or("not found"))]
    NotFound {
        /// Backend message.
        message: Option<String>,
    },

    /// 400: the backend rejected the input.
    #[error("{}", validation_summary(.message.as_deref(), .fields))]
    Validation {
        /// Backend message.
        message: Option<String>,
        /// Field-level messages.
        fields: Vec<FieldError>,
    },

    /// 5xx.
    #[error("server error {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Server {
        /// HTTP status code.
        status: u16,
        /// Backend message.
        message: Option<String>,
    },

    /// Any other non-success status.
    #[error("unexpected status {status}: {}", .message.as_deref().unwrap_or("no details"))]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Backend message.
        message: Option<String>,
    },

    /// No response was received.
    #[error("network error: {0}")]
    Network(#[from] TransportError),

    /// A success response did not have the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),

    /// The request was rejected locally before sending.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] DomainError),
}

fn validation_summary(message: Option<&str>, fields: &[FieldError]) -> String {
    if let Some(message) = message {
        return message.to_string();
    }
    if fields.is_empty() {
        return "validation failed".to_string();
    }
    fields
        .iter()
        .map(|f| match &f.field {
            Some(field) => format!("{field}: {}", f.message),
            None => f.message.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<RawFieldError>,
}

#[derive(Debug, Deserialize)]
struct RawFieldError {
    #[serde(default, alias = "param", alias = "path")]
    field: Option<String>,
    #[serde(alias = "msg")]
    message: String,
}

impl GatewayError {
    /// Classifies a non-success response.
    #[must_use]
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
        let message = parsed.error.or(parsed.message).or_else(|| {
            // Plain-text bodies are passed through as the message.
            let text = String::from_utf8_lossy(body).trim().to_string();
            (!text.is_empty() && !text.starts_with('{')).then_some(text)
        });

        match status {
            400 => Self::Validation {
                message,
                fields: parsed
                    .errors
                    .into_iter()
                    .map(|e| FieldError {
                        field: e.field,
                        message: e.message,
                    })
                    .collect(),
            },
            401 => Self::Unauthorized { message },
            403 => Self::Forbidden { message },
            404 => Self::NotFound { message },
            500..=599 => Self::Server { status, message },
            _ => Self::UnexpectedStatus { status, message },
        }
    }

    /// HTTP status, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Validation { .. } => Some(400),
            Self::Server { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::InvalidRequest(_) => None,
        }
    }

    /// The message the backend sent, verbatim.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Validation { message, .. }
            | Self::Server { message, .. }
            | Self::UnexpectedStatus { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) | Self::InvalidRequest(_) => None,
        }
    }

    /// Message for the end user: the backend's text, or `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::InvalidRequest(e) => e.to_string(),
            _ => self.backend_message().unwrap_or(fallback).to_string(),
        }
    }

    /// True when no response was received.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failure of a session operation.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backend could not be reached.
    #[error("network unavailable: {0}")]
    NetworkUnavailable(String),

    /// The backend answered and refused; `message` is its text verbatim.
    #[error("{message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Backend message, or a generic one when it sent none.
        message: String,
    },

    /// The backend answered success with an unexpected payload.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Durable storage failed.
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl From<GatewayError> for SessionError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::Network(e) => Self::NetworkUnavailable(e.to_string()),
            GatewayError::Decode(msg) => Self::InvalidResponse(msg),
            GatewayError::InvalidRequest(e) => Self::InvalidResponse(e.to_string()),
            other => Self::Rejected {
                status: other.status().unwrap_or_default(),
                message: other
                    .backend_message()
                    .map_or_else(|| other.to_string(), str::to_string),
            },
        }
    }
}

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
