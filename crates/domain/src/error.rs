//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body is invalid for the given content type.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// An identifier is invalid or empty.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// An upload form is missing a required field.
    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    /// A comment has no visible text.
    #[error("comment text must not be empty")]
    EmptyComment,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
