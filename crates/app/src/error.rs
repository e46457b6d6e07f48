//! CLI error types.

use lifetube_application::{GatewayError, SessionError};
use lifetube_domain::DomainError;
use lifetube_infrastructure::{BodyBuildError, SettingsError};
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Settings(#[from] SettingsError),

    /// Login, registration or logout failed.
    #[error("{0}")]
    Session(#[from] SessionError),

    /// A backend call failed.
    #[error("{0}")]
    Api(#[from] GatewayError),

    /// Bad input caught before any request was sent.
    #[error("{0}")]
    Invalid(#[from] DomainError),

    /// A file could not be read for upload.
    #[error("{0}")]
    File(#[from] BodyBuildError),

    /// The upload was refused; carries the message to show.
    #[error("{0}")]
    Upload(String),

    /// The command needs a logged-in user.
    #[error("not logged in; run `lifetube login <username>` first")]
    NotLoggedIn,

    /// Writing output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
