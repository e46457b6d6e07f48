//! Client configuration resolved from the environment.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use lifetube_application::{LifeTubeClient, TransportError};
use lifetube_domain::{ApiBaseUrl, DEFAULT_API_URL, DomainError};
use thiserror::Error;

use crate::adapters::{DEFAULT_TIMEOUT, ReqwestTransport};
use crate::persistence::FileTokenStorage;

/// Backend API root.
pub const API_URL_ENV: &str = "LIFETUBE_API_URL";
/// Session file location.
pub const SESSION_FILE_ENV: &str = "LIFETUBE_SESSION_FILE";
/// Request timeout in whole seconds.
pub const TIMEOUT_ENV: &str = "LIFETUBE_TIMEOUT_SECS";

/// Configuration failures.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The API root is not a usable URL.
    #[error("invalid API URL: {0}")]
    ApiUrl(#[from] DomainError),

    /// The timeout is not a positive integer.
    #[error("invalid timeout {value:?}: expected a positive number of seconds")]
    Timeout {
        /// Raw value.
        value: String,
    },

    /// No session file was given and the platform has no config directory.
    #[error("cannot determine a location for the session file; set {SESSION_FILE_ENV}")]
    NoConfigDir,

    /// The HTTP client could not be built.
    #[error("failed to create HTTP client: {0}")]
    Transport(#[from] TransportError),
}

/// Everything needed to wire a [`LifeTubeClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Backend API root.
    pub api_url: ApiBaseUrl,
    /// Where the session token is persisted.
    pub session_file: PathBuf,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientSettings {
    /// Builds settings from explicit values, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid URL, a zero timeout, or when no
    /// session file location can be determined.
    pub fn resolve(
        api_url: Option<&str>,
        session_file: Option<PathBuf>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, SettingsError> {
        let api_url = ApiBaseUrl::parse(api_url.unwrap_or(DEFAULT_API_URL))?;
        let session_file = match session_file {
            Some(path) => path,
            None => default_session_file().ok_or(SettingsError::NoConfigDir)?,
        };
        let timeout = match timeout_secs {
            Some(0) => {
                return Err(SettingsError::Timeout {
                    value: "0".to_string(),
                });
            }
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };
        Ok(Self {
            api_url,
            session_file,
            timeout,
        })
    }

    /// Reads `LIFETUBE_API_URL`, `LIFETUBE_SESSION_FILE` and
    /// `LIFETUBE_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let timeout_secs = lookup(TIMEOUT_ENV)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| SettingsError::Timeout { value: raw })
            })
            .transpose()?;
        Self::resolve(
            lookup(API_URL_ENV).as_deref(),
            lookup(SESSION_FILE_ENV).map(PathBuf::from),
            timeout_secs,
        )
    }

    /// Wires a client that talks HTTP and persists its token to
    /// [`session_file`](Self::session_file).
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Transport`] if the HTTP client cannot be built.
    pub fn connect(&self) -> Result<LifeTubeClient, SettingsError> {
        let transport = ReqwestTransport::new(self.timeout)?;
        Ok(LifeTubeClient::new(
            Arc::new(transport),
            self.api_url.clone(),
            Arc::new(FileTokenStorage::new(self.session_file.clone())),
        ))
    }
}

/// `<config dir>/lifetube/session.json`.
#[must_use]
pub fn default_session_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lifetube").join("session.json"))
}
