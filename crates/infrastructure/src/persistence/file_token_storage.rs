//! File-based token storage.
//!
//! The session token lives in a small JSON document, by default under the
//! user's config directory (see [`crate::settings`]).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lifetube_application::{StorageError, TokenStorage};
use lifetube_domain::AuthToken;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

/// Current session file format.
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk layout:
/// ```json
/// {
///   "schema_version": 1,
///   "token": "eyJhbGciOi..."
/// }
/// ```
#[derive(Serialize, Deserialize)]
struct SessionFile {
    schema_version: u32,
    token: String,
}

/// Stores the session token in a JSON file.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash never leaves a half-written token behind.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    /// Creates storage backed by `path`. Nothing is touched until first use.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The session file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl TokenStorage for FileTokenStorage {
    async fn load(&self) -> Result<Option<AuthToken>, StorageError> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let file: SessionFile =
            from_json_bytes(&content).map_err(|e| StorageError::Serialization(e.to_string()))?;

        if file.schema_version > SCHEMA_VERSION {
            return Err(StorageError::Serialization(format!(
                "unsupported session file version {}",
                file.schema_version
            )));
        }

        let token = AuthToken::new(file.token);
        Ok((!token.is_blank()).then_some(token))
    }

    async fn save(&self, token: &AuthToken) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = to_json_stable_bytes(&SessionFile {
            schema_version: SCHEMA_VERSION,
            token: token.expose().to_string(),
        })
        .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, &content).await?;
        fs::rename(&temp, &self.path).await?;
        debug!(path = %self.path.display(), "session token saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "session token removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
