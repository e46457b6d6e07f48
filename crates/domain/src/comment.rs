//! Comment types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::{CommentId, VideoId};
use crate::user::User;

/// A comment on a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Backend identifier.
    pub id: CommentId,
    /// Comment body.
    pub text: String,
    /// Video the comment belongs to.
    #[serde(default, alias = "video_id", skip_serializing_if = "Option::is_none")]
    pub video_id: Option<VideoId>,
    /// Posting time.
    #[serde(default, alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Author.
    #[serde(default, rename = "users", alias = "author", alias = "user", skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
}

/// Body of `POST /comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    /// Target video.
    pub video_id: VideoId,
    /// Comment body.
    pub text: String,
}

impl NewComment {
    /// Builds a comment submission.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyComment`] when `text` is blank.
    pub fn new(video_id: VideoId, text: impl Into<String>) -> DomainResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::EmptyComment);
        }
        Ok(Self { video_id, text })
    }
}
