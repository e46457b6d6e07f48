//! User profile types.

use serde::{Deserialize, Serialize};

use crate::id::UserId;
use crate::video::Video;

/// A user profile as returned by the backend.
///
/// The client only ever holds a read-only copy; the backend owns the record.
/// Channels are users, so the same type describes a channel page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    pub id: UserId,
    /// Display name.
    pub username: String,
    /// Avatar image URL, if the user has one.
    #[serde(default, alias = "avatar_url", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Number of channels subscribed to this user.
    #[serde(default, alias = "subscriber_count")]
    pub subscriber_count: u64,
}

impl User {
    /// Creates a user with no avatar and no subscribers.
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            avatar_url: None,
            subscriber_count: 0,
        }
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

/// A channel page: the owner's profile plus their uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelProfile {
    /// The channel owner.
    #[serde(flatten)]
    pub user: User,
    /// Uploaded videos, newest first as the backend orders them.
    #[serde(default)]
    pub videos: Vec<Video>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_snake_case_profile() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","username":"alice","avatar_url":"/a.png","subscriberCount":12}"#,
        )
        .unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.avatar_url.as_deref(), Some("/a.png"));
        assert_eq!(user.subscriber_count, 12);
    }

    #[test]
    fn test_channel_profile_flattens_user() {
        let channel: ChannelProfile = serde_json::from_str(
            r#"{"id":"u1","username":"alice","subscriberCount":3,"videos":[{"id":"v1","title":"t"}]}"#,
        )
        .unwrap();
        assert_eq!(channel.user.subscriber_count, 3);
        assert_eq!(channel.videos.len(), 1);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let user: User = serde_json::from_str(r#"{"id":"u1","username":"bob"}"#).unwrap();
        assert_eq!(user, User::new(UserId::parse("u1").unwrap(), "bob"));
    }
}
