//! Video types, list filters and the like/dislike toggle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::id::VideoId;
use crate::user::User;

/// Categories offered when uploading or browsing.
pub const CATEGORIES: &[&str] = &[
    "General",
    "Music",
    "Gaming",
    "Sports",
    "News",
    "Education",
    "Entertainment",
];

/// Category assigned to uploads when none is chosen.
pub const DEFAULT_CATEGORY: &str = "General";

/// A video record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Backend identifier.
    pub id: VideoId,
    /// Title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Category name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Tags, accepted either as a list or a comma separated string.
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    /// Path or URL of the media file.
    #[serde(default, alias = "video_url", skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Path or URL of the thumbnail.
    #[serde(default, alias = "thumbnail_url", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    /// View count.
    #[serde(default)]
    pub views: u64,
    /// Upload time.
    #[serde(default, alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Number of likes.
    #[serde(default, alias = "like_count")]
    pub like_count: u64,
    /// Number of dislikes.
    #[serde(default, alias = "dislike_count")]
    pub dislike_count: u64,
    /// Uploading channel.
    #[serde(default, rename = "users", alias = "owner", alias = "user", skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
}

impl Video {
    /// Returns true if `user` uploaded this video.
    #[must_use]
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.owner.as_ref().is_some_and(|owner| owner.id == user.id)
    }
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tags {
        List(Vec<String>),
        Joined(String),
        Missing(()),
    }

    Ok(match Tags::deserialize(deserializer)? {
        Tags::List(list) => list,
        Tags::Joined(joined) => split_tags(&joined),
        Tags::Missing(()) => Vec::new(),
    })
}

/// Splits a comma separated tag string, trimming blanks.
#[must_use]
pub fn split_tags(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Filters for listing videos.
///
/// Every field is optional; an empty query lists the default feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoQuery {
    /// Only videos in this category.
    pub category: Option<String>,
    /// Free-text search.
    pub search: Option<String>,
    /// Maximum number of results.
    pub limit: Option<u32>,
}

impl VideoQuery {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            category: None,
            search: None,
            limit: None,
        }
    }

    /// Restricts to a category. `"All"` clears the filter.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (category != "All").then_some(category);
        self
    }

    /// Adds a search term.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Limits the number of results.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns the query string pairs for the filters that are set.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category".to_string(), category.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

/// A like or dislike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    /// Thumbs up.
    Like,
    /// Thumbs down.
    Dislike,
}

impl Reaction {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    /// Computes the reaction held after submitting `submitted`.
    ///
    /// Submitting the held reaction clears it; anything else replaces it.
    #[must_use]
    pub fn toggle(current: Option<Self>, submitted: Self) -> Option<Self> {
        if current == Some(submitted) {
            None
        } else {
            Some(submitted)
        }
    }
}

/// Like/dislike counts together with the viewer's own reaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionTally {
    /// Number of likes.
    pub likes: u64,
    /// Number of dislikes.
    pub dislikes: u64,
    /// Reaction held by the viewer.
    pub mine: Option<Reaction>,
}

impl ReactionTally {
    /// Applies a submission with toggle semantics and returns the new tally.
    #[must_use]
    pub fn apply(self, submitted: Reaction) -> Self {
        let mut next = self;
        if let Some(held) = self.mine {
            let count = next.count_mut(held);
            *count = count.saturating_sub(1);
        }
        next.mine = Reaction::toggle(self.mine, submitted);
        if let Some(held) = next.mine {
            *next.count_mut(held) += 1;
        }
        next
    }

    const fn count_mut(&mut self, reaction: Reaction) -> &mut u64 {
        match reaction {
            Reaction::Like => &mut self.likes,
            Reaction::Dislike => &mut self.dislikes,
        }
    }
}
