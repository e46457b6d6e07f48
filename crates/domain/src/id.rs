//! Typed identifiers for backend-owned entities.
//!
//! The backend issues every identifier; the client only carries them
//! around, so each one is an opaque string with a distinct type.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DomainError, DomainResult};

// Ids are spliced into endpoint paths, so each must stay a single segment.
fn is_path_safe(value: &str) -> bool {
    !value.is_empty()
        && value != "."
        && value != ".."
        && !value
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control())
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        // Some backends hand out integer keys; both forms become strings.
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                #[derive(Deserialize)]
                #[serde(untagged)]
                enum Raw {
                    Text(String),
                    Number(i64),
                }

                match Raw::deserialize(deserializer)? {
                    Raw::Text(text) => Self::parse(text).map_err(D::Error::custom),
                    Raw::Number(number) => Ok(Self(number.to_string())),
                }
            }
        }

        impl $name {
            /// Wraps a backend identifier, rejecting values that could not
            /// stand alone as one URL path segment.
            ///
            /// # Errors
            ///
            /// Returns [`DomainError::InvalidIdentifier`] if `value` is blank,
            /// is a dot segment, or contains `/`, `?`, `#`, `%` or whitespace.
            pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if !is_path_safe(&value) {
                    return Err(DomainError::InvalidIdentifier(value));
                }
                Ok(Self(value))
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a user (also used as a channel identifier).
    UserId
);
string_id!(
    /// Identifier of a video.
    VideoId
);
string_id!(
    /// Identifier of a comment.
    CommentId
);
