//! LifeTube Domain - Core types
//!
//! This crate defines the data model shared by the LifeTube client layers.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod base_url;
pub mod comment;
pub mod error;
pub mod format;
pub mod id;
pub mod request;
pub mod upload;
pub mod user;
pub mod video;

pub use auth::{
    AuthResponse, AuthToken, Credentials, CurrentUserResponse, Registration, Session,
    SessionStatus,
};
pub use base_url::{ApiBaseUrl, DEFAULT_API_URL};
pub use comment::{Comment, NewComment};
pub use error::{DomainError, DomainResult};
pub use id::{CommentId, UserId, VideoId};
pub use request::{ApiRequest, HttpMethod, MultipartForm, RequestBody, UploadFile};
pub use upload::{UPLOAD_FALLBACK_MESSAGE, VideoUpload};
pub use user::{ChannelProfile, User};
pub use video::{CATEGORIES, DEFAULT_CATEGORY, Reaction, ReactionTally, Video, VideoQuery};
