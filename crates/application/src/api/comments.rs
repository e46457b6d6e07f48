//! `/comments` endpoints.

use lifetube_domain::{ApiRequest, Comment, CommentId, NewComment, VideoId};
use serde::Deserialize;

use super::with_json;
use crate::error::GatewayResult;
use crate::gateway::Gateway;

#[derive(Deserialize)]
struct CommentList {
    #[serde(default)]
    comments: Vec<Comment>,
}

#[derive(Deserialize)]
struct Posted {
    #[serde(default)]
    comment: Option<Comment>,
}

/// Comment threads under videos.
#[derive(Debug, Clone)]
pub struct CommentsApi {
    gateway: Gateway,
}

impl CommentsApi {
    /// Creates the namespace.
    #[must_use]
    pub const fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /comments/video/:videoId`.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn list(&self, video: &VideoId) -> GatewayResult<Vec<Comment>> {
        let list: CommentList = self
            .gateway
            .send(ApiRequest::get(format!("/comments/video/{video}")))
            .await?;
        Ok(list.comments)
    }

    /// `POST /comments`. Returns the created comment when the backend echoes it.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn add(&self, comment: &NewComment) -> GatewayResult<Option<Comment>> {
        let request = with_json(ApiRequest::post("/comments"), comment)?;
        let posted: Option<Posted> = self.gateway.send(request).await?;
        Ok(posted.and_then(|p| p.comment))
    }

    /// Posts a comment, then reloads the thread once the post has succeeded.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for blank text without sending anything,
    /// otherwise the first failing call's error.
    pub async fn post_and_reload(
        &self,
        video: &VideoId,
        text: &str,
    ) -> GatewayResult<Vec<Comment>> {
        let comment = NewComment::new(video.clone(), text)?;
        self.add(&comment).await?;
        self.list(video).await
    }

    /// `DELETE /comments/:id`.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for someone else's comment.
    pub async fn delete(&self, id: &CommentId) -> GatewayResult<()> {
        self.gateway
            .execute(ApiRequest::delete(format!("/comments/{id}")))
            .await
    }
}
