//! `/videos` endpoints.

use lifetube_domain::{ApiRequest, Reaction, Video, VideoId, VideoQuery, VideoUpload};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::with_json;
use crate::error::GatewayResult;
use crate::gateway::Gateway;

/// Number of related videos shown next to the player.
pub const RELATED_LIMIT: u32 = 10;

#[derive(Deserialize)]
struct VideoList {
    #[serde(default)]
    videos: Vec<Video>,
}

#[derive(Deserialize)]
struct SingleVideo {
    video: Video,
}

#[derive(Serialize)]
struct ReactionBody {
    #[serde(rename = "type")]
    kind: Reaction,
}

/// Video listing, playback bookkeeping, reactions and uploads.
#[derive(Debug, Clone)]
pub struct VideosApi {
    gateway: Gateway,
}

impl VideosApi {
    /// Creates the namespace.
    #[must_use]
    pub const fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /videos` with optional category, search and limit filters.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn list(&self, query: &VideoQuery) -> GatewayResult<Vec<Video>> {
        let request = ApiRequest::get("/videos").query(query.to_pairs());
        let list: VideoList = self.gateway.send(request).await?;
        Ok(list.videos)
    }

    /// `GET /videos/:id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown ids.
    pub async fn get(&self, id: &VideoId) -> GatewayResult<Video> {
        let single: SingleVideo = self.gateway.send(ApiRequest::get(format!("/videos/{id}"))).await?;
        Ok(single.video)
    }

    /// `GET /videos/trending`.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn trending(&self) -> GatewayResult<Vec<Video>> {
        let list: VideoList = self.gateway.send(ApiRequest::get("/videos/trending")).await?;
        Ok(list.videos)
    }

    /// `POST /videos/upload` as multipart form data.
    ///
    /// The form is validated before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for an incomplete form, otherwise the
    /// gateway error. Use [`GatewayError::user_message`] with
    /// [`UPLOAD_FALLBACK_MESSAGE`] for display.
    ///
    /// [`GatewayError::user_message`]: crate::GatewayError::user_message
    /// [`UPLOAD_FALLBACK_MESSAGE`]: lifetube_domain::UPLOAD_FALLBACK_MESSAGE
    pub async fn upload(&self, upload: VideoUpload) -> GatewayResult<Video> {
        let form = upload.into_form()?;
        let request = ApiRequest::post("/videos/upload").multipart(form);
        let single: SingleVideo = self.gateway.send(request).await?;
        Ok(single.video)
    }

    /// `POST /videos/:id/view`.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn increment_view(&self, id: &VideoId) -> GatewayResult<()> {
        self.gateway
            .execute(ApiRequest::post(format!("/videos/{id}/view")))
            .await
    }

    /// `POST /videos/:id/like`. Submitting the held reaction again clears it;
    /// submitting the other one switches it.
    ///
    /// # Errors
    ///
    /// Returns the gateway error; `Unauthorized` when logged out.
    pub async fn react(&self, id: &VideoId, reaction: Reaction) -> GatewayResult<()> {
        let request = with_json(
            ApiRequest::post(format!("/videos/{id}/like")),
            &ReactionBody { kind: reaction },
        )?;
        self.gateway.execute(request).await
    }

    /// `DELETE /videos/:id`. Only the owner may delete; the backend enforces it.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for someone else's video.
    pub async fn delete(&self, id: &VideoId) -> GatewayResult<()> {
        self.gateway
            .execute(ApiRequest::delete(format!("/videos/{id}")))
            .await
    }

    /// Videos to suggest next to `current`. Failures yield an empty list.
    pub async fn related(&self, current: &VideoId) -> Vec<Video> {
        match self.list(&VideoQuery::new().limit(RELATED_LIMIT)).await {
            Ok(videos) => videos.into_iter().filter(|v| &v.id != current).collect(),
            Err(e) => {
                warn!(video = %current, error = %e, "failed to load related videos");
                Vec::new()
            }
        }
    }
}
