//! `/users` endpoints: channel profiles and subscriptions.

use lifetube_domain::{ApiRequest, ChannelProfile, User, UserId, Video};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::with_json;
use crate::error::GatewayResult;
use crate::gateway::Gateway;

#[derive(Deserialize)]
struct Profile {
    user: ChannelProfile,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeBody<'a> {
    channel_id: &'a UserId,
}

#[derive(Deserialize)]
struct Subscribed {
    #[serde(default)]
    subscribed: bool,
}

#[derive(Deserialize)]
struct Subscriptions {
    #[serde(default, alias = "channels")]
    subscriptions: Vec<User>,
}

#[derive(Deserialize)]
struct Feed {
    #[serde(default)]
    videos: Vec<Video>,
}

/// Channel pages and subscriptions.
#[derive(Debug, Clone)]
pub struct UsersApi {
    gateway: Gateway,
}

impl UsersApi {
    /// Creates the namespace.
    #[must_use]
    pub const fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /users/:id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown channels.
    pub async fn profile(&self, id: &UserId) -> GatewayResult<ChannelProfile> {
        let profile: Profile = self.gateway.send(ApiRequest::get(format!("/users/{id}"))).await?;
        Ok(profile.user)
    }

    /// `POST /users/subscribe`. Toggles the subscription and returns whether
    /// the caller is now subscribed.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn toggle_subscription(&self, channel: &UserId) -> GatewayResult<bool> {
        let request = with_json(
            ApiRequest::post("/users/subscribe"),
            &SubscribeBody {
                channel_id: channel,
            },
        )?;
        let answer: Subscribed = self.gateway.send(request).await?;
        Ok(answer.subscribed)
    }

    /// `GET /users/subscriptions/list`.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn subscriptions(&self) -> GatewayResult<Vec<User>> {
        let list: Subscriptions = self
            .gateway
            .send(ApiRequest::get("/users/subscriptions/list"))
            .await?;
        Ok(list.subscriptions)
    }

    /// `GET /users/subscriptions/feed`: recent videos from subscribed channels.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn feed(&self) -> GatewayResult<Vec<Video>> {
        let feed: Feed = self
            .gateway
            .send(ApiRequest::get("/users/subscriptions/feed"))
            .await?;
        Ok(feed.videos)
    }

    /// `GET /users/subscriptions/check/:channelId`.
    ///
    /// # Errors
    ///
    /// Returns the gateway error.
    pub async fn is_subscribed(&self, channel: &UserId) -> GatewayResult<bool> {
        let answer: Subscribed = self
            .gateway
            .send(ApiRequest::get(format!("/users/subscriptions/check/{channel}")))
            .await?;
        Ok(answer.subscribed)
    }

    /// Like [`is_subscribed`](Self::is_subscribed), but any failure reads as
    /// not subscribed.
    pub async fn is_subscribed_or_default(&self, channel: &UserId) -> bool {
        self.is_subscribed(channel).await.unwrap_or_else(|e| {
            warn!(channel = %channel, error = %e, "failed to check subscription");
            false
        })
    }
}
