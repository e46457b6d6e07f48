//! In-memory backend and token storage for scenario tests.
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lifetube_application::{
    HttpTransport, LifeTubeClient, StorageError, TokenStorage, TransportError, TransportRequest,
    TransportResponse,
};
use lifetube_domain::request::PartValue;
use lifetube_domain::{ApiBaseUrl, AuthToken, HttpMethod, Reaction, ReactionTally, RequestBody};
use serde_json::{Value, json};

const ROOT: &str = "http://localhost:5000/api";

#[derive(Clone)]
struct Account {
    id: String,
    username: String,
    password: String,
}

#[derive(Clone)]
struct StoredVideo {
    id: String,
    title: String,
    category: String,
    views: u64,
    owner: String,
}

#[derive(Clone)]
struct StoredComment {
    id: String,
    video: String,
    author: String,
    text: String,
}

#[derive(Default)]
struct State {
    accounts: Vec<Account>,
    tokens: HashMap<String, String>,
    videos: Vec<StoredVideo>,
    reactions: HashMap<(String, String), Reaction>,
    comments: Vec<StoredComment>,
    subscriptions: Vec<(String, String)>,
    next_id: usize,
}

/// A small, faithful stand-in for the REST backend.
#[derive(Default)]
pub struct FakeBackend {
    state: Mutex<State>,
    offline: AtomicBool,
    outage: Mutex<Option<(u16, String)>>,
    requests: Mutex<Vec<TransportRequest>>,
    calls: AtomicUsize,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        let backend = Self::default();
        {
            let mut state = backend.state.lock().unwrap();
            state.accounts.push(Account {
                id: "u-alice".into(),
                username: "alice".into(),
                password: "good".into(),
            });
            state.accounts.push(Account {
                id: "u-bob".into(),
                username: "bob".into(),
                password: "hunter2".into(),
            });
            for (id, title, category, views, owner) in [
                ("v1", "Guitar solo", "Music", 900, "u-alice"),
                ("v2", "Speedrun", "Gaming", 5_000, "u-bob"),
                ("v3", "Live set", "Music", 120, "u-bob"),
                ("v4", "Evening news", "News", 40, "u-alice"),
            ] {
                state.videos.push(StoredVideo {
                    id: id.into(),
                    title: title.into(),
                    category: category.into(),
                    views,
                    owner: owner.into(),
                });
            }
        }
        Arc::new(backend)
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Answers every following request with `status` and `{"error": message}`.
    pub fn fail_with(&self, status: u16, message: &str) {
        *self.outage.lock().unwrap() = Some((status, message.to_string()));
    }

    /// Revokes every issued token, as a backend restart with a new secret would.
    pub fn revoke_all_tokens(&self) {
        self.state.lock().unwrap().tokens.clear();
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn video_exists(&self, id: &str) -> bool {
        self.state.lock().unwrap().videos.iter().any(|v| v.id == id)
    }

    fn handle(&self, request: &TransportRequest) -> TransportResponse {
        let rest = request.url.strip_prefix(ROOT).expect("request outside API root");
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        let query: BTreeMap<String, String> = url_pairs(query);
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        let body = match &request.body {
            RequestBody::Json(value) => value.clone(),
            _ => Value::Null,
        };

        let mut state = self.state.lock().unwrap();
        let caller = request
            .header("Authorization")
            .and_then(|h| h.strip_prefix("Bearer "))
            .and_then(|t| state.tokens.get(t).cloned());

        match (request.method, segments.as_slice()) {
            (HttpMethod::Post, ["auth", "login"]) => {
                let account = state.accounts.iter().find(|a| {
                    a.username == body["username"].as_str().unwrap_or_default()
                        && a.password == body["password"].as_str().unwrap_or_default()
                });
                match account.cloned() {
                    Some(account) => {
                        let token = state.issue_token(&account.id);
                        ok(json!({"token": token, "user": state.user_json(&account.id)}))
                    }
                    None => error(401, "Invalid credentials"),
                }
            }
            (HttpMethod::Post, ["auth", "register"]) => {
                let username = body["username"].as_str().unwrap_or_default().to_string();
                if state.accounts.iter().any(|a| a.username == username) {
                    return error(400, "Username already exists");
                }
                let id = format!("u-{username}");
                state.accounts.push(Account {
                    id: id.clone(),
                    username,
                    password: body["password"].as_str().unwrap_or_default().to_string(),
                });
                let token = state.issue_token(&id);
                TransportResponse::json(201, &json!({"token": token, "user": state.user_json(&id)}))
            }
            (HttpMethod::Get, ["auth", "me"]) => match caller {
                Some(id) => ok(json!({"user": state.user_json(&id)})),
                None => error(401, "Invalid token"),
            },
            (HttpMethod::Get, ["videos"]) => {
                let limit = query
                    .get("limit")
                    .and_then(|l| l.parse().ok())
                    .unwrap_or(usize::MAX);
                let videos: Vec<Value> = state
                    .videos
                    .iter()
                    .filter(|v| query.get("category").is_none_or(|c| &v.category == c))
                    .filter(|v| {
                        query
                            .get("search")
                            .is_none_or(|s| v.title.to_lowercase().contains(&s.to_lowercase()))
                    })
                    .take(limit)
                    .map(|v| state.video_json(v))
                    .collect();
                ok(json!({"videos": videos}))
            }
            (HttpMethod::Get, ["videos", "trending"]) => {
                let mut sorted = state.videos.clone();
                sorted.sort_by(|a, b| b.views.cmp(&a.views));
                let videos: Vec<Value> = sorted.iter().map(|v| state.video_json(v)).collect();
                ok(json!({"videos": videos}))
            }
            (HttpMethod::Post, ["videos", "upload"]) => {
                let Some(owner) = caller else {
                    return error(401, "No token provided");
                };
                let RequestBody::Multipart(form) = &request.body else {
                    return error(400, "Expected multipart body");
                };
                let Some(PartValue::File(_)) = form.get("video") else {
                    return error(400, "No video file uploaded");
                };
                let text = |name: &str| match form.get(name) {
                    Some(PartValue::Text(t)) => t.clone(),
                    _ => String::new(),
                };
                state.next_id += 1;
                let video = StoredVideo {
                    id: format!("v-new-{}", state.next_id),
                    title: text("title"),
                    category: text("category"),
                    views: 0,
                    owner,
                };
                state.videos.push(video.clone());
                TransportResponse::json(201, &json!({"video": state.video_json(&video)}))
            }
            (HttpMethod::Get, ["videos", id]) => match state.find_video(id) {
                Some(v) => ok(json!({"video": state.video_json(&v)})),
                None => error(404, "Video not found"),
            },
            (HttpMethod::Post, ["videos", id, "view"]) => {
                match state.videos.iter_mut().find(|v| v.id == *id) {
                    Some(v) => {
                        v.views += 1;
                        ok(json!({"views": v.views}))
                    }
                    None => error(404, "Video not found"),
                }
            }
            (HttpMethod::Post, ["videos", id, "like"]) => {
                let Some(user) = caller else {
                    return error(401, "No token provided");
                };
                let submitted: Reaction = serde_json::from_value(body["type"].clone()).unwrap();
                let key = ((*id).to_string(), user);
                let next = Reaction::toggle(state.reactions.get(&key).copied(), submitted);
                match next {
                    Some(r) => state.reactions.insert(key, r),
                    None => state.reactions.remove(&key),
                };
                ok(json!({"message": "ok"}))
            }
            (HttpMethod::Delete, ["videos", id]) => {
                let Some(user) = caller else {
                    return error(401, "No token provided");
                };
                match state.find_video(id) {
                    None => error(404, "Video not found"),
                    Some(v) if v.owner != user => {
                        error(403, "Not authorized to delete this video")
                    }
                    Some(_) => {
                        state.videos.retain(|v| v.id != *id);
                        ok(json!({"message": "Video deleted"}))
                    }
                }
            }
            (HttpMethod::Get, ["comments", "video", id]) => {
                let comments: Vec<Value> = state
                    .comments
                    .iter()
                    .filter(|c| c.video == *id)
                    .map(|c| {
                        json!({"id": c.id, "text": c.text, "video_id": c.video,
                               "users": state.user_json(&c.author)})
                    })
                    .collect();
                ok(json!({"comments": comments}))
            }
            (HttpMethod::Post, ["comments"]) => {
                let Some(author) = caller else {
                    return error(401, "No token provided");
                };
                state.next_id += 1;
                let comment = StoredComment {
                    id: format!("c{}", state.next_id),
                    video: body["videoId"].as_str().unwrap_or_default().to_string(),
                    author,
                    text: body["text"].as_str().unwrap_or_default().to_string(),
                };
                state.comments.push(comment.clone());
                TransportResponse::json(
                    201,
                    &json!({"comment": {"id": comment.id, "text": comment.text}}),
                )
            }
            (HttpMethod::Delete, ["comments", id]) => {
                let Some(user) = caller else {
                    return error(401, "No token provided");
                };
                match state.comments.iter().find(|c| c.id == *id).cloned() {
                    None => error(404, "Comment not found"),
                    Some(c) if c.author != user => error(403, "Not authorized"),
                    Some(_) => {
                        state.comments.retain(|c| c.id != *id);
                        ok(json!({"message": "Comment deleted"}))
                    }
                }
            }
            (HttpMethod::Post, ["users", "subscribe"]) => {
                let Some(user) = caller else {
                    return error(401, "No token provided");
                };
                let channel = body["channelId"].as_str().unwrap_or_default().to_string();
                let pair = (user, channel);
                let subscribed = if state.subscriptions.contains(&pair) {
                    state.subscriptions.retain(|p| p != &pair);
                    false
                } else {
                    state.subscriptions.push(pair);
                    true
                };
                ok(json!({"subscribed": subscribed}))
            }
            (HttpMethod::Get, ["users", "subscriptions", "list"]) => {
                let Some(user) = caller else {
                    return error(401, "No token provided");
                };
                let channels: Vec<Value> = state
                    .subscriptions
                    .iter()
                    .filter(|(u, _)| *u == user)
                    .map(|(_, c)| state.user_json(c))
                    .collect();
                ok(json!({"subscriptions": channels}))
            }
            (HttpMethod::Get, ["users", "subscriptions", "feed"]) => {
                let Some(user) = caller else {
                    return error(401, "No token provided");
                };
                let videos: Vec<Value> = state
                    .videos
                    .iter()
                    .filter(|v| state.subscriptions.contains(&(user.clone(), v.owner.clone())))
                    .map(|v| state.video_json(v))
                    .collect();
                ok(json!({"videos": videos}))
            }
            (HttpMethod::Get, ["users", "subscriptions", "check", channel]) => {
                let Some(user) = caller else {
                    return error(401, "No token provided");
                };
                let subscribed = state
                    .subscriptions
                    .contains(&(user, (*channel).to_string()));
                ok(json!({"subscribed": subscribed}))
            }
            (HttpMethod::Get, ["users", id]) => {
                if !state.accounts.iter().any(|a| a.id == *id) {
                    return error(404, "User not found");
                }
                let mut user = state.user_json(id);
                let videos: Vec<Value> = state
                    .videos
                    .iter()
                    .filter(|v| v.owner == *id)
                    .map(|v| state.video_json(v))
                    .collect();
                user["videos"] = Value::Array(videos);
                ok(json!({"user": user}))
            }
            _ => error(404, "Route not found"),
        }
    }
}

impl State {
    fn issue_token(&mut self, user: &str) -> String {
        self.next_id += 1;
        let token = format!("tok-{user}-{}", self.next_id);
        self.tokens.insert(token.clone(), user.to_string());
        token
    }

    fn find_video(&self, id: &str) -> Option<StoredVideo> {
        self.videos.iter().find(|v| v.id == id).cloned()
    }

    fn user_json(&self, id: &str) -> Value {
        let account = self.accounts.iter().find(|a| a.id == id);
        let subscribers = self.subscriptions.iter().filter(|(_, c)| c == id).count();
        json!({
            "id": id,
            "username": account.map(|a| a.username.clone()).unwrap_or_default(),
            "avatar_url": format!("/uploads/avatars/{id}.png"),
            "subscriberCount": subscribers,
        })
    }

    fn video_json(&self, video: &StoredVideo) -> Value {
        let tally = self
            .reactions
            .iter()
            .filter(|((v, _), _)| *v == video.id)
            .fold(ReactionTally::default(), |mut tally, (_, r)| {
                match r {
                    Reaction::Like => tally.likes += 1,
                    Reaction::Dislike => tally.dislikes += 1,
                }
                tally
            });
        json!({
            "id": video.id,
            "title": video.title,
            "category": video.category,
            "views": video.views,
            "video_url": format!("/uploads/videos/{}.mp4", video.id),
            "likeCount": tally.likes,
            "dislikeCount": tally.dislikes,
            "users": self.user_json(&video.owner),
        })
    }
}

fn url_pairs(query: &str) -> BTreeMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.to_string(), v.replace('+', " ")))
        .collect()
}

fn ok(body: Value) -> TransportResponse {
    TransportResponse::json(200, &body)
}

fn error(status: u16, message: &str) -> TransportResponse {
    TransportResponse::json(status, &json!({"error": message}))
}

#[async_trait]
impl HttpTransport for FakeBackend {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if self.offline.load(Ordering::SeqCst) {
            return Err(TransportError::ConnectionFailed("connection refused".into()));
        }
        if let Some((status, message)) = self.outage.lock().unwrap().clone() {
            return Ok(error(status, &message));
        }
        Ok(self.handle(&request))
    }
}

/// Token storage kept in memory so tests can inspect and pre-seed it.
#[derive(Default)]
pub struct MemoryStorage {
    token: Mutex<Option<AuthToken>>,
}

impl MemoryStorage {
    pub fn with_token(token: &str) -> Arc<Self> {
        Arc::new(Self {
            token: Mutex::new(Some(AuthToken::new(token))),
        })
    }

    pub fn stored(&self) -> Option<String> {
        self.token.lock().unwrap().as_ref().map(|t| t.expose().to_string())
    }
}

#[async_trait]
impl TokenStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<AuthToken>, StorageError> {
        Ok(self.token.lock().unwrap().clone())
    }

    async fn save(&self, token: &AuthToken) -> Result<(), StorageError> {
        *self.token.lock().unwrap() = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

pub fn client(backend: &Arc<FakeBackend>, storage: &Arc<MemoryStorage>) -> LifeTubeClient {
    LifeTubeClient::new(backend.clone(), ApiBaseUrl::default(), storage.clone())
}
