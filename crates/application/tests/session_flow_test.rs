//! Session lifecycle against an in-memory backend.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{FakeBackend, MemoryStorage, client};
use lifetube_application::SessionError;
use lifetube_domain::{Credentials, Registration, SessionStatus, VideoId, VideoQuery};
use pretty_assertions::assert_eq;

fn alice() -> Credentials {
    Credentials::new("alice", "good")
}

#[tokio::test]
async fn test_login_stores_token_and_authenticates() {
    let backend = FakeBackend::new();
    let storage = std::sync::Arc::new(MemoryStorage::default());
    let client = client(&backend, &storage);

    let session = client.session().login(&alice()).await.unwrap();

    assert!(client.session().is_authenticated());
    assert_eq!(session.user().unwrap().username, "alice");
    let stored = storage.stored().expect("token persisted");
    assert_eq!(Some(stored.as_str()), session.token().map(|t| t.expose()));
}

#[tokio::test]
async fn test_wrong_password_leaves_session_untouched() {
    let backend = FakeBackend::new();
    let storage = std::sync::Arc::new(MemoryStorage::default());
    let client = client(&backend, &storage);
    client.session().login(&alice()).await.unwrap();
    let before = client.session().session();

    let err = client
        .session()
        .login(&Credentials::new("alice", "bad"))
        .await
        .unwrap_err();

    match err {
        SessionError::Rejected { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(client.session().session(), before);
    assert!(storage.stored().is_some());
}

#[tokio::test]
async fn test_register_duplicate_username_reports_backend_message() {
    let backend = FakeBackend::new();
    let storage = std::sync::Arc::new(MemoryStorage::default());
    let client = client(&backend, &storage);

    let err = client
        .session()
        .register(&Registration::new("bob", "bob@example.com", "pw"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Username already exists");
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_auth_failures_keep_backend_text_for_any_status() {
    let backend = FakeBackend::new();
    let storage = std::sync::Arc::new(MemoryStorage::default());
    let client = client(&backend, &storage);

    backend.fail_with(409, "Username already exists");
    let err = client
        .session()
        .register(&Registration::new("carol", "carol@example.com", "pw"))
        .await
        .unwrap_err();
    match err {
        SessionError::Rejected { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Username already exists");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    backend.fail_with(500, "Server error during login");
    let err = client.session().login(&alice()).await.unwrap_err();
    match err {
        SessionError::Rejected { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Server error during login");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    backend.fail_with(422, "Missing email");
    let err = client
        .session()
        .register(&Registration::new("dave", "", "pw"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Missing email");
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_register_logs_in() {
    let backend = FakeBackend::new();
    let storage = std::sync::Arc::new(MemoryStorage::default());
    let client = client(&backend, &storage);

    client
        .session()
        .register(&Registration::new("carol", "carol@example.com", "pw"))
        .await
        .unwrap();

    assert_eq!(client.session().current_user().unwrap().username, "carol");
    assert!(storage.stored().is_some());
}

#[tokio::test]
async fn test_restore_yields_same_user_as_login() {
    let backend = FakeBackend::new();
    let storage = std::sync::Arc::new(MemoryStorage::default());
    let first = client(&backend, &storage);
    let logged_in = first.session().login(&alice()).await.unwrap();

    let second = client(&backend, &storage);
    let status = second.session().restore().await.unwrap();

    assert_eq!(status, SessionStatus::Authenticated(logged_in.user().unwrap().clone()));
    assert_eq!(second.session().session(), logged_in);
}

#[tokio::test]
async fn test_restore_without_token_is_anonymous_and_silent() {
    let backend = FakeBackend::new();
    let storage = std::sync::Arc::new(MemoryStorage::default());
    let client = client(&backend, &storage);

    let status = client.session().restore().await.unwrap();

    assert_eq!(status, SessionStatus::Anonymous);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_restore_with_revoked_token_clears_everything() {
    let backend = FakeBackend::new();
    let storage = MemoryStorage::with_token("tok-stale");
    let client = client(&backend, &storage);

    let err = client.session().restore().await.unwrap_err();

    assert!(matches!(err, SessionError::Rejected { status: 401, .. }));
    assert_eq!(client.session().status(), SessionStatus::Anonymous);
    assert_eq!(storage.stored(), None);
}

#[tokio::test]
async fn test_restore_while_offline_reports_network() {
    let backend = FakeBackend::new();
    let storage = MemoryStorage::with_token("tok-any");
    let client = client(&backend, &storage);
    backend.set_offline(true);

    let err = client.session().restore().await.unwrap_err();

    assert!(matches!(err, SessionError::NetworkUnavailable(_)));
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_restore_passes_through_restoring() {
    let backend = FakeBackend::new();
    let storage = std::sync::Arc::new(MemoryStorage::default());
    client(&backend, &storage).session().login(&alice()).await.unwrap();

    let client = client(&backend, &storage);
    let mut updates = client.session().subscribe();
    let restore = tokio::spawn({
        let session = client.session().clone();
        async move { session.restore().await }
    });

    updates.changed().await.unwrap();
    let first = updates.borrow_and_update().status();
    restore.await.unwrap().unwrap();

    assert!(matches!(
        first,
        SessionStatus::Restoring | SessionStatus::Authenticated(_)
    ));
    assert!(!client.session().status().is_loading());
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn test_login_while_offline_is_network_unavailable() {
    let backend = FakeBackend::new();
    let storage = std::sync::Arc::new(MemoryStorage::default());
    let client = client(&backend, &storage);
    backend.set_offline(true);

    let err = client.session().login(&alice()).await.unwrap_err();

    assert!(matches!(err, SessionError::NetworkUnavailable(_)));
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_expired_token_on_request_clears_session() {
    let backend = FakeBackend::new();
    let storage = std::sync::Arc::new(MemoryStorage::default());
    let client = client(&backend, &storage);
    client.session().login(&alice()).await.unwrap();
    backend.revoke_all_tokens();

    let err = client
        .videos()
        .delete(&VideoId::parse("v1").unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(!client.session().is_authenticated());
    assert_eq!(storage.stored(), None);
    assert!(backend.video_exists("v1"));
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let backend = FakeBackend::new();
    let storage = std::sync::Arc::new(MemoryStorage::default());
    let client = client(&backend, &storage);
    client.session().login(&alice()).await.unwrap();

    client.session().logout().await.unwrap();
    let after_first = client.session().session();
    client.session().logout().await.unwrap();

    assert_eq!(client.session().session(), after_first);
    assert_eq!(client.session().status(), SessionStatus::Anonymous);
    assert_eq!(storage.stored(), None);
}

#[tokio::test]
async fn test_bearer_header_follows_session() {
    let backend = FakeBackend::new();
    let storage = std::sync::Arc::new(MemoryStorage::default());
    let client = client(&backend, &storage);

    client.videos().list(&VideoQuery::default()).await.unwrap();
    client.session().login(&alice()).await.unwrap();
    client.videos().trending().await.unwrap();
    client.session().logout().await.unwrap();
    client.videos().trending().await.unwrap();

    let auth: Vec<bool> = backend
        .requests()
        .iter()
        .map(|r| r.header("Authorization").is_some())
        .collect();
    assert_eq!(auth, vec![false, false, true, false]);

    let token_header = backend.requests()[2].header("Authorization").unwrap().to_string();
    assert!(token_header.starts_with("Bearer tok-u-alice-"));
}
