//! Users store tests: merge semantics and record-only error handling.

mod common;

use common::make_users;
use common::mock_api::{MockApi, MockResponse};

use huddle::api::UserPatch;

const TWO_USERS: &str = r#"[
    { "id": 1, "name": "Ada", "email": "ada@example.com" },
    { "id": 2, "name": "Bob", "email": "bob@example.com" }
]"#;

#[tokio::test]
async fn load_replaces_the_collection() {
    let server = MockApi::start().await;
    server.enqueue_response(MockResponse::json(TWO_USERS)).await;

    let store = make_users(&server.base_url());
    store.load().await;

    let slice = store.snapshot();
    assert_eq!(slice.users.len(), 2);
    assert_eq!(slice.users[0].name, "Ada");
    assert_eq!(slice.users[1].name, "Bob");
    assert!(!slice.loading);
    assert!(slice.error.is_none());

    let requests = server.captured_requests().await;
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/users");
}

#[tokio::test]
async fn add_appends_the_created_record() {
    let server = MockApi::start().await;
    server.enqueue_response(MockResponse::json(TWO_USERS)).await;
    server
        .enqueue_response(MockResponse::json(
            r#"{ "id": 3, "name": "Eve", "email": "eve@example.com" }"#,
        ))
        .await;

    let store = make_users(&server.base_url());
    store.load().await;
    store.add("Eve", "eve@example.com", "secret").await;

    let slice = store.snapshot();
    assert_eq!(slice.users.len(), 3);
    assert_eq!(slice.users[2].name, "Eve");

    let requests = server.captured_requests().await;
    assert_eq!(requests[1].method, "POST");
    assert_eq!(requests[1].path, "/api/users");
}

#[tokio::test]
async fn edit_replaces_only_the_matching_record() {
    let server = MockApi::start().await;
    server.enqueue_response(MockResponse::json(TWO_USERS)).await;
    server
        .enqueue_response(MockResponse::json(
            r#"{ "id": 1, "name": "Ada L.", "email": "ada@example.com" }"#,
        ))
        .await;

    let store = make_users(&server.base_url());
    store.load().await;
    store.edit(1, UserPatch::default().name("Ada L.")).await;

    let slice = store.snapshot();
    assert_eq!(slice.users[0].name, "Ada L.");
    assert_eq!(slice.users[1].name, "Bob");

    let requests = server.captured_requests().await;
    assert_eq!(requests[1].method, "PUT");
    assert_eq!(requests[1].path, "/api/users/1");
    let body: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert_eq!(body, serde_json::json!({ "name": "Ada L." }));
}

#[tokio::test]
async fn edit_with_unknown_id_leaves_collection_unchanged() {
    let server = MockApi::start().await;
    server.enqueue_response(MockResponse::json(TWO_USERS)).await;
    server
        .enqueue_response(MockResponse::json(
            r#"{ "id": 99, "name": "Ghost", "email": "ghost@example.com" }"#,
        ))
        .await;

    let store = make_users(&server.base_url());
    store.load().await;
    let before = store.snapshot().users;
    store.edit(99, UserPatch::default().name("Ghost")).await;

    let slice = store.snapshot();
    assert_eq!(slice.users, before);
    assert!(slice.error.is_none());
}

#[tokio::test]
async fn remove_drops_only_the_matching_record() {
    let server = MockApi::start().await;
    server.enqueue_response(MockResponse::json(TWO_USERS)).await;
    server.enqueue_response(MockResponse::json("{}")).await;

    let store = make_users(&server.base_url());
    store.load().await;
    store.remove(1).await;

    let slice = store.snapshot();
    assert_eq!(slice.users.len(), 1);
    assert_eq!(slice.users[0].name, "Bob");

    let requests = server.captured_requests().await;
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].path, "/api/users/1");
}

#[tokio::test]
async fn remove_with_unknown_id_leaves_collection_unchanged() {
    let server = MockApi::start().await;
    server.enqueue_response(MockResponse::json(TWO_USERS)).await;
    server.enqueue_response(MockResponse::json("{}")).await;

    let store = make_users(&server.base_url());
    store.load().await;
    store.remove(99).await;

    let slice = store.snapshot();
    assert_eq!(slice.users.len(), 2);
    assert!(slice.error.is_none());
}

#[tokio::test]
async fn failures_are_recorded_without_clearing_the_collection() {
    let server = MockApi::start().await;
    server.enqueue_response(MockResponse::json(TWO_USERS)).await;
    server
        .enqueue_response(MockResponse::error(404, "user not found"))
        .await;

    let store = make_users(&server.base_url());
    store.load().await;
    store.remove(1).await;

    let slice = store.snapshot();
    assert_eq!(slice.users.len(), 2);
    assert!(!slice.loading);
    assert_eq!(slice.error.as_deref(), Some("user not found"));
}

#[tokio::test]
async fn load_failure_without_body_uses_fallback_message() {
    let server = MockApi::start().await;
    server.enqueue_response(MockResponse::bare_error(503)).await;

    let store = make_users(&server.base_url());
    store.load().await;

    let slice = store.snapshot();
    assert!(slice.users.is_empty());
    assert_eq!(slice.error.as_deref(), Some("Unable to load users"));
}

#[tokio::test]
async fn a_fresh_action_clears_the_previous_error() {
    let server = MockApi::start().await;
    server.enqueue_response(MockResponse::bare_error(503)).await;
    server.enqueue_response(MockResponse::json(TWO_USERS)).await;

    let store = make_users(&server.base_url());
    store.load().await;
    assert!(store.snapshot().error.is_some());

    store.load().await;
    let slice = store.snapshot();
    assert!(slice.error.is_none());
    assert_eq!(slice.users.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn stale_load_completions_are_discarded() {
    let server = MockApi::start().await;
    // The first load is answered slowly, the second immediately.
    server
        .enqueue_response(
            MockResponse::json(r#"[{ "id": 1, "name": "Old", "email": "old@example.com" }]"#)
                .with_delay(200),
        )
        .await;
    server
        .enqueue_response(MockResponse::json(
            r#"[{ "id": 2, "name": "New", "email": "new@example.com" }]"#,
        ))
        .await;

    let store = make_users(&server.base_url());
    let slow = {
        let store = store.clone();
        tokio::spawn(async move { store.load().await })
    };
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    store.load().await;

    slow.await.unwrap();

    // The slow response arrived last but belongs to a superseded
    // request; the collection keeps the newer result.
    let slice = store.snapshot();
    assert_eq!(slice.users.len(), 1);
    assert_eq!(slice.users[0].name, "New");
    assert!(!slice.loading);
}
