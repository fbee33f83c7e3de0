//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_api;

use std::path::PathBuf;
use std::sync::Arc;

use huddle::api::ApiClient;
use huddle::config::{ServerConfig, TokenCache};
use huddle::store::{SessionStore, UsersStore};
use tempfile::TempDir;

/// Build an API client pointed at a mock server.
pub fn make_api(base_url: &str) -> Arc<ApiClient> {
    let config = ServerConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    Arc::new(ApiClient::new(&config).expect("Failed to build API client"))
}

/// Token cache in a temp dir. Keep the `TempDir` alive for the test.
pub fn temp_token_cache() -> (TempDir, TokenCache, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("token");
    (temp_dir, TokenCache::new(path.clone()), path)
}

/// Session store over a fresh API client and temp token cache.
pub fn make_session(base_url: &str) -> (SessionStore, TempDir, PathBuf) {
    let api = make_api(base_url);
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("token");
    let store = SessionStore::new(api, TokenCache::new(path.clone()));
    (store, temp_dir, path)
}

/// Users store over a fresh API client.
pub fn make_users(base_url: &str) -> UsersStore {
    UsersStore::new(make_api(base_url))
}
