//! Token persistence tests.

use huddle::config::TokenCache;
use tempfile::TempDir;

fn cache() -> (TempDir, TokenCache) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let cache = TokenCache::new(dir.path().join("nested").join("token"));
    (dir, cache)
}

#[test]
fn save_then_load_round_trips() {
    let (_dir, cache) = cache();
    cache.save("tok-1").unwrap();
    assert_eq!(cache.load().unwrap().as_deref(), Some("tok-1"));
}

#[test]
fn save_creates_parent_directories() {
    let (_dir, cache) = cache();
    cache.save("tok-1").unwrap();
    // A second save overwrites in place.
    cache.save("tok-2").unwrap();
    assert_eq!(cache.load().unwrap().as_deref(), Some("tok-2"));
}

#[test]
fn missing_file_loads_as_none() {
    let (_dir, cache) = cache();
    assert_eq!(cache.load().unwrap(), None);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "  tok-1\n").unwrap();
    let cache = TokenCache::new(path);
    assert_eq!(cache.load().unwrap().as_deref(), Some("tok-1"));
}

#[test]
fn blank_file_loads_as_none() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("token");
    std::fs::write(&path, "\n").unwrap();
    let cache = TokenCache::new(path);
    assert_eq!(cache.load().unwrap(), None);
}

#[test]
fn clear_is_idempotent() {
    let (_dir, cache) = cache();
    cache.save("tok-1").unwrap();
    cache.clear().unwrap();
    assert_eq!(cache.load().unwrap(), None);
    // Clearing an already-absent token is fine.
    cache.clear().unwrap();
}
