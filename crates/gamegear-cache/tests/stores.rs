//! The same behavior from both store backends.

use gamegear_cache::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct SavedUser {
    id: String,
    is_admin: bool,
}

fn exercise<S: KeyValueStore>(cache: &Cache<S>) {
    assert_eq!(cache.get::<SavedUser>("user").unwrap(), None);

    let user = SavedUser {
        id: "2".to_string(),
        is_admin: false,
    };
    cache.set("user", &user).unwrap();
    assert_eq!(cache.get::<SavedUser>("user").unwrap(), Some(user));
    assert_eq!(cache.keys().unwrap(), vec!["user"]);

    cache.delete("user").unwrap();
    assert!(!cache.exists("user").unwrap());
}

#[test]
fn test_memory_backend() {
    exercise(&Cache::new(MemoryStore::new()));
}

#[test]
fn test_file_backend() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path().join("gamegear.json")).unwrap();
    exercise(&Cache::new(store));
}

#[test]
fn test_file_backend_shared() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileStore::open(dir.path().join("gamegear.json")).unwrap());
    let auth_view = Cache::new(Arc::clone(&store));
    let cart_view = Cache::new(Arc::clone(&store));

    auth_view.set("user", &"x").unwrap();
    cart_view.set("cart", &Vec::<u32>::new()).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["user"], "\"x\"");
    assert_eq!(doc["cart"], "[]");
}
