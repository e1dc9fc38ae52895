//! Integration tests for fskv
//!
//! End-to-end flows through `create_store` with the default collaborators.

use fskv::{create_store, FileStore, KeyValueStore, StoreOptions};
use tempfile::TempDir;

fn store_at(temp_dir: &TempDir, name: &str) -> FileStore {
    create_store(StoreOptions {
        storage_path: Some(temp_dir.path().join(name)),
        ..Default::default()
    })
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[tokio::test]
async fn test_user_record_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_at(&temp_dir, "store1");
    let record = "{\"name\":\"Ana\"}";

    store.set_item("user:1", record).await.unwrap();
    assert_eq!(store.get_item("user:1").await.unwrap(), record);
    assert_eq!(store.get_all_keys().await.unwrap(), vec!["user:1".to_string()]);

    store.clear().await.unwrap();
    assert!(store.get_all_keys().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = store_at(&temp_dir, "persist");
        store.set_item("a", "1").await.unwrap();
        store.set_item("b/c", "2").await.unwrap();
        store.set_item("日本語", "3").await.unwrap();
    }

    let store = store_at(&temp_dir, "persist");
    let mut keys = store.get_all_keys().await.unwrap();
    keys.sort();

    assert_eq!(keys, vec!["a", "b/c", "日本語"]);
    assert_eq!(store.get_item("日本語").await.unwrap(), "3");
}

#[tokio::test]
async fn test_separate_roots_are_isolated() {
    let temp_dir = TempDir::new().unwrap();
    let first = store_at(&temp_dir, "first");
    let second = store_at(&temp_dir, "second");

    first.set_item("shared", "one").await.unwrap();
    second.set_item("shared", "two").await.unwrap();
    first.clear().await.unwrap();

    assert!(first.try_get_item("shared").await.unwrap().is_none());
    assert_eq!(second.get_item("shared").await.unwrap(), "two");
}

#[tokio::test]
async fn test_store_usable_after_clear() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_at(&temp_dir, "reuse");

    store.set_item("x", "1").await.unwrap();
    store.clear().await.unwrap();
    store.set_item("y", "2").await.unwrap();

    assert_eq!(store.get_all_keys().await.unwrap(), vec!["y".to_string()]);
}
