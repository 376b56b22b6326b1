//! Tests for the in-memory record store

use core_kernel::{
    AdapterHealth, HealthCheckable, InMemoryRecordStore, RecordStore, StoreError, CLAIM_KEY,
};

#[tokio::test]
async fn test_get_missing_key_is_not_found() {
    let store = InMemoryRecordStore::new();

    let error = store.get("nonexistent").await.unwrap_err();

    assert!(error.is_not_found());
    assert!(matches!(error, StoreError::NotFound { ref key } if key == "nonexistent"));
}

#[tokio::test]
async fn test_put_then_get_returns_same_bytes() {
    let store = InMemoryRecordStore::new();

    store.put(CLAIM_KEY, b"{\"id\":\"\"}".to_vec()).await.unwrap();

    assert_eq!(store.get(CLAIM_KEY).await.unwrap(), b"{\"id\":\"\"}".to_vec());
    assert_eq!(store.write_count(), 1);
}

#[tokio::test]
async fn test_put_replaces_previous_value() {
    let store = InMemoryRecordStore::new();

    store.put("k", b"first".to_vec()).await.unwrap();
    store.put("k", b"second".to_vec()).await.unwrap();

    assert_eq!(store.get("k").await.unwrap(), b"second".to_vec());
    assert_eq!(store.snapshot().await.len(), 1);
    assert_eq!(store.write_count(), 2);
}

#[tokio::test]
async fn test_seeded_records_are_readable_and_not_counted() {
    let store = InMemoryRecordStore::with_records([("a", b"1".to_vec()), ("b", b"2".to_vec())]);

    assert!(store.contains("a").await);
    assert_eq!(store.get("b").await.unwrap(), b"2".to_vec());
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn test_unavailable_store_fails_reads_and_writes() {
    let store = InMemoryRecordStore::with_records([("a", b"1".to_vec())]);
    store.set_available(false);

    let read = store.get("a").await.unwrap_err();
    let write = store.put("a", b"2".to_vec()).await.unwrap_err();

    assert!(read.is_transient());
    assert!(write.is_transient());
    assert!(!read.is_not_found());

    store.set_available(true);
    assert_eq!(store.get("a").await.unwrap(), b"1".to_vec());
}

#[tokio::test]
async fn test_injected_write_failure_only_affects_that_key() {
    let store = InMemoryRecordStore::new();
    store.fail_writes_to("current_state").await;

    assert!(store.put("claim", b"c".to_vec()).await.is_ok());
    assert!(store.put("current_state", b"0".to_vec()).await.is_err());
    assert!(!store.contains("current_state").await);

    store.clear_write_failures().await;
    assert!(store.put("current_state", b"0".to_vec()).await.is_ok());
}

#[tokio::test]
async fn test_health_check_follows_availability() {
    let store = InMemoryRecordStore::new();
    assert_eq!(store.health_check().await.status, AdapterHealth::Healthy);

    store.set_available(false);
    let result = store.health_check().await;
    assert_eq!(result.status, AdapterHealth::Unhealthy);
    assert!(!result.is_operational());
}
