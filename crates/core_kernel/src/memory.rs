//! In-memory record store
//!
//! A process-local stand-in for the ledger's world state. It backs the
//! development server and the test suites, and can simulate an outage or a
//! failing key so error paths are reachable without a real ledger.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StoreError;
use crate::ports::{AdapterHealth, HealthCheckResult, HealthCheckable, RecordStore};

/// `RecordStore` backed by a `HashMap`
#[derive(Debug)]
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<String, Vec<u8>>>,
    failing_writes: RwLock<HashSet<String>>,
    available: AtomicBool,
    writes: AtomicU64,
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRecordStore {
    /// Creates an empty, available store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            failing_writes: RwLock::new(HashSet::new()),
            available: AtomicBool::new(true),
            writes: AtomicU64::new(0),
        }
    }

    /// Creates a store pre-populated with records
    ///
    /// Seeding does not count towards [`write_count`](Self::write_count).
    pub fn with_records<K, V>(records: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Vec<u8>>,
    {
        let seeded = records
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            records: RwLock::new(seeded),
            ..Self::new()
        }
    }

    /// Marks the store reachable or unreachable
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Makes every subsequent `put` on `key` fail with `Unavailable`
    pub async fn fail_writes_to(&self, key: impl Into<String>) {
        self.failing_writes.write().await.insert(key.into());
    }

    /// Clears injected write failures
    pub async fn clear_write_failures(&self) {
        self.failing_writes.write().await.clear();
    }

    /// Number of acknowledged writes since creation
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    /// Returns true if a value is stored under `key`
    pub async fn contains(&self, key: &str) -> bool {
        self.records.read().await.contains_key(key)
    }

    /// Returns a copy of every stored record
    pub async fn snapshot(&self) -> HashMap<String, Vec<u8>> {
        self.records.read().await.clone()
    }

    fn ensure_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::unavailable("in-memory store is offline"))
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        self.ensure_available()?;
        self.records
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::not_found(key))
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.ensure_available()?;
        if self.failing_writes.read().await.contains(key) {
            return Err(StoreError::unavailable(format!("write to '{}' rejected", key)));
        }

        debug!(key, bytes = value.len(), "Storing record");
        self.records.write().await.insert(key.to_string(), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl HealthCheckable for InMemoryRecordStore {
    async fn health_check(&self) -> HealthCheckResult {
        if self.available.load(Ordering::SeqCst) {
            HealthCheckResult::new("in_memory", AdapterHealth::Healthy, 0)
        } else {
            HealthCheckResult::new("in_memory", AdapterHealth::Unhealthy, 0)
                .with_message("store marked unavailable")
        }
    }
}
