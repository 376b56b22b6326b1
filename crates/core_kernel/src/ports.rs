//! Ports and Adapters Infrastructure
//!
//! The claims core depends on exactly one outside system: the ledger's
//! key-value world state. This module defines that port and the health-check
//! types adapters report through.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Claim Lifecycle Engine                      │
//! │                    (domain_claims)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    RecordStore port                          │
//! │              get(key) / put(key, bytes)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                    ▲                         ▲
//!                    │                         │
//!         ┌─────────┴─────────┐     ┌────────┴────────┐
//!         │  InMemoryRecord   │     │ PostgresRecord   │
//!         │      Store        │     │  Store (infra_db)│
//!         └───────────────────┘     └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use core_kernel::{RecordStore, InMemoryRecordStore, CLAIM_KEY};
//! use std::sync::Arc;
//!
//! let store: Arc<dyn RecordStore> = Arc::new(InMemoryRecordStore::new());
//! store.put(CLAIM_KEY, bytes).await?;
//! let stored = store.get(CLAIM_KEY).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Marker trait for all domain ports
///
/// All port traits extend this marker so they are thread-safe and usable
/// from async contexts.
pub trait DomainPort: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> DomainPort for T {}

/// Key-value persistence consumed by the claims core
///
/// Implementations must be strongly consistent per key and durable once a
/// `put` is acknowledged. Nothing is promised across keys, so a sequence of
/// calls is never atomic as a whole.
#[async_trait]
pub trait RecordStore: DomainPort {
    /// Reads the bytes stored under `key`
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if the key is absent, `StoreError::Unavailable`
    /// if the store cannot be reached.
    async fn get(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Writes `value` under `key`, replacing any previous value
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;
}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is degraded but operational
    Degraded,
    /// Adapter is unhealthy and not operational
    Unhealthy,
    /// Health status is unknown
    Unknown,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthCheckResult {
    /// Creates a result stamped with the current time
    pub fn new(adapter_id: impl Into<String>, status: AdapterHealth, latency_ms: u64) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status,
            latency_ms,
            message: None,
            checked_at: chrono::Utc::now(),
        }
    }

    /// Attaches a message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns true if the adapter can serve requests
    pub fn is_operational(&self) -> bool {
        matches!(self.status, AdapterHealth::Healthy | AdapterHealth::Degraded)
    }
}

/// Trait for adapters that support health checks
#[async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}
