//! PostgreSQL Record Store Adapter
//!
//! Durable implementation of the `RecordStore` port. Each logical key is one
//! row of `ledger_records`; `put` is an upsert, so a single write is atomic
//! for its key and nothing more.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PostgresRecordStore};
//! use core_kernel::RecordStore;
//! use std::sync::Arc;
//!
//! let pool = create_pool(&DatabaseConfig::new(url)).await?;
//! let store = PostgresRecordStore::new(pool);
//! store.ensure_schema().await?;
//! let port: Arc<dyn RecordStore> = Arc::new(store);
//! ```

use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, instrument};

use core_kernel::{AdapterHealth, HealthCheckResult, HealthCheckable, RecordStore, StoreError};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS ledger_records (
        key TEXT PRIMARY KEY,
        value BYTEA NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const SELECT_VALUE: &str = "SELECT value FROM ledger_records WHERE key = $1";

const UPSERT_VALUE: &str = r#"
    INSERT INTO ledger_records (key, value, updated_at)
    VALUES ($1, $2, now())
    ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()
"#;

/// PostgreSQL-backed implementation of the `RecordStore` port
#[derive(Debug, Clone)]
pub struct PostgresRecordStore {
    pool: DatabasePool,
}

impl PostgresRecordStore {
    /// Creates the adapter over an existing pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Creates the `ledger_records` table if it does not exist
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::SchemaFailed(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let value: Option<Vec<u8>> = sqlx::query_scalar(SELECT_VALUE)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(e).into_store_error())?;

        value.ok_or_else(|| StoreError::not_found(key))
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        sqlx::query(UPSERT_VALUE)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(e).into_store_error())?;

        debug!("Record upserted");
        Ok(())
    }
}

#[async_trait]
impl HealthCheckable for PostgresRecordStore {
    async fn health_check(&self) -> HealthCheckResult {
        let started = Instant::now();
        let outcome = sqlx::query("SELECT 1").execute(&self.pool).await;
        let latency_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(_) => HealthCheckResult::new("postgres", AdapterHealth::Healthy, latency_ms),
            Err(e) => HealthCheckResult::new("postgres", AdapterHealth::Unhealthy, latency_ms)
                .with_message(DatabaseError::from(e).to_string()),
        }
    }
}
