//! Infrastructure Database Layer
//!
//! Durable storage for the claims ledger's world state on PostgreSQL using
//! SQLx. The crate provides a `RecordStore` adapter that the claim lifecycle
//! engine can use in place of the in-memory store.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PostgresRecordStore};
//!
//! let pool = create_pool(&DatabaseConfig::new("postgres://localhost/claims_ledger")).await?;
//! let store = PostgresRecordStore::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod record_store;

pub use error::DatabaseError;
pub use pool::{create_pool, DatabaseConfig, DatabasePool};
pub use record_store::PostgresRecordStore;
