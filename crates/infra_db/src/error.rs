//! Database error types

use thiserror::Error;

use core_kernel::StoreError;

/// Errors that can occur while talking to the ledger database
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Schema creation failed
    #[error("Schema setup failed: {0}")]
    SchemaFailed(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,
}

impl DatabaseError {
    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }

    /// Converts into the store port's error, classifying retryable failures
    /// as unavailability
    pub fn into_store_error(self) -> StoreError {
        let message = self.to_string();
        let transient = self.is_connection_error();
        let source: Option<Box<dyn std::error::Error + Send + Sync>> = Some(Box::new(self));
        if transient {
            StoreError::Unavailable { message, source }
        } else {
            StoreError::Internal { message, source }
        }
    }
}

impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => DatabaseError::PoolExhausted,
            sqlx::Error::Io(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::Tls(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::Database(db_err) => DatabaseError::QueryFailed(db_err.message().to_string()),
            other => DatabaseError::QueryFailed(other.to_string()),
        }
    }
}
