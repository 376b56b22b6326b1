//! Record store error types

use thiserror::Error;

/// Errors reported by a [`RecordStore`](crate::ports::RecordStore) adapter
///
/// Absence of a key and unavailability of the store are distinct variants so
/// callers can decide whether a retry makes sense.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record is stored under the key
    #[error("Key not found: {key}")]
    NotFound {
        key: String,
    },

    /// The store could not be reached or refused to serve the request
    #[error("Store unavailable: {message}")]
    Unavailable {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The store failed in a way a retry will not fix
    #[error("Store internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StoreError {
    /// Creates a NotFound error
    pub fn not_found(key: impl Into<String>) -> Self {
        StoreError::NotFound { key: key.into() }
    }

    /// Creates an Unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        StoreError::Unavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        StoreError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if the key was absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Returns true if the failure may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Unavailable { .. })
    }
}
