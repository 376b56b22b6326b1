//! Claims domain errors

use thiserror::Error;

use core_kernel::StoreError;
use crate::codec::DecodeError;

/// Errors that can occur in the claims domain
///
/// Every variant is terminal for the operation that produced it: nothing is
/// retried and no earlier write is rolled back.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Incorrect number of arguments for {operation}: expected {expected}, got {actual}")]
    InvalidArgumentCount {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid argument for {operation}: {message}")]
    InvalidArgument { operation: String, message: String },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Failed to encode {entity}: {source}")]
    Encode {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store operation on '{key}' failed: {source}")]
    Persistence {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("Record not found: {key}")]
    RecordNotFound { key: String },

    #[error("Store unavailable while reading '{key}': {source}")]
    StoreUnavailable {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("User identity authentication failed")]
    IdentityMismatch,

    #[error("{inspection} inspection failed")]
    InspectionFailed { inspection: String },

    #[error("Invalid stage transition from {from} to {to}")]
    IllegalTransition { from: String, to: String },

    #[error("Received unknown operation: {0}")]
    UnknownOperation(String),
}

impl ClaimError {
    /// Creates an InvalidArgumentCount error
    pub fn argument_count(operation: impl Into<String>, expected: usize, actual: usize) -> Self {
        ClaimError::InvalidArgumentCount {
            operation: operation.into(),
            expected,
            actual,
        }
    }

    /// Creates an InvalidArgument error
    pub fn invalid_argument(operation: impl Into<String>, message: impl Into<String>) -> Self {
        ClaimError::InvalidArgument {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Wraps a store failure from a read or write of `key`
    pub fn persistence(key: impl Into<String>, source: StoreError) -> Self {
        ClaimError::Persistence {
            key: key.into(),
            source,
        }
    }

    /// Classifies a failed raw read of `key`
    ///
    /// Only failures the store reports as transient become
    /// `StoreUnavailable`; anything else is a `Persistence` error.
    pub fn from_fetch(key: impl Into<String>, source: StoreError) -> Self {
        let key = key.into();
        if source.is_not_found() {
            ClaimError::RecordNotFound { key }
        } else if source.is_transient() {
            ClaimError::StoreUnavailable { key, source }
        } else {
            ClaimError::Persistence { key, source }
        }
    }

    /// Creates an IllegalTransition error
    pub fn illegal_transition(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        ClaimError::IllegalTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Stable name of the error kind, reported to callers alongside the message
    pub fn kind(&self) -> &'static str {
        match self {
            ClaimError::InvalidArgumentCount { .. } => "InvalidArgumentCount",
            ClaimError::InvalidArgument { .. } => "InvalidArgument",
            ClaimError::Decode(_) => "DecodeError",
            ClaimError::Encode { .. } => "EncodeError",
            ClaimError::Persistence { .. } => "PersistenceError",
            ClaimError::RecordNotFound { .. } => "RecordNotFound",
            ClaimError::StoreUnavailable { .. } => "StoreUnavailable",
            ClaimError::IdentityMismatch => "IdentityMismatch",
            ClaimError::InspectionFailed { .. } => "InspectionFailed",
            ClaimError::IllegalTransition { .. } => "IllegalTransition",
            ClaimError::UnknownOperation(_) => "UnknownOperation",
        }
    }

    /// Returns true if the requested record does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            ClaimError::RecordNotFound { .. } => true,
            ClaimError::Persistence { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// Returns true if the store failed in a way that may succeed on retry
    pub fn is_transient(&self) -> bool {
        match self {
            ClaimError::StoreUnavailable { source, .. }
            | ClaimError::Persistence { source, .. } => source.is_transient(),
            _ => false,
        }
    }
}
