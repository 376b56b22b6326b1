//! Byte encoding of domain records
//!
//! Records are stored as field-tagged JSON. Struct fields serialize in
//! declaration order, so encoding the same value always yields the same bytes.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::error::ClaimError;

/// Stored bytes could not be parsed into the expected record
#[derive(Debug, Error)]
#[error("Failed to decode record stored under '{key}': {source}")]
pub struct DecodeError {
    /// Logical key the bytes were read from
    pub key: String,
    #[source]
    pub source: serde_json::Error,
}

/// Serializes a record to its stored byte form
pub fn encode<T: Serialize>(entity: &'static str, value: &T) -> Result<Vec<u8>, ClaimError> {
    serde_json::to_vec(value).map_err(|source| ClaimError::Encode { entity, source })
}

/// Parses bytes read from `key`
pub fn decode<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(bytes).map_err(|source| DecodeError {
        key: key.to_string(),
        source,
    })
}
