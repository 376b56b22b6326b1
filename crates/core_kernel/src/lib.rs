//! Core Kernel - Foundational abstractions for the claims ledger
//!
//! This crate provides the building blocks shared by every other crate:
//! - The `RecordStore` port through which the claims core reads and writes
//!   the ledger's key-value world state
//! - Store errors that keep "key absent" apart from "store unavailable"
//! - The logical keys of the claim namespace
//! - An in-memory store for development and tests

pub mod error;
pub mod keys;
pub mod memory;
pub mod ports;

pub use error::StoreError;
pub use keys::{CLAIM_KEY, CURRENT_STATE_KEY};
pub use memory::InMemoryRecordStore;
pub use ports::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, RecordStore};
