//! Claims Management Domain
//!
//! This crate implements the car-insurance claim lifecycle recorded against
//! the ledger's key-value world state.
//!
//! # Claim Lifecycle
//!
//! ```text
//! INIT_CLAIM -> IDENTITY_INSPECTION -> VEHICLE_INSPECTION -> CLAIM_INSPECTION -> SETTLEMENT
//! ```
//!
//! Each arrow is a single forward step, gated by the matching
//! [`Inspection`] passing.

pub mod arguments;
pub mod claim;
pub mod codec;
pub mod error;
pub mod inspection;
pub mod lifecycle;
pub mod policy_holder;

pub use arguments::{expect_arity, holder_from_args, ClaimSubmission};
pub use claim::{Claim, InvalidStage, ParseStageError, Stage};
pub use codec::DecodeError;
pub use error::ClaimError;
pub use inspection::{Inspection, IDENTITY_VERIFIED};
pub use lifecycle::ClaimLifecycle;
pub use policy_holder::PolicyHolder;
