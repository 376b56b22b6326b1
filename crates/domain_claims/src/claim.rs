//! Claim aggregate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codec::{self, DecodeError};
use crate::error::ClaimError;
use crate::policy_holder::PolicyHolder;

/// Processing stage of a claim, stored as its integer value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Stage {
    /// Claim submitted, nothing verified yet
    #[default]
    InitClaim = 0,
    /// Policyholder identity verified
    IdentityInspection = 1,
    /// Vehicle, VIN and plate verified
    VehicleInspection = 2,
    /// Claim facts verified
    ClaimInspection = 3,
    /// Payout stage
    Settlement = 4,
}

impl Stage {
    /// All stages in processing order
    pub const ALL: [Stage; 5] = [
        Stage::InitClaim,
        Stage::IdentityInspection,
        Stage::VehicleInspection,
        Stage::ClaimInspection,
        Stage::Settlement,
    ];

    /// The stage that follows this one, if any
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::InitClaim => Some(Stage::IdentityInspection),
            Stage::IdentityInspection => Some(Stage::VehicleInspection),
            Stage::VehicleInspection => Some(Stage::ClaimInspection),
            Stage::ClaimInspection => Some(Stage::Settlement),
            Stage::Settlement => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Stage::Settlement
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::InitClaim => "INIT_CLAIM",
            Stage::IdentityInspection => "IDENTITY_INSPECTION",
            Stage::VehicleInspection => "VEHICLE_INSPECTION",
            Stage::ClaimInspection => "CLAIM_INSPECTION",
            Stage::Settlement => "SETTLEMENT",
        }
    }

    /// Serialized form, as exposed under the current-stage key
    pub fn to_bytes(self) -> Result<Vec<u8>, ClaimError> {
        codec::encode("stage", &self)
    }
}

/// An integer outside the range of [`Stage`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stage value {0}")]
pub struct InvalidStage(pub i64);

impl TryFrom<u8> for Stage {
    type Error = InvalidStage;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Stage::try_from(i64::from(value))
    }
}

impl TryFrom<i64> for Stage {
    type Error = InvalidStage;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Stage::ALL
            .into_iter()
            .find(|stage| i64::from(stage.value()) == value)
            .ok_or(InvalidStage(value))
    }
}

impl From<Stage> for u8 {
    fn from(stage: Stage) -> u8 {
        stage.value()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse failure for a stage given by name or number
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseStageError {
    #[error(transparent)]
    OutOfRange(#[from] InvalidStage),
    #[error("unknown stage '{0}'")]
    Unknown(String),
}

impl FromStr for Stage {
    type Err = ParseStageError;

    /// Accepts the integer value ("2") or the name ("VEHICLE_INSPECTION")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Stage::try_from(value)?);
        }
        Stage::ALL
            .into_iter()
            .find(|stage| stage.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseStageError::Unknown(trimmed.to_string()))
    }
}

/// A car-insurance claim together with its policyholder
///
/// The whole claim is one stored record; every change rewrites all of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Identifier, assigned outside the claims core; empty until then
    pub id: String,
    /// Date of the incident, opaque
    pub incident_date: String,
    /// Insured individual, owned by this claim
    pub holder: PolicyHolder,
    /// Current processing stage
    pub status: Stage,
}

impl Claim {
    /// Creates a claim at the default stage
    pub fn new(id: impl Into<String>, incident_date: impl Into<String>, holder: PolicyHolder) -> Self {
        Self {
            id: id.into(),
            incident_date: incident_date.into(),
            holder,
            status: Stage::default(),
        }
    }

    /// Moves the claim to `target`
    ///
    /// Returns `Ok(false)` when the claim is already at `target`, and
    /// `Ok(true)` when it moved one stage forward.
    ///
    /// # Errors
    ///
    /// `ClaimError::IllegalTransition` for any move other than a single step
    /// forward.
    pub fn advance_to(&mut self, target: Stage) -> Result<bool, ClaimError> {
        if self.status == target {
            return Ok(false);
        }
        if !self.can_transition_to(target) {
            return Err(ClaimError::illegal_transition(self.status, target));
        }
        self.status = target;
        Ok(true)
    }

    /// Moves the claim to the next stage and returns it
    pub fn advance(&mut self) -> Result<Stage, ClaimError> {
        let target = self
            .status
            .next()
            .ok_or_else(|| ClaimError::illegal_transition(self.status, "beyond SETTLEMENT"))?;
        self.advance_to(target)?;
        Ok(target)
    }

    /// Serialized form, as stored under the claim key
    pub fn to_bytes(&self) -> Result<Vec<u8>, ClaimError> {
        codec::encode("claim", self)
    }

    /// Parses a claim read from `key`
    pub fn from_bytes(key: &str, bytes: &[u8]) -> Result<Self, DecodeError> {
        codec::decode(key, bytes)
    }

    fn can_transition_to(&self, target: Stage) -> bool {
        self.status.next() == Some(target)
    }
}
