//! Evidence gating each forward stage transition

use crate::claim::{Claim, Stage};
use crate::error::ClaimError;
use crate::policy_holder::PolicyHolder;

/// Log value returned by a successful identity verification
pub const IDENTITY_VERIFIED: &str = "User Details Verified!";

/// Evidence presented to move a claim into the next stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inspection {
    /// Candidate identity, compared against the claim's holder
    Identity(PolicyHolder),
    /// Vehicle as presented for inspection
    Vehicle {
        vin: String,
        licence_plate_number: String,
    },
    /// Facts confirmed by the claim inspector
    ClaimFacts {
        policy_id: String,
        incident_date: String,
    },
    /// Release for payout; carries no evidence
    Settlement,
}

impl Inspection {
    /// Stage the claim enters once this inspection passes
    pub fn target_stage(&self) -> Stage {
        match self {
            Inspection::Identity(_) => Stage::IdentityInspection,
            Inspection::Vehicle { .. } => Stage::VehicleInspection,
            Inspection::ClaimFacts { .. } => Stage::ClaimInspection,
            Inspection::Settlement => Stage::Settlement,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Inspection::Identity(_) => "Identity",
            Inspection::Vehicle { .. } => "Vehicle",
            Inspection::ClaimFacts { .. } => "Claim",
            Inspection::Settlement => "Settlement",
        }
    }

    /// Compares the evidence against the stored claim
    ///
    /// Reports pass or fail only, never which attribute differed.
    pub fn check(&self, claim: &Claim) -> Result<(), ClaimError> {
        let passed = match self {
            Inspection::Identity(candidate) => {
                if !claim.holder.matches(candidate) {
                    return Err(ClaimError::IdentityMismatch);
                }
                true
            }
            Inspection::Vehicle {
                vin,
                licence_plate_number,
            } => {
                claim.holder.vin() == vin
                    && claim.holder.licence_plate_number() == licence_plate_number
            }
            Inspection::ClaimFacts {
                policy_id,
                incident_date,
            } => claim.holder.policy_id() == policy_id && claim.incident_date == *incident_date,
            Inspection::Settlement => true,
        };

        if passed {
            Ok(())
        } else {
            Err(ClaimError::InspectionFailed {
                inspection: self.name().to_string(),
            })
        }
    }
}
