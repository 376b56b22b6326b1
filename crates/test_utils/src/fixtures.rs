//! Pre-built Test Fixtures
//!
//! Consistent claim data for unit and API tests. The canonical holder is
//! "Jane Doe" with policy `POL-123`.

use std::sync::Arc;

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

use core_kernel::{InMemoryRecordStore, CLAIM_KEY};
use domain_claims::{Claim, PolicyHolder, Stage};

/// Incident date used by the canonical claim
pub const INCIDENT_DATE: &str = "2024-03-01";

/// Fixture for policyholder test data
pub struct HolderFixtures;

impl HolderFixtures {
    /// The eight holder fields in argument order
    pub fn jane_doe_fields() -> [String; 8] {
        [
            "Jane",
            "Doe",
            "jane@x.io",
            "ID-9",
            "1990-01-01",
            "POL-123",
            "VIN-1",
            "AB-12",
        ]
        .map(String::from)
    }

    /// The canonical holder
    pub fn jane_doe() -> PolicyHolder {
        PolicyHolder::from_fields(Self::jane_doe_fields())
    }

    /// A holder with random personal details and fixed policy data
    pub fn random() -> PolicyHolder {
        let first: String = FirstName().fake();
        let last: String = LastName().fake();
        let email: String = SafeEmail().fake();
        let national_id = format!("ID-{}", (1000..9999).fake::<u32>());
        PolicyHolder::new(first, last, email, national_id, "1985-07-14", "POL-777", "VIN-R", "RR-77")
    }
}

/// Fixture for operation arguments
pub struct ArgumentFixtures;

impl ArgumentFixtures {
    /// The nine `submitClaim` arguments for the canonical claim
    pub fn submit_claim() -> Vec<String> {
        std::iter::once(INCIDENT_DATE.to_string())
            .chain(HolderFixtures::jane_doe_fields())
            .collect()
    }

    /// The eight identity arguments for the canonical holder
    pub fn identity() -> Vec<String> {
        HolderFixtures::jane_doe_fields().to_vec()
    }
}

/// Fixture for claims and seeded stores
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// The canonical claim at `stage`
    pub fn claim_at(stage: Stage) -> Claim {
        let mut claim = Claim::new("", INCIDENT_DATE, HolderFixtures::jane_doe());
        claim.status = stage;
        claim
    }

    /// An in-memory store holding the canonical claim at `stage`
    pub fn store_at(stage: Stage) -> Arc<InMemoryRecordStore> {
        let bytes = Self::claim_at(stage)
            .to_bytes()
            .expect("fixture claim should encode");
        Arc::new(InMemoryRecordStore::with_records([(CLAIM_KEY, bytes)]))
    }

    /// An in-memory store with a claim key holding bytes that are not a claim
    pub fn corrupt_store() -> Arc<InMemoryRecordStore> {
        Arc::new(InMemoryRecordStore::with_records([(CLAIM_KEY, b"{not json".to_vec())]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_arguments_lead_with_incident_date() {
        let args = ArgumentFixtures::submit_claim();
        assert_eq!(args.len(), 9);
        assert_eq!(args[0], INCIDENT_DATE);
        assert_eq!(args[1], "Jane");
    }

    #[test]
    fn test_random_holder_keeps_policy_data() {
        let holder = HolderFixtures::random();
        assert_eq!(holder.policy_id(), "POL-777");
        assert!(holder.email().contains('@'));
    }

    #[tokio::test]
    async fn test_store_at_seeds_claim_key() {
        let store = ClaimFixtures::store_at(Stage::VehicleInspection);
        assert!(store.contains(CLAIM_KEY).await);
        assert_eq!(store.write_count(), 0);
    }
}
