//! Property-Based Test Generators
//!
//! Proptest strategies for claim data.

use proptest::prelude::*;

use domain_claims::{Claim, PolicyHolder, Stage};

/// Strategy for any stage
pub fn stage_strategy() -> impl Strategy<Value = Stage> {
    prop::sample::select(Stage::ALL.to_vec())
}

/// Strategy for a free-text field, empty strings included
pub fn field_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), ".{0,24}"]
}

/// Strategy for policyholders with arbitrary field values
pub fn holder_strategy() -> impl Strategy<Value = PolicyHolder> {
    prop::array::uniform8(field_strategy()).prop_map(PolicyHolder::from_fields)
}

/// Strategy for claims at any stage
pub fn claim_strategy() -> impl Strategy<Value = Claim> {
    (field_strategy(), field_strategy(), holder_strategy(), stage_strategy()).prop_map(
        |(id, date, holder, stage)| {
            let mut claim = Claim::new(id, date, holder);
            claim.status = stage;
            claim
        },
    )
}

/// Strategy for stage values outside the valid range
pub fn invalid_stage_value_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![i64::MIN..0i64, 5i64..i64::MAX]
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_claims_roundtrip(claim in claim_strategy()) {
            let bytes = claim.to_bytes().unwrap();
            prop_assert_eq!(Claim::from_bytes("claim", &bytes).unwrap(), claim);
        }

        #[test]
        fn invalid_values_are_not_stages(value in invalid_stage_value_strategy()) {
            prop_assert!(Stage::try_from(value).is_err());
        }
    }
}
