//! Custom Test Assertions
//!
//! Assertion helpers for claim results that name the expected error kind or
//! stage in their failure messages.

use core_kernel::{InMemoryRecordStore, RecordStore, CLAIM_KEY};
use domain_claims::{Claim, ClaimError, Stage};

/// Asserts that a result failed with the given [`ClaimError::kind`]
pub fn assert_error_kind<T: std::fmt::Debug>(result: Result<T, ClaimError>, kind: &str) -> ClaimError {
    match result {
        Ok(value) => panic!("Expected {} error, got Ok({:?})", kind, value),
        Err(e) => {
            assert_eq!(e.kind(), kind, "Unexpected error: {}", e);
            e
        }
    }
}

/// Asserts that the claim stored in `store` is at `expected`
pub async fn assert_stored_stage(store: &InMemoryRecordStore, expected: Stage) {
    let bytes = store
        .get(CLAIM_KEY)
        .await
        .unwrap_or_else(|e| panic!("Expected a stored claim, got {}", e));
    let claim = Claim::from_bytes(CLAIM_KEY, &bytes)
        .unwrap_or_else(|e| panic!("Stored claim does not decode: {}", e));
    assert_eq!(
        claim.status, expected,
        "Stored claim is at {}, expected {}",
        claim.status, expected
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!("Expected Err matching {}, got Ok({:?})", stringify!($pattern), value),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ClaimFixtures;

    #[test]
    fn test_assert_error_kind_returns_error() {
        let result: Result<(), ClaimError> = Err(ClaimError::IdentityMismatch);
        let err = assert_error_kind(result, "IdentityMismatch");
        assert!(matches!(err, ClaimError::IdentityMismatch));
    }

    #[test]
    #[should_panic(expected = "Expected IllegalTransition error")]
    fn test_assert_error_kind_fails_on_ok() {
        assert_error_kind(Ok::<_, ClaimError>(1), "IllegalTransition");
    }

    #[test]
    fn test_assert_err_variant_macro() {
        let result: Result<(), ClaimError> = Err(ClaimError::UnknownOperation("x".into()));
        assert_err_variant!(result, ClaimError::UnknownOperation(_));
    }

    #[tokio::test]
    async fn test_assert_stored_stage() {
        let store = ClaimFixtures::store_at(Stage::ClaimInspection);
        assert_stored_stage(&store, Stage::ClaimInspection).await;
    }
}
