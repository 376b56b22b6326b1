//! Tests for the claims domain model

use proptest::prelude::*;
use test_utils::{claim_strategy, holder_strategy, invalid_stage_value_strategy, stage_strategy};

use domain_claims::arguments::{expect_arity, holder_from_args, ClaimSubmission};
use domain_claims::claim::{Claim, ParseStageError, Stage};
use domain_claims::codec;
use domain_claims::error::ClaimError;
use domain_claims::inspection::Inspection;
use domain_claims::policy_holder::PolicyHolder;

fn jane_doe() -> PolicyHolder {
    PolicyHolder::new(
        "Jane", "Doe", "jane@x.com", "SSN1", "1990-01-01", "POLY1", "VIN1", "PLATE1",
    )
}

fn submission_args() -> Vec<String> {
    [
        "2023-01-05", "Jane", "Doe", "jane@x.com", "SSN1", "1990-01-01", "POLY1", "VIN1", "PLATE1",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

// ============================================================================
// Stage Tests
// ============================================================================

mod stage_tests {
    use super::*;

    #[test]
    fn test_stage_values() {
        assert_eq!(Stage::InitClaim.value(), 0);
        assert_eq!(Stage::IdentityInspection.value(), 1);
        assert_eq!(Stage::VehicleInspection.value(), 2);
        assert_eq!(Stage::ClaimInspection.value(), 3);
        assert_eq!(Stage::Settlement.value(), 4);
    }

    #[test]
    fn test_stage_order_is_monotonic() {
        let mut stage = Stage::InitClaim;
        let mut visited = vec![stage];
        while let Some(next) = stage.next() {
            assert!(next > stage);
            visited.push(next);
            stage = next;
        }
        assert_eq!(visited, Stage::ALL.to_vec());
        assert!(stage.is_terminal());
    }

    #[test]
    fn test_stage_default_is_init_claim() {
        assert_eq!(Stage::default(), Stage::InitClaim);
    }

    #[test]
    fn test_stage_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Stage::VehicleInspection).unwrap(), "2");
        assert_eq!(Stage::InitClaim.to_bytes().unwrap(), b"0".to_vec());
    }

    proptest! {
        #[test]
        fn prop_out_of_range_values_are_rejected(value in invalid_stage_value_strategy()) {
            prop_assert!(Stage::try_from(value).is_err());
            prop_assert!(value.to_string().parse::<Stage>().is_err());
        }

        #[test]
        fn prop_stage_parses_from_its_name_and_value(stage in stage_strategy()) {
            prop_assert_eq!(stage.name().parse::<Stage>().unwrap(), stage);
            prop_assert_eq!(stage.value().to_string().parse::<Stage>().unwrap(), stage);
        }
    }

    #[test]
    fn test_stage_rejects_out_of_range_integer() {
        assert!(serde_json::from_str::<Stage>("5").is_err());
        assert!(Stage::try_from(-1i64).is_err());
        assert_eq!(Stage::try_from(3u8).unwrap(), Stage::ClaimInspection);
    }

    #[test]
    fn test_stage_parses_number_or_name() {
        assert_eq!("1".parse::<Stage>().unwrap(), Stage::IdentityInspection);
        assert_eq!("SETTLEMENT".parse::<Stage>().unwrap(), Stage::Settlement);
        assert_eq!("claim_inspection".parse::<Stage>().unwrap(), Stage::ClaimInspection);
        assert!(matches!("9".parse::<Stage>(), Err(ParseStageError::OutOfRange(_))));
        assert!(matches!("PAYOUT".parse::<Stage>(), Err(ParseStageError::Unknown(_))));
    }

    #[test]
    fn test_stage_display_uses_name() {
        assert_eq!(Stage::IdentityInspection.to_string(), "IDENTITY_INSPECTION");
    }
}

// ============================================================================
// PolicyHolder Tests
// ============================================================================

mod policy_holder_tests {
    use super::*;

    #[test]
    fn test_constructor_keeps_field_order() {
        let holder = jane_doe();

        assert_eq!(holder.first_name(), "Jane");
        assert_eq!(holder.last_name(), "Doe");
        assert_eq!(holder.email(), "jane@x.com");
        assert_eq!(holder.national_id(), "SSN1");
        assert_eq!(holder.birth_date(), "1990-01-01");
        assert_eq!(holder.policy_id(), "POLY1");
        assert_eq!(holder.vin(), "VIN1");
        assert_eq!(holder.licence_plate_number(), "PLATE1");
    }

    #[test]
    fn test_matches_identical_holder() {
        assert!(jane_doe().matches(&jane_doe()));
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let other = PolicyHolder::new(
            "jane", "Doe", "jane@x.com", "SSN1", "1990-01-01", "POLY1", "VIN1", "PLATE1",
        );
        assert!(!jane_doe().matches(&other));
    }

    #[test]
    fn test_any_single_field_difference_breaks_match() {
        let base: [&str; 8] = [
            "Jane", "Doe", "jane@x.com", "SSN1", "1990-01-01", "POLY1", "VIN1", "PLATE1",
        ];
        for i in 0..8 {
            let mut fields = base.map(String::from);
            fields[i].push('!');
            let altered = PolicyHolder::from_fields(fields);
            assert!(!jane_doe().matches(&altered), "field {} was ignored", i);
        }
    }
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_tests {
    use super::*;

    #[test]
    fn test_new_claim() {
        let claim = Claim::new("", "2023-01-05", jane_doe());

        assert!(claim.id.is_empty());
        assert_eq!(claim.incident_date, "2023-01-05");
        assert_eq!(claim.status, Stage::InitClaim);
        assert_eq!(claim.holder, jane_doe());
    }

    #[test]
    fn test_advance_to_next_stage() {
        let mut claim = Claim::new("", "2023-01-05", jane_doe());

        assert!(claim.advance_to(Stage::IdentityInspection).unwrap());
        assert_eq!(claim.status, Stage::IdentityInspection);
    }

    #[test]
    fn test_advance_to_same_stage_is_noop() {
        let mut claim = Claim::new("", "2023-01-05", jane_doe());

        assert!(!claim.advance_to(Stage::InitClaim).unwrap());
        assert_eq!(claim.status, Stage::InitClaim);
    }

    #[test]
    fn test_skipping_stages_is_illegal() {
        let mut claim = Claim::new("", "2023-01-05", jane_doe());

        let result = claim.advance_to(Stage::ClaimInspection);

        assert!(matches!(result, Err(ClaimError::IllegalTransition { .. })));
        assert_eq!(claim.status, Stage::InitClaim);
    }

    #[test]
    fn test_moving_backwards_is_illegal() {
        let mut claim = Claim::new("", "2023-01-05", jane_doe());
        claim.advance_to(Stage::IdentityInspection).unwrap();
        claim.advance_to(Stage::VehicleInspection).unwrap();

        let result = claim.advance_to(Stage::IdentityInspection);

        assert!(matches!(result, Err(ClaimError::IllegalTransition { .. })));
        assert_eq!(claim.status, Stage::VehicleInspection);
    }

    #[test]
    fn test_advance_walks_every_stage() {
        let mut claim = Claim::new("", "2023-01-05", jane_doe());

        assert_eq!(claim.advance().unwrap(), Stage::IdentityInspection);
        assert_eq!(claim.advance().unwrap(), Stage::VehicleInspection);
        assert_eq!(claim.advance().unwrap(), Stage::ClaimInspection);
        assert_eq!(claim.advance().unwrap(), Stage::Settlement);
    }

    #[test]
    fn test_advance_past_settlement_is_illegal() {
        let mut claim = Claim::new("", "2023-01-05", jane_doe());
        for _ in 0..4 {
            claim.advance().unwrap();
        }

        let error = claim.advance().unwrap_err();

        assert_eq!(error.kind(), "IllegalTransition");
        assert!(error.to_string().contains("SETTLEMENT"));
    }
}

// ============================================================================
// Codec Tests
// ============================================================================

mod codec_tests {
    use super::*;

    proptest! {
        #[test]
        fn prop_claim_round_trips(claim in claim_strategy()) {
            let bytes = claim.to_bytes().unwrap();
            let decoded = Claim::from_bytes("claim", &bytes).unwrap();

            prop_assert_eq!(decoded, claim);
        }

        #[test]
        fn prop_encoding_is_deterministic(holder in holder_strategy()) {
            let first = codec::encode("holder", &holder).unwrap();
            let second = codec::encode("holder", &holder.clone()).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn test_all_empty_fields_round_trip() {
        let holder = PolicyHolder::from_fields(Default::default());
        let claim = Claim::new("", "", holder.clone());

        let decoded = Claim::from_bytes("claim", &claim.to_bytes().unwrap()).unwrap();
        let decoded_holder: PolicyHolder =
            codec::decode("holder", &codec::encode("holder", &holder).unwrap()).unwrap();

        assert_eq!(decoded, claim);
        assert_eq!(decoded_holder, holder);
    }

    #[test]
    fn test_encoding_is_field_tagged() {
        let bytes = Claim::new("", "2023-01-05", jane_doe()).to_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("\"incident_date\":\"2023-01-05\""));
        assert!(text.contains("\"licence_plate_number\":\"PLATE1\""));
        assert!(text.contains("\"status\":0"));
    }

    #[test]
    fn test_malformed_bytes_report_key() {
        let error = Claim::from_bytes("claim", b"{not json").unwrap_err();

        assert_eq!(error.key, "claim");
        assert!(error.to_string().contains("claim"));
    }

    #[test]
    fn test_missing_field_is_decode_error() {
        let error = Claim::from_bytes("claim", br#"{"id":"","incident_date":""}"#).unwrap_err();
        assert!(error.source.to_string().contains("holder"));
    }

    #[test]
    fn test_out_of_range_status_is_decode_error() {
        let mut value = serde_json::to_value(Claim::new("", "d", jane_doe())).unwrap();
        value["status"] = serde_json::json!(7);
        let bytes = serde_json::to_vec(&value).unwrap();

        let error: ClaimError = Claim::from_bytes("claim", &bytes).unwrap_err().into();

        assert_eq!(error.kind(), "DecodeError");
    }
}

// ============================================================================
// Argument Tests
// ============================================================================

mod argument_tests {
    use super::*;

    #[test]
    fn test_submission_from_nine_args() {
        let submission = ClaimSubmission::from_args(&submission_args()).unwrap();

        assert_eq!(submission.incident_date, "2023-01-05");
        assert_eq!(submission.holder, jane_doe());
    }

    #[test]
    fn test_submission_with_eight_args_fails() {
        let args = &submission_args()[..8];

        let error = ClaimSubmission::from_args(args).unwrap_err();

        assert!(matches!(
            error,
            ClaimError::InvalidArgumentCount { expected: 9, actual: 8, .. }
        ));
    }

    #[test]
    fn test_submission_with_ten_args_fails() {
        let mut args = submission_args();
        args.push("extra".to_string());

        let error = ClaimSubmission::from_args(&args).unwrap_err();

        assert_eq!(error.kind(), "InvalidArgumentCount");
    }

    #[test]
    fn test_expect_arity() {
        assert!(expect_arity("fetchClaim", &["claim"], 1).is_ok());
        assert!(expect_arity::<&str>("fetchClaim", &[], 1).is_err());
        assert!(expect_arity("fetchClaim", &["a", "b"], 1).is_err());
    }

    #[test]
    fn test_holder_from_args() {
        let args = &submission_args()[1..];
        assert_eq!(holder_from_args("verifyIdentity", args).unwrap(), jane_doe());
        assert!(holder_from_args("verifyIdentity", &args[..7]).is_err());
    }
}

// ============================================================================
// Inspection Tests
// ============================================================================

mod inspection_tests {
    use super::*;

    fn stored_claim() -> Claim {
        Claim::new("", "2023-01-05", jane_doe())
    }

    #[test]
    fn test_target_stages() {
        assert_eq!(Inspection::Identity(jane_doe()).target_stage(), Stage::IdentityInspection);
        assert_eq!(
            Inspection::Vehicle { vin: "V".into(), licence_plate_number: "P".into() }.target_stage(),
            Stage::VehicleInspection
        );
        assert_eq!(
            Inspection::ClaimFacts { policy_id: "P".into(), incident_date: "D".into() }.target_stage(),
            Stage::ClaimInspection
        );
        assert_eq!(Inspection::Settlement.target_stage(), Stage::Settlement);
    }

    #[test]
    fn test_identity_mismatch() {
        let imposter = PolicyHolder::new(
            "Jane", "Doe", "other@x.com", "SSN1", "1990-01-01", "POLY1", "VIN1", "PLATE1",
        );

        let result = Inspection::Identity(imposter).check(&stored_claim());

        assert!(matches!(result, Err(ClaimError::IdentityMismatch)));
    }

    #[test]
    fn test_vehicle_check() {
        let good = Inspection::Vehicle {
            vin: "VIN1".into(),
            licence_plate_number: "PLATE1".into(),
        };
        let bad = Inspection::Vehicle {
            vin: "VIN1".into(),
            licence_plate_number: "PLATE2".into(),
        };

        assert!(good.check(&stored_claim()).is_ok());
        assert!(matches!(
            bad.check(&stored_claim()),
            Err(ClaimError::InspectionFailed { .. })
        ));
    }

    #[test]
    fn test_claim_facts_check() {
        let good = Inspection::ClaimFacts {
            policy_id: "POLY1".into(),
            incident_date: "2023-01-05".into(),
        };
        let bad = Inspection::ClaimFacts {
            policy_id: "POLY1".into(),
            incident_date: "2023-01-06".into(),
        };

        assert!(good.check(&stored_claim()).is_ok());
        assert_eq!(bad.check(&stored_claim()).unwrap_err().to_string(), "Claim inspection failed");
    }
}
