//! Positional string arguments of ledger operations

use crate::error::ClaimError;
use crate::policy_holder::PolicyHolder;

/// Fails with `InvalidArgumentCount` unless exactly `expected` arguments were given
pub fn expect_arity<S: AsRef<str>>(
    operation: &str,
    args: &[S],
    expected: usize,
) -> Result<(), ClaimError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ClaimError::argument_count(operation, expected, args.len()))
    }
}

/// Reads a policyholder from exactly eight ordered arguments
pub fn holder_from_args<S: AsRef<str>>(
    operation: &str,
    args: &[S],
) -> Result<PolicyHolder, ClaimError> {
    expect_arity(operation, args, PolicyHolder::FIELD_COUNT)?;
    Ok(PolicyHolder::from_fields(owned_fields(args)))
}

/// A claim submission decoded from its arguments
///
/// Argument order: incidentDate, firstName, lastName, email, nationalId,
/// birthDate, policyId, vin, plate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSubmission {
    pub incident_date: String,
    pub holder: PolicyHolder,
}

impl ClaimSubmission {
    pub const OPERATION: &'static str = "submitClaim";
    pub const ARITY: usize = 1 + PolicyHolder::FIELD_COUNT;

    pub fn new(incident_date: impl Into<String>, holder: PolicyHolder) -> Self {
        Self {
            incident_date: incident_date.into(),
            holder,
        }
    }

    /// Decodes a submission from exactly nine arguments
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ClaimError> {
        expect_arity(Self::OPERATION, args, Self::ARITY)?;
        let holder = holder_from_args(Self::OPERATION, &args[1..])?;
        Ok(Self::new(args[0].as_ref(), holder))
    }
}

fn owned_fields<S: AsRef<str>>(args: &[S]) -> [String; 8] {
    std::array::from_fn(|i| args[i].as_ref().to_string())
}
