//! Operation dispatch
//!
//! Routes a named ledger operation with positional string arguments to the
//! claim lifecycle engine. `invoke` accepts every operation; `query` accepts
//! only the read-only ones. Stages only move forward through the inspection
//! operations, each of which checks its evidence first.
//!
//! | operation | args |
//! |---|---|
//! | `init` | policyVersionTag |
//! | `submitClaim` | incidentDate, firstName, lastName, email, nationalId, birthDate, policyId, vin, plate |
//! | `fetchClaim` | key |
//! | `currentStage` | - |
//! | `verifyIdentity` | the eight holder fields |
//! | `inspectIdentity` | the eight holder fields |
//! | `inspectVehicle` | vin, plate |
//! | `inspectClaim` | policyId, incidentDate |
//! | `settleClaim` | - |

use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

use domain_claims::{
    expect_arity, holder_from_args, ClaimError, ClaimLifecycle, ClaimSubmission, Inspection,
    Stage,
};

/// Operations exposed to the hosting entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Init,
    SubmitClaim,
    FetchClaim,
    CurrentStage,
    VerifyIdentity,
    InspectIdentity,
    InspectVehicle,
    InspectClaim,
    SettleClaim,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Init => "init",
            Operation::SubmitClaim => "submitClaim",
            Operation::FetchClaim => "fetchClaim",
            Operation::CurrentStage => "currentStage",
            Operation::VerifyIdentity => "verifyIdentity",
            Operation::InspectIdentity => "inspectIdentity",
            Operation::InspectVehicle => "inspectVehicle",
            Operation::InspectClaim => "inspectClaim",
            Operation::SettleClaim => "settleClaim",
        }
    }

    /// True for operations that never write to the store
    pub fn is_read_only(self) -> bool {
        matches!(self, Operation::FetchClaim | Operation::CurrentStage)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ClaimError;

    /// Also accepts the legacy chaincode function names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" => Ok(Operation::Init),
            "submitClaim" | "createClaim" => Ok(Operation::SubmitClaim),
            "fetchClaim" | "getClaim" => Ok(Operation::FetchClaim),
            "currentStage" | "getClaimStatus" => Ok(Operation::CurrentStage),
            "verifyIdentity" | "verifyUserIdentity" => Ok(Operation::VerifyIdentity),
            "inspectIdentity" => Ok(Operation::InspectIdentity),
            "inspectVehicle" => Ok(Operation::InspectVehicle),
            "inspectClaim" => Ok(Operation::InspectClaim),
            "settleClaim" => Ok(Operation::SettleClaim),
            other => Err(ClaimError::UnknownOperation(other.to_string())),
        }
    }
}

/// Successful result of an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutput {
    /// Acknowledgment without payload
    Ack,
    /// Raw record bytes
    Record(Vec<u8>),
    /// Claim stage
    Stage(Stage),
    /// Log line from a verification
    Log(String),
}

/// Routes operations to a [`ClaimLifecycle`]
#[derive(Debug, Clone)]
pub struct OperationRouter {
    lifecycle: ClaimLifecycle,
}

impl OperationRouter {
    pub fn new(lifecycle: ClaimLifecycle) -> Self {
        Self { lifecycle }
    }

    /// Runs any operation
    pub async fn invoke(&self, function: &str, args: &[String]) -> Result<OperationOutput, ClaimError> {
        let operation: Operation = function.parse()?;
        self.execute(operation, args).await
    }

    /// Runs a read-only operation; write operations are unknown here
    pub async fn query(&self, function: &str, args: &[String]) -> Result<OperationOutput, ClaimError> {
        let operation: Operation = function.parse()?;
        if !operation.is_read_only() {
            return Err(ClaimError::UnknownOperation(function.to_string()));
        }
        self.execute(operation, args).await
    }

    #[instrument(skip(self, args), fields(args = args.len()))]
    async fn execute(&self, operation: Operation, args: &[String]) -> Result<OperationOutput, ClaimError> {
        let name = operation.name();
        debug!("Dispatching operation");

        match operation {
            Operation::Init => {
                self.lifecycle.init(args).await?;
                Ok(OperationOutput::Ack)
            }
            Operation::SubmitClaim => {
                let submission = ClaimSubmission::from_args(args)?;
                self.lifecycle.submit_claim(submission).await?;
                Ok(OperationOutput::Ack)
            }
            Operation::FetchClaim => {
                expect_arity(name, args, 1)?;
                let bytes = self.lifecycle.fetch_claim(&args[0]).await?;
                Ok(OperationOutput::Record(bytes))
            }
            Operation::CurrentStage => {
                expect_arity(name, args, 0)?;
                Ok(OperationOutput::Stage(self.lifecycle.current_stage().await?))
            }
            Operation::VerifyIdentity => {
                let candidate = holder_from_args(name, args)?;
                let log = self.lifecycle.verify_identity(&candidate).await?;
                Ok(OperationOutput::Log(log))
            }
            Operation::InspectIdentity => {
                let candidate = holder_from_args(name, args)?;
                self.inspect(Inspection::Identity(candidate)).await
            }
            Operation::InspectVehicle => {
                expect_arity(name, args, 2)?;
                self.inspect(Inspection::Vehicle {
                    vin: args[0].clone(),
                    licence_plate_number: args[1].clone(),
                })
                .await
            }
            Operation::InspectClaim => {
                expect_arity(name, args, 2)?;
                self.inspect(Inspection::ClaimFacts {
                    policy_id: args[0].clone(),
                    incident_date: args[1].clone(),
                })
                .await
            }
            Operation::SettleClaim => {
                expect_arity(name, args, 0)?;
                self.inspect(Inspection::Settlement).await
            }
        }
    }

    async fn inspect(&self, inspection: Inspection) -> Result<OperationOutput, ClaimError> {
        let stage = self.lifecycle.pass_inspection(&inspection).await?;
        Ok(OperationOutput::Stage(stage))
    }
}
