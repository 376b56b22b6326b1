//! Operation DTOs

use serde::{Deserialize, Serialize};

use domain_claims::Stage;

/// Body of `POST /api/v1/invoke` and `POST /api/v1/query`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationRequest {
    /// Operation name, e.g. `submitClaim`
    pub function: String,
    /// Positional arguments
    #[serde(default)]
    pub args: Vec<String>,
}

impl OperationRequest {
    pub fn new<S: Into<String>>(function: impl Into<String>, args: impl IntoIterator<Item = S>) -> Self {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Stage returned by `currentStage` and the advancing operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StageResponse {
    pub stage: u8,
    pub name: String,
}

impl From<Stage> for StageResponse {
    fn from(stage: Stage) -> Self {
        Self {
            stage: stage.value(),
            name: stage.name().to_string(),
        }
    }
}

/// Log line returned by `verifyIdentity`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Acknowledgment for writes without payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AckResponse {
    pub status: String,
}

impl Default for AckResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
