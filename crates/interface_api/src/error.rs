//! API error handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use domain_claims::ClaimError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failure reported by the claims engine
    #[error(transparent)]
    Claim(#[from] ClaimError),

    /// Request body is not a valid operation request
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error kind, e.g. `IllegalTransition`
    pub error: String,
    pub message: String,
}

impl ApiError {
    /// Status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Claim(err) => match err {
                ClaimError::InvalidArgumentCount { .. }
                | ClaimError::InvalidArgument { .. }
                | ClaimError::UnknownOperation(_) => StatusCode::BAD_REQUEST,
                ClaimError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
                ClaimError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
                ClaimError::IdentityMismatch | ClaimError::InspectionFailed { .. } => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                ClaimError::IllegalTransition { .. } => StatusCode::CONFLICT,
                ClaimError::Decode(_) | ClaimError::Encode { .. } | ClaimError::Persistence { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// Stable error kind for the response body
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BadRequest",
            ApiError::Claim(err) => err.kind(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, kind = self.kind(), "Operation failed");
        }

        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
