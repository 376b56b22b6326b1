//! Invoke and query handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::dispatch::OperationOutput;
use crate::dto::{AckResponse, MessageResponse, OperationRequest, StageResponse};
use crate::error::ApiError;
use crate::AppState;

/// Runs any ledger operation
pub async fn invoke(
    State(state): State<AppState>,
    body: Result<Json<OperationRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = body?;
    let output = state.router.invoke(&request.function, &request.args).await?;
    Ok(render(output))
}

/// Runs a read-only ledger operation
pub async fn query(
    State(state): State<AppState>,
    body: Result<Json<OperationRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = body?;
    let output = state.router.query(&request.function, &request.args).await?;
    Ok(render(output))
}

fn render(output: OperationOutput) -> Response {
    match output {
        OperationOutput::Ack => Json(AckResponse::default()).into_response(),
        OperationOutput::Record(bytes) => {
            ([(header::CONTENT_TYPE, "application/octet-stream")], bytes).into_response()
        }
        OperationOutput::Stage(stage) => Json(StageResponse::from(stage)).into_response(),
        OperationOutput::Log(message) => Json(MessageResponse { message }).into_response(),
    }
}
