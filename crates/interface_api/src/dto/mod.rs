//! Request/response bodies

pub mod operations;

pub use operations::{AckResponse, MessageResponse, OperationRequest, StageResponse};
