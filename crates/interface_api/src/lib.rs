//! HTTP API Layer
//!
//! Hosts the claims ledger behind two entry points, mirroring a chaincode
//! host: `invoke` runs any operation, `query` runs read-only ones.
//!
//! # Architecture
//!
//! - **Dispatch**: operation names and positional arguments to lifecycle calls
//! - **Handlers**: invoke, query and health endpoints
//! - **Middleware**: tracing and audit logging
//! - **Error Handling**: claim errors as `{"error", "message"}` bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::in_memory(ApiConfig::default());
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod dispatch;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::{HealthCheckable, InMemoryRecordStore, RecordStore};
use domain_claims::ClaimLifecycle;

use crate::config::ApiConfig;
use crate::dispatch::OperationRouter;
use crate::handlers::{health, operations};
use crate::middleware::audit_middleware;

pub use dispatch::{Operation, OperationOutput};
pub use error::{ApiError, ErrorResponse};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<OperationRouter>,
    pub store_health: Arc<dyn HealthCheckable>,
    pub config: ApiConfig,
}

impl AppState {
    /// Builds the state over any store that can also report its health
    pub fn new<S>(store: Arc<S>, config: ApiConfig) -> Self
    where
        S: RecordStore + HealthCheckable + 'static,
    {
        let lifecycle = ClaimLifecycle::new(store.clone());
        Self {
            router: Arc::new(OperationRouter::new(lifecycle)),
            store_health: store,
            config,
        }
    }

    /// State over a fresh in-memory store
    pub fn in_memory(config: ApiConfig) -> Self {
        Self::new(Arc::new(InMemoryRecordStore::new()), config)
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let api_routes = Router::new()
        .route("/invoke", post(operations::invoke))
        .route("/query", post(operations::query))
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
