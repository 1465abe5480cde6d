//! Skill endpoint served over HTTP
//!
//! `POST /` takes one request envelope and answers with one response
//! envelope. Each request is an independent invocation.

use crate::intent::IntentRouter;
use crate::protocol::{RequestEnvelope, ResponseEnvelope};
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Build the endpoint router
pub fn build_router(router: Arc<IntentRouter>) -> Router {
    Router::new()
        .route("/", post(skill_handler))
        .route("/health", get(health_handler))
        .with_state(router)
}

async fn skill_handler(
    State(router): State<Arc<IntentRouter>>,
    Json(envelope): Json<RequestEnvelope>,
) -> Json<ResponseEnvelope> {
    Json(router.dispatch(&envelope).await)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
