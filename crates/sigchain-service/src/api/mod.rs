//! API module for the signature device service

pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use handlers::AppState;

/// Generic success envelope: `{"data": ...}`
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
///
/// GET /api/v0/health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse {
        data: HealthResponse {
            status: "pass".into(),
            version: "v0".into(),
        },
    })
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health endpoint
        .route("/api/v0/health", get(health))
        // Device endpoints
        .route("/api/v0/device/new-device", post(handlers::create_device))
        .route("/api/v0/device/sign", post(handlers::sign_transaction))
        .route("/api/v0/device/", get(handlers::get_device))
        .route("/api/v0/device/all", get(handlers::list_devices))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
