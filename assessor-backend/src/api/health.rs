//! Health Check API Handler
//!
//! Reports that the backend is up. Used by the frontends to show backend status.

use assessor_core::dto::health::HealthResponse;
use axum::Json;

/// GET /api/v1/health
/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    tracing::debug!("health check requested");
    Json(HealthResponse::ok())
}
