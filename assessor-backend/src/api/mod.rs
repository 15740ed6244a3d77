//! API Module
//!
//! HTTP API layer for the backend.

pub mod health;

use assessor_core::HEALTH_PATH;
use axum::{Router, routing::get};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Create the main API router with all endpoints
pub fn create_router(config: &Config) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health::health_check))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the browser frontends
///
/// Credentials are allowed, so methods and headers mirror the request
/// instead of using wildcards.
fn cors_layer(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.origin_headers()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
