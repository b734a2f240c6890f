//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `AppCore` facade.

use axum::Router;
use axum::routing::{any, get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build the calculator and usage routes.
///
/// Returns a router typed as `Router<AppState>` WITHOUT `.with_state()`
/// applied; the caller provides the state.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Arithmetic API: any method, the body decides
        .route("/add", any(handlers::calculate::add))
        .route("/subtract", any(handlers::calculate::subtract))
        .route("/multiply", any(handlers::calculate::multiply))
        .route("/divide", any(handlers::calculate::divide))
        .route("/modulus", any(handlers::calculate::modulus))
        // Usage API
        .route("/chart", get(handlers::chart::render))
        .route("/usage", get(handlers::usage::summary))
}

/// Create the main Axum router with all routes.
///
/// Unknown paths fall through to Axum's default 404.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes().with_state(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
