//! Route definitions.

use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// CORS is wide open (the form may be hosted elsewhere); credentials are not
/// allowed, which a wildcard origin would forbid anyway.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/generateLicense", post(handlers::generate_license))
        .route("/healthz", get(handlers::healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
