//! Router configuration for the demo service.
//!
//! This module sets up all routes plus the request-tracing middleware and
//! creates the axum router ready for serving.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the application router with all demo routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::redirect_to_docs))
        .route("/docs", get(handlers::docs))
        .route("/clickable-log", get(handlers::clickable_log))
        .route("/error", get(handlers::internal_error))
        .route("/error-validation-error", post(handlers::validation_demo))
        .route("/error-httpx-timeout", get(handlers::upstream_timeout))
        .route(
            "/error-httpx-connection-refused",
            get(handlers::upstream_connection_refused),
        )
        .route("/error-404", get(handlers::not_found_error))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
