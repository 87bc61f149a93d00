//! HTTP handlers for the demo endpoints.
//!
//! Each handler is deliberately thin: it either returns a fixed success
//! payload or produces one specific failure for the error conversion and the
//! logging setup to catch. Nothing here recovers from anything.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Json;

use super::dto::{MessageResponse, ValidationDemoRequest};
use super::error::AppError;
use super::extract::ValidatedJson;
use super::state::AppState;

/// GET /
///
/// Redirect to the endpoint catalogue.
pub async fn redirect_to_docs() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/docs")])
}

/// GET /docs
///
/// Static catalogue of the demo endpoints.
pub async fn docs() -> Html<&'static str> {
    Html(include_str!("docs.html"))
}

/// GET /clickable-log
///
/// Logs one event and returns a fixed acknowledgment. The subscriber renders
/// the event's source location, so the log line is clickable in most
/// terminals and editors.
pub async fn clickable_log() -> Json<MessageResponse> {
    tracing::info!("This will show with source code location and timing");

    Json(MessageResponse {
        message: "Clickable log!".to_string(),
    })
}

/// GET /error
///
/// Fails with a generic internal error; surfaces as a 500.
pub async fn internal_error() -> Result<StatusCode, AppError> {
    Err(AppError::internal("This is a test error"))
}

/// POST /error-validation-error
///
/// Accepts the one-field demo payload. Invalid bodies never reach this
/// function; the extractor turns them into the plain-text 422.
pub async fn validation_demo(
    ValidatedJson(_body): ValidatedJson<ValidationDemoRequest>,
) -> Json<bool> {
    Json(true)
}

/// GET /error-httpx-timeout
///
/// Forwards a GET to a host that never answers; the request runs into its
/// timeout budget and the error surfaces as a 500.
pub async fn upstream_timeout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.upstream.get_unreachable().await?;
    Ok(StatusCode::OK)
}

/// GET /error-httpx-connection-refused
///
/// Forwards a GET to a local port nothing listens on; the refused connection
/// surfaces as a 500.
pub async fn upstream_connection_refused(
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.upstream.get_refused().await?;
    Ok(StatusCode::OK)
}

/// GET /error-404
///
/// Fails with a deliberate not-found error; logged at warning level and
/// rendered with the default detail body.
pub async fn not_found_error() -> Result<StatusCode, AppError> {
    Err(AppError::not_found("Not Found"))
}
