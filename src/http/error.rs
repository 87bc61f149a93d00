//! Central error type and response conversion.
//!
//! [`AppError`]'s [`IntoResponse`] impl is the process-wide hook that turns
//! every handler error into an HTTP response, and it is where the demo's two
//! special cases live: validation failures are reformatted into a plain-text
//! 422 and logged at warning level without a backtrace; deliberate
//! HTTP-status errors are logged at warning level with their display and then
//! rendered the default way (status plus a JSON `detail` body). Everything
//! else — the internal-error route and the failing upstream calls — surfaces
//! as a 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Application error type for HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body failed deserialization or a field constraint.
    #[error("invalid request body for {path}")]
    Validation { path: String, issues: Vec<String> },
    /// Deliberate HTTP-status error with a detail message.
    #[error("{status}: {detail}")]
    Status { status: StatusCode, detail: String },
    /// Generic internal failure.
    #[error("{0}")]
    Internal(String),
    /// Outbound demo call failed (timeout, refused connection, ...).
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        AppError::Status {
            status: StatusCode::NOT_FOUND,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { path, issues } => {
                tracing::warn!(%path, "request validation failed: {}", issues.join("; "));

                let mut body = format!("invalid request body for {path}");
                for issue in &issues {
                    body.push('\n');
                    body.push_str(issue);
                }
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            AppError::Status { status, detail } => {
                tracing::warn!(status = status.as_u16(), "http error: {detail}");
                (status, Json(json!({ "detail": detail }))).into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": msg })),
                )
                    .into_response()
            }
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "upstream request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
