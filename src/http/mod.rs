//! HTTP layer for the demo service.
//!
//! This module wires the demo endpoints into an axum router. The layout
//! follows the usual split: route table in [`router`], one thin handler per
//! endpoint in [`handlers`], request/response payloads in [`dto`], and the
//! central error type plus its response conversion in [`error`]. The
//! validating JSON extractor in [`extract`] is what routes body failures into
//! the plain-text 422 path.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
