//! # faultbox
//!
//! A deliberately faulty HTTP service for exercising logging and
//! error-reporting setups. Every endpoint either succeeds trivially or fails
//! in one specific, reproducible way: schema validation, internal errors,
//! upstream timeouts, refused connections, and explicit 404s.
//!
//! There is no business logic here on purpose. The interesting pieces are the
//! central error conversion (which reformats validation failures and logs
//! HTTP-status errors before rendering them) and the subscriber setup that
//! puts source locations on every log line.
//!
//! ## Architecture
//!
//! - [`http`]: axum router, handlers, DTOs, and the central error conversion
//! - [`upstream`]: outbound HTTP client used by the failure-demo endpoints
//! - [`logging`]: tracing subscriber setup with source locations enabled

pub mod http;
pub mod logging;
pub mod upstream;
