//! Application state for the HTTP server.

use crate::upstream::UpstreamClient;

/// Shared application state passed to all handlers.
///
/// The only shared resource is the outbound client; cloning is cheap since
/// reqwest clients are reference-counted internally.
#[derive(Clone, Default)]
pub struct AppState {
    /// Outbound client used by the failure-demo endpoints.
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Create a new application state with the given upstream client.
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }
}
