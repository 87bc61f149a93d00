//! Outbound HTTP client for the failure-demo endpoints.
//!
//! Two endpoints forward a GET to an address chosen to fail: one to a host
//! that never answers (the request runs into its timeout), one to a local
//! port nothing listens on (the connection is refused). The targets and the
//! timeout budget live here so tests can point them at controlled sockets.

use std::time::Duration;

use reqwest::Client;

/// Host that does not answer; requests run into the timeout budget.
const UNREACHABLE_URL: &str = "http://12312312/";
/// Local port with no listener behind it; connections are refused outright.
const REFUSED_URL: &str = "http://localhost:11111/";
/// Per-request budget for the demo calls.
const TIMEOUT: Duration = Duration::from_secs(1);

/// Targets and timeout for the outbound demo calls.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Total per-request budget, connect time included.
    pub timeout: Duration,
    /// Target for the timeout demonstration.
    pub unreachable_url: String,
    /// Target for the connection-refused demonstration.
    pub refused_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            timeout: TIMEOUT,
            unreachable_url: UNREACHABLE_URL.to_string(),
            refused_url: REFUSED_URL.to_string(),
        }
    }
}

/// Thin wrapper around [`reqwest::Client`] that applies the demo
/// configuration to every request.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// GET the unreachable target; expected to fail with a timeout error.
    pub async fn get_unreachable(&self) -> Result<reqwest::Response, reqwest::Error> {
        self.get(&self.config.unreachable_url).await
    }

    /// GET the refused target; expected to fail with a connect error.
    pub async fn get_refused(&self) -> Result<reqwest::Response, reqwest::Error> {
        self.get(&self.config.refused_url).await
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, reqwest::Error> {
        self.client
            .get(url)
            .timeout(self.config.timeout)
            .send()
            .await
    }
}

impl Default for UpstreamClient {
    fn default() -> Self {
        Self::new(UpstreamConfig::default())
    }
}
