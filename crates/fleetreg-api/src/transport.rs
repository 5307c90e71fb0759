// Shared transport configuration for building reqwest::Client instances.
//
// The latency ceiling lives here but is enforced by the request executor
// (`RegistryClient::request`) via a cancellable timer, not by reqwest's own
// timeout — an elapsed ceiling must classify as `Error::Timeout`, not as a
// transport error.

use std::time::Duration;

use crate::error::Error;

/// Hard upper bound on a single network attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Transport configuration shared by every client instance.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Hard latency ceiling per request; the in-flight call is aborted
    /// when it elapses.
    pub timeout: Duration,
    /// User-Agent header sent on every request.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("fleetreg/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .build()
            .map_err(Error::Transport)
    }
}
