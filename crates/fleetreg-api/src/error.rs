use thiserror::Error;

/// Top-level error type for the `fleetreg-api` crate.
///
/// Most variants never reach callers: the classifier routes every
/// network-shaped failure to the synthetic catalogue when offline fallback
/// is enabled. Only failures the classifier refuses to absorb (see
/// [`classify`](crate::classify::classify)) surface from the typed methods.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed in a way the registry reported explicitly.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request exceeded the executor's hard latency ceiling.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Non-2xx response from the registry service.
    #[error("Registry API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    // ── Session ─────────────────────────────────────────────────────
    /// Reading or writing the persisted session token failed.
    #[error("Session storage error: {0}")]
    SessionStore(String),

    // ── Catch-all ───────────────────────────────────────────────────
    /// An error that fits no known taxonomy. The only kind the client
    /// ever lets through to callers unconditionally.
    #[error("Unclassified error: {0}")]
    Unclassified(String),
}

impl Error {
    /// Returns `true` if this error indicates bad or expired credentials.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::Api { status: 401, .. })
    }

    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
