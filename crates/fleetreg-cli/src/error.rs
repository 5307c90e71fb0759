//! CLI error types with miette diagnostics.
//!
//! Maps `fleetreg_api::Error` and `ConfigError` variants into user-facing
//! errors with actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use fleetreg_config::ConfigError;

/// Exit codes per the CLI spec.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the registry service at {url}")]
    #[diagnostic(
        code(fleetreg::connection_failed),
        help(
            "Check that the service is running and FLEETREG_BASE_URL points at it.\n\
             Offline fallback is disabled for this invocation; drop\n\
             --no-offline-fallback to work against the built-in dataset."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(fleetreg::timeout),
        help("Increase the ceiling with --timeout or check service responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(fleetreg::auth_failed),
        help("Verify the username and password for the configured portal.")
    )]
    AuthFailed { message: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("Registry error (HTTP {status}): {message}")]
    #[diagnostic(code(fleetreg::api_error))]
    Api { status: u16, message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(fleetreg::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(code(fleetreg::config))]
    Config(Box<figment::Error>),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(fleetreg::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(fleetreg::json))]
    Json(#[from] serde_json::Error),

    // ── Catch-all ────────────────────────────────────────────────────

    #[error("Unexpected error: {message}")]
    #[diagnostic(code(fleetreg::unexpected))]
    Unexpected { message: String },
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── API error → CliError mapping ─────────────────────────────────────

impl From<fleetreg_api::Error> for CliError {
    fn from(err: fleetreg_api::Error) -> Self {
        match err {
            fleetreg_api::Error::Authentication { message } => CliError::AuthFailed { message },

            fleetreg_api::Error::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },

            fleetreg_api::Error::Transport(ref e) => CliError::ConnectionFailed {
                url: e
                    .url()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "<unknown>".into()),
                reason: e.to_string(),
            },

            fleetreg_api::Error::InvalidUrl(e) => CliError::Validation {
                field: "server".into(),
                reason: e.to_string(),
            },

            fleetreg_api::Error::Api { status, message } => CliError::Api { status, message },

            fleetreg_api::Error::Deserialization { message, body: _ }
            | fleetreg_api::Error::SessionStore(message)
            | fleetreg_api::Error::Unclassified(message) => CliError::Unexpected { message },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Io(e) => CliError::Io(e),
            ConfigError::Serialization(e) => CliError::Unexpected {
                message: e.to_string(),
            },
        }
    }
}
