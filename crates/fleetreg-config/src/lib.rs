//! Shared configuration for the fleetreg consoles and CLI.
//!
//! One TOML file plus `FLEETREG_`-prefixed environment variables, merged
//! through figment and translated to `fleetreg_api::ClientConfig`. The base
//! origin defaults to local loopback, which the client detects and serves
//! synthetically — a fresh checkout works with no config and no backend.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fleetreg_api::{ClientConfig, OriginMode, Portal, TransportConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Top-level configuration shared by every console binary.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Registry service base origin.
    pub base_url: String,

    /// Which console this installation runs as:
    /// "admin", "police", "dvla", or "supervisor".
    pub portal: String,

    /// Per-request latency ceiling in seconds.
    pub timeout: u64,

    /// Serve synthetic data for network-shaped failures.
    pub offline_fallback: bool,

    /// Force origin detection: "local" or "remote". Unset means detect
    /// from the base origin's host.
    pub origin: Option<String>,

    /// Presentation defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".into(),
            portal: "admin".into(),
            timeout: 5,
            offline_fallback: true,
            origin: None,
            defaults: Defaults::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("uk", "fleetreg", "fleetreg").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("fleetreg");
    p
}

// ── Config loading / saving ─────────────────────────────────────────

/// Load the full Config from defaults + file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("FLEETREG_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, falling back to defaults on any error.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Translation to the API client ───────────────────────────────────

impl Config {
    /// Build a `fleetreg_api::ClientConfig` from this configuration.
    pub fn to_client_config(&self) -> Result<ClientConfig, ConfigError> {
        let base_url: url::Url = self.base_url.parse().map_err(|_| ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("invalid URL: {}", self.base_url),
        })?;

        let portal = Portal::from_str(&self.portal).map_err(|reason| ConfigError::Validation {
            field: "portal".into(),
            reason,
        })?;

        let origin = match self.origin.as_deref() {
            None | Some("auto") => None,
            Some("local") => Some(OriginMode::Local),
            Some("remote") => Some(OriginMode::Remote),
            Some(other) => {
                return Err(ConfigError::Validation {
                    field: "origin".into(),
                    reason: format!("expected 'auto', 'local', or 'remote', got '{other}'"),
                });
            }
        };

        Ok(ClientConfig {
            base_url,
            portal,
            transport: TransportConfig {
                timeout: Duration::from_secs(self.timeout),
                ..TransportConfig::default()
            },
            offline_fallback: self.offline_fallback,
            origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use fleetreg_api::Portal;
    use pretty_assertions::assert_eq;

    use super::Config;

    #[test]
    fn default_config_targets_local_loopback() {
        let cfg = Config::default();
        let client_cfg = cfg.to_client_config().expect("valid default config");

        assert_eq!(client_cfg.base_url.as_str(), "http://127.0.0.1:8000/");
        assert_eq!(client_cfg.portal, Portal::Admin);
        assert_eq!(client_cfg.transport.timeout.as_secs(), 5);
        assert!(client_cfg.offline_fallback);
        assert_eq!(client_cfg.origin, None);
    }

    #[test]
    fn invalid_portal_is_a_validation_error() {
        let cfg = Config {
            portal: "warden".into(),
            ..Config::default()
        };
        let err = cfg.to_client_config().expect_err("must reject");
        assert!(err.to_string().contains("portal"));
    }

    #[test]
    fn invalid_base_url_is_a_validation_error() {
        let cfg = Config {
            base_url: "not a url".into(),
            ..Config::default()
        };
        let err = cfg.to_client_config().expect_err("must reject");
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn origin_override_parses() {
        let cfg = Config {
            origin: Some("remote".into()),
            ..Config::default()
        };
        let client_cfg = cfg.to_client_config().expect("valid");
        assert_eq!(client_cfg.origin, Some(fleetreg_api::OriginMode::Remote));

        let bad = Config {
            origin: Some("elsewhere".into()),
            ..Config::default()
        };
        assert!(bad.to_client_config().is_err());
    }
}
