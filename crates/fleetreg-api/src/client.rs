// Unified registry HTTP client.
//
// One instance is shared by every console screen. All endpoint families
// (auth, vehicles, violations, dvla) are implemented as inherent methods in
// separate files to keep this module focused on transport mechanics:
// URL construction, bearer auth, the latency ceiling, and the
// classify-then-fallback pipeline.

use std::sync::RwLock;
use std::time::Duration;

use chrono::Utc;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::classify::{Disposition, classify};
use crate::error::Error;
use crate::portal::Portal;
use crate::synthetic;
use crate::token::{Session, SessionStore};
use crate::transport::TransportConfig;

/// Whether the configured base origin points at a deployed service or at a
/// local/undeployed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginMode {
    /// Loopback or unset origin. Every call short-circuits to the
    /// synthetic catalogue without a network attempt.
    Local,
    /// A deployed origin. Calls attempt the network first.
    Remote,
}

impl OriginMode {
    /// Detect the mode from a base origin's host.
    pub fn detect(url: &Url) -> Self {
        match url.host() {
            None => Self::Local,
            Some(url::Host::Domain(domain)) => {
                if domain.eq_ignore_ascii_case("localhost") {
                    Self::Local
                } else {
                    Self::Remote
                }
            }
            Some(url::Host::Ipv4(ip)) => {
                if ip.is_loopback() || ip.is_unspecified() {
                    Self::Local
                } else {
                    Self::Remote
                }
            }
            Some(url::Host::Ipv6(ip)) => {
                if ip.is_loopback() || ip.is_unspecified() {
                    Self::Local
                } else {
                    Self::Remote
                }
            }
        }
    }
}

/// Configuration for a [`RegistryClient`] instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base origin of the registry service.
    pub base_url: Url,
    /// Which console this instance serves.
    pub portal: Portal,
    /// Transport settings (latency ceiling, user agent).
    pub transport: TransportConfig,
    /// Serve synthetic responses for network-shaped failures. This is the
    /// availability-over-correctness mode the consoles run in; turning it
    /// off makes every failure a typed error.
    pub offline_fallback: bool,
    /// Force the origin mode instead of detecting it from `base_url`.
    /// Needed when a genuinely deployed service listens on loopback.
    pub origin: Option<OriginMode>,
}

impl ClientConfig {
    /// Config with default transport, fallback enabled, and auto-detected
    /// origin mode.
    pub fn new(base_url: Url, portal: Portal) -> Self {
        Self {
            base_url,
            portal,
            transport: TransportConfig::default(),
            offline_fallback: true,
            origin: None,
        }
    }
}

/// Unified client for the fleet-registration suite's REST service.
///
/// Every console reaches the registry through one of these. Calls either
/// return the service's parsed payload or — for any network-shaped failure
/// when `offline_fallback` is on — a synthetic stand-in for the same
/// endpoint, so screens never have to handle a connectivity exception.
///
/// That policy is deliberate and has a sharp edge: with fallback enabled, a
/// backend outage and a rejected login are both served from the catalogue
/// and are indistinguishable to the caller. Deployments that need real
/// error visibility must run with `offline_fallback: false`.
///
/// The client owns the session token. It is read before every request and
/// written only by `login`/`logout`; a `login` racing an in-flight request
/// does not re-sign that request (last-token-wins, accepted).
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: Url,
    portal: Portal,
    timeout: Duration,
    offline_fallback: bool,
    origin: OriginMode,
    session: RwLock<Option<Session>>,
    store: SessionStore,
}

impl RegistryClient {
    /// Build a client with the platform-default session store, rehydrating
    /// any persisted session.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let store = SessionStore::open_default()?;
        Self::with_session_store(config, store)
    }

    /// Build a client against an explicit session store. Used by tests and
    /// by embedders that manage their own state directory.
    pub fn with_session_store(config: ClientConfig, store: SessionStore) -> Result<Self, Error> {
        let origin = config
            .origin
            .unwrap_or_else(|| OriginMode::detect(&config.base_url));
        let http = config.transport.build_client()?;
        let session = RwLock::new(store.load());
        Ok(Self {
            http,
            base_url: config.base_url,
            portal: config.portal,
            timeout: config.transport.timeout,
            offline_fallback: config.offline_fallback,
            origin,
            session,
            store,
        })
    }

    /// The configured base origin.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The console this client serves.
    pub fn portal(&self) -> Portal {
        self.portal
    }

    /// Detected (or forced) origin mode.
    pub fn origin_mode(&self) -> OriginMode {
        self.origin
    }

    // ── Session state ────────────────────────────────────────────────

    /// `true` while a session token is held.
    pub fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }

    /// Snapshot of the current session, if any.
    pub fn session(&self) -> Option<Session> {
        self.current_session()
    }

    fn current_session(&self) -> Option<Session> {
        self.session.read().expect("session lock poisoned").clone()
    }

    /// Persist and adopt a session. Called only by `login`.
    pub(crate) fn store_session(&self, session: Session) -> Result<(), Error> {
        self.store.save(&session)?;
        *self.session.write().expect("session lock poisoned") = Some(session);
        Ok(())
    }

    /// Drop the held session and its persisted copy. Called only by
    /// `logout`.
    pub(crate) fn clear_session(&self) -> Result<(), Error> {
        self.store.clear()?;
        *self.session.write().expect("session lock poisoned") = None;
        Ok(())
    }

    // ── URL builder ──────────────────────────────────────────────────

    fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.request(Method::GET, path, None).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        let body = encode_body(body)?;
        self.request(Method::POST, path, Some(&body)).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.request(Method::POST, path, None).await
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        let body = encode_body(body)?;
        self.request(Method::PUT, path, Some(&body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.request(Method::DELETE, path, None).await
    }

    // ── Request pipeline ─────────────────────────────────────────────

    /// Execute one call and deserialize whatever comes back — the remote
    /// payload or its synthetic stand-in.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, Error> {
        let value = self.request_value(method, path, body).await?;
        let rendered = value.to_string();
        serde_json::from_value(value).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: rendered,
        })
    }

    async fn request_value(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        if self.origin == OriginMode::Local {
            debug!(path, "local origin, serving synthetic response");
            return Ok(synthetic::respond(&method, path, Utc::now()));
        }

        match self.attempt(method.clone(), path, body).await {
            Ok(value) => Ok(value),
            Err(err) => match classify(&err) {
                Disposition::Fallback(reason) if self.offline_fallback => {
                    debug!(path, ?reason, error = %err, "network-shaped failure, serving synthetic response");
                    Ok(synthetic::respond(&method, path, Utc::now()))
                }
                _ => Err(err),
            },
        }
    }

    /// One bounded network attempt: merge headers, send, read, parse.
    /// The whole exchange races the latency ceiling; on elapse the
    /// in-flight future is dropped and the call classifies as a timeout.
    async fn attempt(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, Error> {
        let url = self.endpoint_url(path)?;
        debug!(%method, %url, "sending request");

        let mut builder = self
            .http
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(session) = self.current_session() {
            builder = builder.bearer_auth(&session.token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let ceiling = self.timeout;
        let exchange = async move {
            let resp = builder.send().await.map_err(Error::Transport)?;
            let status = resp.status();
            let text = resp.text().await.map_err(Error::Transport)?;

            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(Error::Authentication {
                    message: preview(&text).to_owned(),
                });
            }
            if !status.is_success() {
                return Err(Error::Api {
                    status: status.as_u16(),
                    message: preview(&text).to_owned(),
                });
            }

            // Any JSON object is accepted; no envelope is assumed.
            serde_json::from_str(&text).map_err(|e| Error::Deserialization {
                message: format!("{e} (body preview: {:?})", preview(&text)),
                body: text.clone(),
            })
        };

        tokio::time::timeout(ceiling, exchange)
            .await
            .map_err(|_| Error::Timeout {
                timeout_secs: ceiling.as_secs(),
            })?
    }
}

fn encode_body(body: &(impl Serialize + Sync)) -> Result<Value, Error> {
    serde_json::to_value(body).map_err(|e| Error::Unclassified(format!("encoding request body: {e}")))
}

/// First 200 bytes of a body, kept on a char boundary.
fn preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::OriginMode;

    fn parse(url: &str) -> Url {
        url.parse().expect("valid url")
    }

    #[test]
    fn loopback_origins_are_local() {
        assert_eq!(OriginMode::detect(&parse("http://127.0.0.1:8000")), OriginMode::Local);
        assert_eq!(OriginMode::detect(&parse("http://localhost:3000")), OriginMode::Local);
        assert_eq!(OriginMode::detect(&parse("http://[::1]:8000")), OriginMode::Local);
        assert_eq!(OriginMode::detect(&parse("http://0.0.0.0:8000")), OriginMode::Local);
    }

    #[test]
    fn deployed_origins_are_remote() {
        assert_eq!(
            OriginMode::detect(&parse("https://registry.example.gov.uk")),
            OriginMode::Remote
        );
        assert_eq!(OriginMode::detect(&parse("http://10.1.2.3:8000")), OriginMode::Remote);
    }
}
