// Authentication endpoints.
//
// `login` is the only domain method that mutates client state: on success
// (remote or synthetic) it persists the returned token plus a role marker.
// `logout` is its inverse and always leaves the client anonymous, even when
// the remote call fails.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::RegistryClient;
use crate::error::Error;
use crate::models::{ActionOutcome, LoginResponse};
use crate::token::Session;

impl RegistryClient {
    /// Authenticate against this client's portal.
    ///
    /// `POST {portal}/auth/login`. The returned token is adopted and
    /// persisted; subsequent requests carry it as a bearer credential.
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<LoginResponse, Error> {
        let path = self.portal().login_path();
        debug!(username, portal = self.portal().as_str(), "logging in");

        let body = json!({
            "username": username,
            "password": password.expose_secret(),
        });
        let resp: LoginResponse = self.post(&path, &body).await?;

        let role = resp
            .role
            .clone()
            .unwrap_or_else(|| self.portal().role().to_owned());
        self.store_session(Session {
            token: resp.token.clone(),
            role,
        })?;

        debug!("login successful");
        Ok(resp)
    }

    /// End the current session.
    ///
    /// `POST {portal}/auth/logout`. The held token is dropped regardless of
    /// what the remote side says — a failed logout call must not leave the
    /// client authenticated.
    pub async fn logout(&self) -> Result<(), Error> {
        let path = self.portal().logout_path();
        debug!(portal = self.portal().as_str(), "logging out");

        let outcome: Result<ActionOutcome, Error> = self.post_empty(&path).await;
        self.clear_session()?;
        outcome?;

        debug!("logout complete");
        Ok(())
    }

    /// Register a new account on this client's portal.
    ///
    /// `POST {portal}/auth/register`. Does not log the new account in.
    pub async fn register(
        &self,
        username: &str,
        password: &SecretString,
        full_name: &str,
    ) -> Result<ActionOutcome, Error> {
        let path = self.portal().register_path();
        debug!(username, portal = self.portal().as_str(), "registering account");

        let body = json!({
            "username": username,
            "password": password.expose_secret(),
            "full_name": full_name,
        });
        self.post(&path, &body).await
    }
}
