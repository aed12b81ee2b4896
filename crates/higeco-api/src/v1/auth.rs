// Authentication and session lifecycle
//
// Password login with fallback to a pre-provisioned API token, and
// proactive re-login before the bearer token reaches its hard expiry.
// The portal issues a short-lived token from `api/v1/authenticate`;
// every other endpoint expects it in the `authorization` header.

use std::time::{Duration, Instant};

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::error::Error;
use crate::v1::client::HigecoClient;
use crate::v1::models::AuthResponse;

/// Tokens are invalidated portal-side two hours after issuance.
pub(crate) const TOKEN_LIFETIME: Duration = Duration::from_secs(7200);

/// Refresh threshold. Re-login once a session is this old, so the hard
/// expiry at [`TOKEN_LIFETIME`] cannot bite mid-traversal.
pub(crate) const REFRESH_AFTER: Duration = Duration::from_secs(6600);

/// Credentials for authenticating with a GET portal.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
    /// Pre-provisioned API token, tried when password login is rejected.
    pub fallback_token: Option<SecretString>,
}

/// A live bearer token plus its issuance instant.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub(crate) token: String,
    issued_at: Instant,
}

impl Session {
    pub(crate) fn new(token: String) -> Self {
        Self {
            token,
            issued_at: Instant::now(),
        }
    }

    /// Whether the token should be refreshed as of `now`.
    ///
    /// Hard-expired and about-to-expire collapse to the same decision:
    /// refresh once the age passes [`REFRESH_AFTER`].
    pub(crate) fn needs_refresh_at(&self, now: Instant) -> bool {
        let age = now.duration_since(self.issued_at);
        age > TOKEN_LIFETIME || age > REFRESH_AFTER
    }

    pub(crate) fn needs_refresh(&self) -> bool {
        self.needs_refresh_at(Instant::now())
    }
}

impl HigecoClient {
    /// Authenticate with username and password.
    ///
    /// `POST api/v1/authenticate` with `{"username", "password"}`
    pub async fn authenticate_password(&self) -> Result<(), Error> {
        let body = json!({
            "username": self.credentials().username,
            "password": self.credentials().password.expose_secret(),
        });
        self.post_authenticate(&body).await
    }

    /// Authenticate with the pre-provisioned API token.
    ///
    /// `POST api/v1/authenticate` with `{"apiToken"}`
    pub async fn authenticate_token(&self) -> Result<(), Error> {
        let Some(token) = self.credentials().fallback_token.as_ref() else {
            return Err(Error::Authentication {
                message: "no fallback API token configured".into(),
            });
        };
        let body = json!({ "apiToken": token.expose_secret() });
        self.post_authenticate(&body).await
    }

    /// Log in: password first, then the fallback API token.
    ///
    /// On success the new bearer token and its issuance instant replace
    /// the stored session. If both attempts fail the session stays
    /// cleared and an [`Error::Authentication`] is returned. No further
    /// retries.
    pub async fn login(&self) -> Result<(), Error> {
        match self.authenticate_password().await {
            Ok(()) => {
                debug!("logged in via username and password");
                Ok(())
            }
            Err(password_err) => {
                debug!(error = %password_err, "password login failed, trying fallback token");
                match self.authenticate_token().await {
                    Ok(()) => {
                        debug!("logged in via fallback API token");
                        Ok(())
                    }
                    Err(token_err) => Err(Error::Authentication {
                        message: format!("login failed ({password_err}; fallback: {token_err})"),
                    }),
                }
            }
        }
    }

    /// Re-login if the session is missing or past the refresh threshold;
    /// no-op otherwise.
    pub async fn ensure_fresh(&self) -> Result<(), Error> {
        if self.session_is_stale() {
            debug!("session stale, re-logging in");
            self.login().await?;
        }
        Ok(())
    }

    /// Shared login POST. Replaces the session on success; clears it on
    /// any failure so a stale token is never reused.
    async fn post_authenticate(&self, body: &serde_json::Value) -> Result<(), Error> {
        let url = self.api_url("authenticate");
        debug!("POST {}", url);

        match self.send_authenticate(url, body).await {
            Ok(auth) => {
                self.set_session(Session::new(auth.token));
                Ok(())
            }
            Err(e) => {
                self.clear_session();
                Err(e)
            }
        }
    }

    async fn send_authenticate(
        &self,
        url: url::Url,
        body: &serde_json::Value,
    ) -> Result<AuthResponse, Error> {
        let resp = self
            .http()
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("authenticate failed (HTTP {status}): {text}"),
            });
        }

        let text = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&text).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: text.clone(),
        })
    }
}
