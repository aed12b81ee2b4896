// Higeco GET API HTTP client
//
// Wraps `reqwest::Client` with portal URL construction and the shared
// GET-and-parse plumbing. Endpoint groups (plants, devices, logs, items,
// data) are implemented as inherent methods via separate files to keep
// this module focused on transport mechanics.

use std::sync::RwLock;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::v1::auth::{Credentials, Session};

/// Connection settings for a [`HigecoClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Portal root, e.g. `https://acme.higeco.com`.
    pub url: Url,
    pub credentials: Credentials,
    pub transport: TransportConfig,
}

impl ClientConfig {
    /// Build a config from a portal URL string with default transport.
    pub fn new(url: &str, credentials: Credentials) -> Result<Self, Error> {
        Ok(Self {
            url: url.parse()?,
            credentials,
            transport: TransportConfig::default(),
        })
    }
}

/// HTTP client for the Higeco GET portal's `api/v1/` endpoints.
///
/// Holds the bearer token issued by `authenticate` and attaches it as the
/// `authorization` header on every data request. The token and its
/// issuance instant are replaced atomically on login -- both present or
/// both absent, never one without the other.
pub struct HigecoClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    session: RwLock<Option<Session>>,
}

impl HigecoClient {
    /// Create a new client from a [`ClientConfig`]. Does not log in --
    /// call [`login()`](Self::login) or use [`connect()`](Self::connect).
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = config.transport.build_client()?;
        Ok(Self {
            http,
            base_url: config.url,
            credentials: config.credentials,
            session: RwLock::new(None),
        })
    }

    /// Create a client and log in immediately.
    pub async fn connect(config: ClientConfig) -> Result<Self, Error> {
        let client = Self::new(config)?;
        client.login().await?;
        Ok(client)
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
            session: RwLock::new(None),
        }
    }

    /// The portal base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The underlying HTTP client (for auth flows that need direct access).
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The configured login credentials.
    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    // ── Session state ────────────────────────────────────────────────

    /// The current bearer token, if a session is established.
    pub fn token(&self) -> Option<String> {
        self.session
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.token.clone())
    }

    /// Replace the session (token + issuance instant) atomically.
    pub(crate) fn set_session(&self, session: Session) {
        *self.session.write().expect("session lock poisoned") = Some(session);
    }

    /// Drop the session so a stale token is never reused.
    pub(crate) fn clear_session(&self) {
        *self.session.write().expect("session lock poisoned") = None;
    }

    /// Whether the session is absent or past the refresh threshold.
    pub(crate) fn session_is_stale(&self) -> bool {
        self.session
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .is_none_or(Session::needs_refresh)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an `api/v1/` path: `{base}/api/v1/{path}`.
    ///
    /// Base URLs with and without a trailing slash are equivalent.
    pub(crate) fn api_url(&self, path: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/api/v1/{path}");
        Url::parse(&full).expect("invalid API URL")
    }

    // ── Request helper ───────────────────────────────────────────────

    /// Send an authorized GET request and parse the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let token = self.token().ok_or(Error::MissingToken)?;
        let resp = self
            .http
            .get(url)
            .header("authorization", token)
            .send()
            .await
            .map_err(Error::Transport)?;

        parse_response(resp).await
    }
}

/// Classify the HTTP status and parse the body as JSON.
///
/// 401 means the session expired (or the token was revoked); any other
/// non-2xx status maps to [`Error::Api`]. A 200 with a malformed body is
/// a [`Error::Deserialization`], not a panic.
async fn parse_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(Error::Authentication {
            message: "session expired or invalid credentials".into(),
        });
    }

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::api(status.as_u16(), &body));
    }

    let body = resp.text().await.map_err(Error::Transport)?;

    serde_json::from_str(&body).map_err(|e| {
        let preview = &body[..body.len().min(200)];
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body: body.clone(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base: &str) -> HigecoClient {
        HigecoClient::with_client(
            reqwest::Client::new(),
            Url::parse(base).expect("test URL"),
            Credentials {
                username: "operator".into(),
                password: "hunter2".to_string().into(),
                fallback_token: None,
            },
        )
    }

    #[test]
    fn api_url_handles_trailing_slash() {
        let with = test_client("https://portal.example.com/");
        let without = test_client("https://portal.example.com");

        assert_eq!(
            with.api_url("plants").as_str(),
            "https://portal.example.com/api/v1/plants"
        );
        assert_eq!(
            without.api_url("plants").as_str(),
            with.api_url("plants").as_str()
        );
    }

    #[test]
    fn api_url_embeds_identifiers() {
        let client = test_client("https://portal.example.com");
        let url = client.api_url(&format!("plants/{}/devices/{}/logs/{}", 42, "gwc", 3));

        assert_eq!(
            url.as_str(),
            "https://portal.example.com/api/v1/plants/42/devices/gwc/logs/3"
        );
    }
}
