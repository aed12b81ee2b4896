use thiserror::Error;

/// Top-level error type for the `higeco-api` crate.
///
/// Covers every failure mode across the client: authentication, transport,
/// HTTP status failures from data endpoints, and payload parsing. Callers
/// can tell "not found" apart from "server down" or "session expired".
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login rejected, or a data call answered 401 (session expired).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// A data call was attempted before any session was established.
    #[error("No session token -- call login() first")]
    MissingToken,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-2xx HTTP status from a data endpoint.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Build an [`Api`](Self::Api) error from a status code and body.
    pub(crate) fn api(status: u16, body: &str) -> Self {
        let reason = match status {
            400 => "bad request",
            403 => "forbidden",
            404 => "not found",
            500 => "internal server error",
            _ => "unexpected status",
        };
        let message = if body.is_empty() {
            reason.to_owned()
        } else {
            format!("{reason}: {}", &body[..body.len().min(200)])
        };
        Self::Api { status, message }
    }

    /// Returns `true` if this error indicates auth is missing or expired
    /// and re-authentication might resolve it.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::MissingToken)
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
