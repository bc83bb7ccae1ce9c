//! Authentication request/response types.

use serde::{Deserialize, Serialize};

/// Request body for `loginByPassword`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginRequest<'a> {
    #[serde(rename = "clientcode")]
    pub client_code: &'a str,
    pub password: &'a str,
}

/// Request body for `generateTokens`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RenewSessionRequest<'a> {
    pub refresh_token: &'a str,
}

/// Request body for `logout`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct LogoutRequest<'a> {
    #[serde(rename = "clientcode")]
    pub client_code: &'a str,
}

/// Session tokens returned by login and session renewal.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// JWT sent as the bearer token on secure endpoints.
    pub jwt_token: String,
    /// Token exchanged for a fresh session via `generateTokens`.
    pub refresh_token: String,
    /// Token for the market data feed.
    #[serde(default)]
    pub feed_token: Option<String>,
}

impl Session {
    /// Value of the `Authorization` header for this session.
    ///
    /// SmartAPI sometimes returns the JWT already prefixed with `Bearer `.
    pub fn authorization(&self) -> String {
        if self.jwt_token.starts_with("Bearer ") {
            self.jwt_token.clone()
        } else {
            format!("Bearer {}", self.jwt_token)
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("jwt_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("feed_token", &self.feed_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
