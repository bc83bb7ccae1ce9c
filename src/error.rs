//! Error types for the `angel-broking` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, AngelError>`.
//!
//! [`AngelError`] covers:
//! - **API errors**: SmartAPI envelopes with `status: false` (codes `AGxxxx`, `ABxxxx`)
//! - **HTTP status errors**: Unexpected status codes with response body
//! - **HTTP transport errors**: Network, TLS, timeout failures
//! - **JSON errors**: Deserialization failures
//! - **Network identity errors**: Local IP, interface, MAC and public IP discovery
//! - **Parameter mapping errors**: Unsupported record shapes or tag schemes
//! - **Invalid arguments**: Client-side validation errors

use std::fmt;

/// Error fields of a SmartAPI response envelope.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable description of the error.
    #[serde(default)]
    pub message: Option<String>,
    /// SmartAPI error code (e.g. "AG8001").
    #[serde(default, alias = "errorCode")]
    pub errorcode: Option<String>,
}

impl ApiErrorBody {
    fn has_content(&self) -> bool {
        self.message.as_deref().is_some_and(|m| !m.is_empty())
            || self.errorcode.as_deref().is_some_and(|c| !c.is_empty())
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self.errorcode.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => "UNKNOWN",
        };
        write!(
            f,
            "[{}] {}",
            code,
            self.message.as_deref().unwrap_or("No message"),
        )
    }
}

/// All possible errors produced by the `angel-broking` client.
#[derive(Debug, thiserror::Error)]
pub enum AngelError {
    /// An error envelope returned by the SmartAPI REST API.
    #[error("API error: {0}")]
    Api(ApiErrorBody),

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to (de)serialize a JSON body.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// A successful envelope carried no `data` where the endpoint requires it.
    #[error("response from {0} carried no data")]
    MissingData(String),

    /// A secure endpoint was called before [`login`](crate::AngelClient::login).
    #[error("not logged in")]
    NotLoggedIn,

    /// No up, non-loopback interface has a usable IPv4 address.
    #[error("network unavailable: no interface has a usable IPv4 address")]
    NetworkUnavailable,

    /// The operating system refused to enumerate network interfaces.
    #[error("failed to enumerate network interfaces: {0}")]
    InterfaceEnumeration(#[source] std::io::Error),

    /// A network interface could not be found.
    #[error("network interface not found: {0}")]
    InterfaceLookup(String),

    /// An interface's hardware address is missing or not a valid MAC.
    #[error("interface {interface} has malformed hardware address {address:?}")]
    MalformedHardwareAddress {
        /// Interface name.
        interface: String,
        /// The raw address, hex-encoded (empty when absent).
        address: String,
    },

    /// The request to the public IP echo service failed in transport.
    #[error("public IP lookup failed: {0}")]
    PublicIpTransport(#[source] reqwest::Error),

    /// The public IP echo service answered with something that is not an IP.
    #[error("public IP lookup returned {0:?}")]
    InvalidPublicIp(String),

    /// A value handed to the parameter mapper is not a flat record.
    #[error("unsupported parameter shape: {0}")]
    UnsupportedParams(String),

    /// The parameter mapper was asked for a tag scheme the records don't carry.
    #[error("unsupported tag key: {0:?}")]
    UnsupportedTag(String),

    /// The caller provided an invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl AngelError {
    /// Build an API or raw HTTP error from a failed response body.
    pub(crate) fn from_body(status: reqwest::StatusCode, body: &str) -> Self {
        if let Ok(api_err) = serde_json::from_str::<ApiErrorBody>(body) {
            if api_err.has_content() {
                return AngelError::Api(api_err);
            }
        }
        AngelError::HttpStatus {
            status,
            body: body.to_owned(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AngelError>;
