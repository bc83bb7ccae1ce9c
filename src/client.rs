//! Core HTTP client for the SmartAPI REST API.
//!
//! The [`AngelClient`] struct is the main entry point for interacting with
//! all SmartAPI REST endpoints. It wraps [`reqwest::Client`] with the header
//! set SmartAPI expects (API key, device identity, bearer token) and unwraps
//! the `{status, message, errorcode, data}` response envelope.
//!
//! API endpoint methods are added to `AngelClient` via `impl` blocks in the
//! [`crate::api`] module.

use std::fmt;

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::constants::API_BASE_URL;
use crate::constants::headers as smartapi;
use crate::error::{AngelError, ApiErrorBody, Result};
use crate::identity::{IdentityResolver, NetworkIdentity};
use crate::types::auth::Session;

/// SmartAPI response envelope.
#[derive(Debug, serde::Deserialize)]
struct Envelope<T> {
    status: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, alias = "errorCode")]
    errorcode: Option<String>,
    data: Option<T>,
}

/// Core HTTP client for the SmartAPI REST API.
///
/// Holds the API key and login credentials, the session established by
/// [`login`](Self::login), and the device identity sent with each request.
///
/// # Example
///
/// ```no_run
/// use angel_broking::client::AngelClient;
///
/// # #[tokio::main]
/// # async fn main() -> angel_broking::error::Result<()> {
/// let mut client = AngelClient::new("api-key", "A123456", "password")?;
/// client.login().await?;
/// let profile = client.get_profile().await?;
/// println!("{}", profile.client_code);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AngelClient {
    http: reqwest::Client,
    /// SmartAPI application key (`X-PrivateKey`).
    api_key: HeaderValue,
    client_code: String,
    password: String,
    /// Base URL for REST API requests (defaults to [`API_BASE_URL`]).
    base_url: String,
    session: Option<Session>,
    identity: Option<NetworkIdentity>,
    resolver: IdentityResolver,
}

impl AngelClient {
    /// Create a new `AngelClient` for the given API key and credentials.
    ///
    /// Uses the default API base URL (`https://apiconnect.angelbroking.com`).
    pub fn new(
        api_key: impl Into<String>,
        client_code: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::with_base_url(api_key, client_code, password, API_BASE_URL)
    }

    /// Create a new `AngelClient` pointing at a custom base URL.
    ///
    /// Useful for testing against a sandbox or mock server.
    pub fn with_base_url(
        api_key: impl Into<String>,
        client_code: impl Into<String>,
        password: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .build()?;

        Ok(Self {
            http,
            api_key: header_value("api key", &api_key.into())?,
            client_code: client_code.into(),
            password: password.into(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            session: None,
            identity: None,
            resolver: IdentityResolver::new(),
        })
    }

    /// Use a fixed device identity instead of resolving one at login.
    pub fn with_network_identity(mut self, identity: NetworkIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Replace the resolver used to discover the device identity at login.
    pub fn with_identity_resolver(mut self, resolver: IdentityResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the Angel client code (user ID).
    pub fn client_code(&self) -> &str {
        &self.client_code
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The current session, if logged in.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Replace the session (e.g. one persisted from an earlier run).
    ///
    /// Secure calls also need the device identity. A client that never
    /// logged in has none, so pair this with
    /// [`set_network_identity`](Self::set_network_identity) or
    /// [`resolve_network_identity`](Self::resolve_network_identity).
    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Drop the session without calling the logout endpoint.
    pub fn clear_session(&mut self) -> Option<Session> {
        self.session.take()
    }

    /// The device identity sent with requests, once known.
    pub fn network_identity(&self) -> Option<&NetworkIdentity> {
        self.identity.as_ref()
    }

    /// Replace the device identity sent with requests.
    pub fn set_network_identity(&mut self, identity: NetworkIdentity) {
        self.identity = Some(identity);
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// Resolve the device identity unless one is already set.
    ///
    /// [`login`](Self::login) calls this itself.
    pub async fn resolve_network_identity(&mut self) -> Result<NetworkIdentity> {
        if let Some(identity) = self.identity {
            return Ok(identity);
        }
        let identity = self.resolver.resolve().await?;
        self.identity = Some(identity);
        Ok(identity)
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Perform an authenticated GET and return the envelope's `data`.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self.url(path)?;
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(url)
            .headers(self.secure_headers()?)
            .send()
            .await?;

        required(path, self.handle_response(resp).await?)
    }

    /// Perform an authenticated GET for a list; a `null` payload is empty.
    pub async fn get_list<R: DeserializeOwned>(&self, path: &str) -> Result<Vec<R>> {
        let url = self.url(path)?;
        tracing::debug!(%url, "GET (list)");

        let resp = self
            .http
            .get(url)
            .headers(self.secure_headers()?)
            .send()
            .await?;

        Ok(self.handle_response(resp).await?.unwrap_or_default())
    }

    /// Perform an authenticated POST with a JSON body and return `data`.
    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        let url = self.url(path)?;
        tracing::debug!(%url, "POST");

        let resp = self
            .http
            .post(url)
            .headers(self.secure_headers()?)
            .json(body)
            .send()
            .await?;

        required(path, self.handle_response(resp).await?)
    }

    /// Perform an authenticated POST whose `data` carries nothing of use.
    pub async fn post_no_content<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path)?;
        tracing::debug!(%url, "POST (no content)");

        let resp = self
            .http
            .post(url)
            .headers(self.secure_headers()?)
            .json(body)
            .send()
            .await?;

        self.handle_response::<serde_json::Value>(resp).await?;
        Ok(())
    }

    /// POST to an auth endpoint: identity headers, plus the bearer token
    /// only if a session exists.
    pub(crate) async fn post_auth<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        let url = self.url(path)?;
        tracing::debug!(%url, "POST (auth)");

        let mut headers = self.identity_headers()?;
        if let Some(session) = &self.session {
            headers.insert(
                header::AUTHORIZATION,
                header_value("jwt token", &session.authorization())?,
            );
        }

        let resp = self.http.post(url).headers(headers).json(body).send().await?;

        required(path, self.handle_response(resp).await?)
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Build the full URL from a path segment.
    fn url(&self, path: &str) -> Result<url::Url> {
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Ok(url::Url::parse(&joined)?)
    }

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            smartapi::USER_TYPE,
            HeaderValue::from_static(smartapi::USER_TYPE_USER),
        );
        headers.insert(
            smartapi::SOURCE_ID,
            HeaderValue::from_static(smartapi::SOURCE_ID_WEB),
        );
        headers
    }

    /// API key and device identity headers.
    fn identity_headers(&self) -> Result<HeaderMap> {
        let identity = self.identity.as_ref().ok_or_else(|| {
            AngelError::InvalidArgument(
                "network identity has not been resolved; call login or set_network_identity".into(),
            )
        })?;

        let mut headers = HeaderMap::with_capacity(5);
        headers.insert(smartapi::PRIVATE_KEY, self.api_key.clone());
        headers.insert(
            smartapi::CLIENT_LOCAL_IP,
            header_value("local ip", &identity.local_ip.to_string())?,
        );
        headers.insert(
            smartapi::CLIENT_PUBLIC_IP,
            header_value("public ip", &identity.public_ip.to_string())?,
        );
        headers.insert(
            smartapi::MAC_ADDRESS,
            header_value("mac address", &identity.mac_address.to_string())?,
        );
        Ok(headers)
    }

    /// Identity headers plus the session's bearer token.
    fn secure_headers(&self) -> Result<HeaderMap> {
        let session = self.session.as_ref().ok_or(AngelError::NotLoggedIn)?;
        let mut headers = self.identity_headers()?;
        headers.insert(
            header::AUTHORIZATION,
            header_value("jwt token", &session.authorization())?,
        );
        Ok(headers)
    }

    /// Read a response and unwrap the SmartAPI envelope.
    ///
    /// `status: false` becomes [`AngelError::Api`] whatever the HTTP status;
    /// a non-2xx response without an envelope becomes
    /// [`AngelError::HttpStatus`].
    async fn handle_response<R: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Option<R>> {
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes);
            return Err(AngelError::from_body(status, &body));
        }

        let envelope: Envelope<R> = serde_json::from_slice(&bytes)?;
        if !envelope.status {
            return Err(AngelError::Api(ApiErrorBody {
                message: envelope.message,
                errorcode: envelope.errorcode,
            }));
        }
        Ok(envelope.data)
    }
}

impl fmt::Debug for AngelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AngelClient")
            .field("client_code", &self.client_code)
            .field("base_url", &self.base_url)
            .field("logged_in", &self.session.is_some())
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

fn required<R>(path: &str, data: Option<R>) -> Result<R> {
    data.ok_or_else(|| AngelError::MissingData(path.to_owned()))
}

fn header_value(what: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| AngelError::InvalidArgument(format!("{what} contains invalid header characters")))
}
