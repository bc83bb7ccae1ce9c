//! Session endpoint implementations: login, renewal, logout.
//!
//! Login and renewal carry the device identity headers but no bearer token
//! (renewal sends the current one when present). Logout is a secure call.

use crate::client::AngelClient;
use crate::constants::endpoints;
use crate::error::{AngelError, Result};
use crate::types::auth::{LoginRequest, LogoutRequest, RenewSessionRequest, Session};

impl AngelClient {
    /// Log in with the client code and password given at construction.
    ///
    /// Resolves the device identity first if none was set, then stores the
    /// returned session on the client.
    ///
    /// **Endpoint:** `POST rest/auth/angelbroking/user/v1/loginByPassword`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use angel_broking::client::AngelClient;
    /// # #[tokio::main]
    /// # async fn main() -> angel_broking::error::Result<()> {
    /// let mut client = AngelClient::new("api-key", "A123456", "password")?;
    /// let session = client.login().await?;
    /// println!("feed token present: {}", session.feed_token.is_some());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn login(&mut self) -> Result<Session> {
        self.resolve_network_identity().await?;

        let body = LoginRequest {
            client_code: self.client_code(),
            password: self.password(),
        };
        let session: Session = self.post_auth(endpoints::LOGIN, &body).await?;

        tracing::info!(client_code = %self.client_code(), "logged in");
        self.set_session(session.clone());
        Ok(session)
    }

    /// Exchange the refresh token for a new session.
    ///
    /// The new tokens replace the stored session.
    ///
    /// **Endpoint:** `POST rest/auth/angelbroking/jwt/v1/generateTokens`
    pub async fn renew_session(&mut self) -> Result<Session> {
        let refresh_token = self
            .session()
            .map(|s| s.refresh_token.clone())
            .ok_or(AngelError::NotLoggedIn)?;

        let body = RenewSessionRequest {
            refresh_token: &refresh_token,
        };
        let session: Session = self.post_auth(endpoints::SESSION_RENEW, &body).await?;

        tracing::info!(client_code = %self.client_code(), "session renewed");
        self.set_session(session.clone());
        Ok(session)
    }

    /// Terminate the session on the server and forget it locally.
    ///
    /// **Endpoint:** `POST rest/secure/angelbroking/user/v1/logout`
    pub async fn logout(&mut self) -> Result<()> {
        let body = LogoutRequest {
            client_code: self.client_code(),
        };
        self.post_no_content(endpoints::LOGOUT, &body).await?;

        tracing::info!(client_code = %self.client_code(), "logged out");
        self.clear_session();
        Ok(())
    }
}
