//! User profile endpoint.

use crate::client::AngelClient;
use crate::constants::endpoints;
use crate::error::Result;
use crate::types::profile::UserProfile;

impl AngelClient {
    /// Retrieve the user profile.
    ///
    /// Can also be used to validate that a session is still active.
    ///
    /// **Endpoint:** `GET rest/secure/angelbroking/user/v1/getProfile`
    pub async fn get_profile(&self) -> Result<UserProfile> {
        self.get(endpoints::USER_PROFILE).await
    }
}
