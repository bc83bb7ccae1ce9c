//! User profile types.

use serde::Deserialize;

/// Profile of the logged-in user.
///
/// Returned by `GET rest/secure/angelbroking/user/v1/getProfile`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "clientcode")]
    pub client_code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "mobileno", default)]
    pub mobile_no: Option<String>,
    /// Exchanges the account is enabled on.
    #[serde(default)]
    pub exchanges: Vec<String>,
    /// Product types the account may trade.
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(rename = "lastlogintime", default)]
    pub last_login_time: Option<String>,
    #[serde(rename = "brokerid", default)]
    pub broker_id: Option<String>,
}
