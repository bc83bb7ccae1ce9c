//! Risk management endpoint.

use crate::client::AngelClient;
use crate::constants::endpoints;
use crate::error::Result;
use crate::types::funds::RmsLimits;

impl AngelClient {
    /// Retrieve funds, margin and utilisation for the trading account.
    ///
    /// **Endpoint:** `GET rest/secure/angelbroking/user/v1/getRMS`
    pub async fn get_rms(&self) -> Result<RmsLimits> {
        self.get(endpoints::RMS).await
    }
}
