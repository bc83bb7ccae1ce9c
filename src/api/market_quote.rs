//! Market Quote endpoints: LTP.

use crate::client::AngelClient;
use crate::constants::endpoints;
use crate::error::Result;
use crate::params::{JSON_TAG, map_parameters};
use crate::types::market_quote::*;

impl AngelClient {
    /// Retrieve the last traded price of one instrument.
    ///
    /// **Endpoint:** `POST rest/secure/angelbroking/order/v1/getLtpData`
    pub async fn get_ltp(&self, params: &LtpParams) -> Result<LtpData> {
        let body = map_parameters(params, JSON_TAG)?;
        self.post(endpoints::LTP, &body).await
    }
}
