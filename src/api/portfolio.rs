//! Portfolio endpoints: Holdings, Positions, Convert Position.

use crate::client::AngelClient;
use crate::constants::endpoints;
use crate::error::Result;
use crate::params::{JSON_TAG, map_parameters};
use crate::types::portfolio::*;

impl AngelClient {
    /// Retrieve all holdings in the demat account.
    ///
    /// **Endpoint:** `GET rest/secure/angelbroking/portfolio/v1/getHolding`
    pub async fn get_holdings(&self) -> Result<Vec<Holding>> {
        self.get_list(endpoints::HOLDINGS).await
    }

    /// Retrieve all open positions for the day.
    ///
    /// **Endpoint:** `GET rest/secure/angelbroking/order/v1/getPosition`
    pub async fn get_positions(&self) -> Result<Vec<Position>> {
        self.get_list(endpoints::POSITIONS).await
    }

    /// Convert a position's product type (e.g. intraday → delivery).
    ///
    /// **Endpoint:** `POST rest/secure/angelbroking/order/v1/convertPosition`
    pub async fn convert_position(&self, params: &ConvertPositionParams) -> Result<()> {
        let body = map_parameters(params, JSON_TAG)?;
        self.post_no_content(endpoints::CONVERT_POSITION, &body).await
    }
}
