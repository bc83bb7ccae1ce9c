//! Order management endpoints.

use crate::client::AngelClient;
use crate::constants::endpoints;
use crate::error::Result;
use crate::params::{JSON_TAG, map_parameters};
use crate::types::enums::Variety;
use crate::types::orders::*;

impl AngelClient {
    /// Place a new order.
    ///
    /// **Endpoint:** `POST rest/secure/angelbroking/order/v1/placeOrder`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use angel_broking::client::AngelClient;
    /// # use angel_broking::types::orders::OrderParams;
    /// # use angel_broking::types::enums::*;
    /// # async fn run(client: &AngelClient) -> angel_broking::error::Result<()> {
    /// let order = OrderParams {
    ///     trading_symbol: "SBIN-EQ".into(),
    ///     symbol_token: "3045".into(),
    ///     transaction_type: TransactionType::BUY,
    ///     order_type: OrderType::LIMIT,
    ///     price: 19500.0,
    ///     quantity: 1,
    ///     ..Default::default()
    /// };
    /// let resp = client.place_order(&order).await?;
    /// println!("order id: {}", resp.order_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn place_order(&self, params: &OrderParams) -> Result<OrderResponse> {
        let body = map_parameters(params, JSON_TAG)?;
        self.post(endpoints::PLACE_ORDER, &body).await
    }

    /// Modify a pending order.
    ///
    /// **Endpoint:** `POST rest/secure/angelbroking/order/v1/modifyOrder`
    pub async fn modify_order(&self, params: &ModifyOrderParams) -> Result<OrderResponse> {
        let body = map_parameters(params, JSON_TAG)?;
        self.post(endpoints::MODIFY_ORDER, &body).await
    }

    /// Cancel a pending order.
    ///
    /// **Endpoint:** `POST rest/secure/angelbroking/order/v1/cancelOrder`
    pub async fn cancel_order(&self, variety: Variety, order_id: &str) -> Result<OrderResponse> {
        let body = CancelOrderRequest { variety, order_id };
        self.post(endpoints::CANCEL_ORDER, &body).await
    }

    /// Retrieve all orders for the day.
    ///
    /// **Endpoint:** `GET rest/secure/angelbroking/order/v1/getOrderBook`
    pub async fn get_order_book(&self) -> Result<Vec<OrderDetail>> {
        self.get_list(endpoints::ORDER_BOOK).await
    }

    /// Retrieve all trades for the day.
    ///
    /// **Endpoint:** `GET rest/secure/angelbroking/order/v1/getTradeBook`
    pub async fn get_trade_book(&self) -> Result<Vec<Trade>> {
        self.get_list(endpoints::TRADE_BOOK).await
    }
}
