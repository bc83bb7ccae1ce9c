//! Order types: Place, Modify, Cancel, Order Book, Trade Book.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::de::{lenient_f64, lenient_i64};
use crate::types::enums::*;

/// Timestamp layout of `updatetime` / `exchtime` (e.g. `28-May-2021 10:02:04`).
const ORDER_TIME_FORMAT: &str = "%d-%b-%Y %H:%M:%S";

// ---------------------------------------------------------------------------
// Place Order
// ---------------------------------------------------------------------------

/// Request body for placing an order.
///
/// Used by `POST rest/secure/angelbroking/order/v1/placeOrder`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderParams {
    #[serde(rename = "variety")]
    pub variety: Variety,
    #[serde(rename = "tradingsymbol")]
    pub trading_symbol: String,
    #[serde(rename = "symboltoken")]
    pub symbol_token: String,
    #[serde(rename = "transactiontype")]
    pub transaction_type: TransactionType,
    #[serde(rename = "exchange")]
    pub exchange: Exchange,
    #[serde(rename = "ordertype")]
    pub order_type: OrderType,
    #[serde(rename = "producttype")]
    pub product_type: ProductType,
    #[serde(rename = "duration")]
    pub duration: Validity,
    /// Limit price; ignored for market orders.
    #[serde(rename = "price")]
    pub price: f64,
    /// Target distance, bracket orders only.
    #[serde(rename = "squareoff")]
    pub square_off: f64,
    /// Stop-loss distance, bracket orders only.
    #[serde(rename = "stoploss")]
    pub stop_loss: f64,
    #[serde(rename = "quantity")]
    pub quantity: u64,
    #[serde(rename = "triggerprice")]
    pub trigger_price: Option<f64>,
}

/// Data of a successful place / modify / cancel call.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub script: Option<String>,
    #[serde(rename = "orderid")]
    pub order_id: String,
}

// ---------------------------------------------------------------------------
// Modify Order
// ---------------------------------------------------------------------------

/// Request body for modifying a pending order.
///
/// Used by `POST rest/secure/angelbroking/order/v1/modifyOrder`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModifyOrderParams {
    #[serde(rename = "variety")]
    pub variety: Variety,
    #[serde(rename = "orderid")]
    pub order_id: String,
    #[serde(rename = "ordertype")]
    pub order_type: OrderType,
    #[serde(rename = "producttype")]
    pub product_type: ProductType,
    #[serde(rename = "duration")]
    pub duration: Validity,
    #[serde(rename = "price")]
    pub price: f64,
    #[serde(rename = "quantity")]
    pub quantity: u64,
    #[serde(rename = "tradingsymbol")]
    pub trading_symbol: String,
    #[serde(rename = "symboltoken")]
    pub symbol_token: String,
    #[serde(rename = "exchange")]
    pub exchange: Exchange,
}

// ---------------------------------------------------------------------------
// Cancel Order
// ---------------------------------------------------------------------------

/// Request body for cancelling a pending order.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CancelOrderRequest<'a> {
    pub variety: Variety,
    #[serde(rename = "orderid")]
    pub order_id: &'a str,
}

// ---------------------------------------------------------------------------
// Order Book
// ---------------------------------------------------------------------------

/// A single entry of the order book.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDetail {
    #[serde(rename = "orderid")]
    pub order_id: String,
    pub variety: Option<String>,
    #[serde(rename = "ordertype")]
    pub order_type: Option<String>,
    #[serde(rename = "producttype")]
    pub product_type: Option<String>,
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(rename = "triggerprice", default, deserialize_with = "lenient_f64")]
    pub trigger_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub quantity: Option<i64>,
    #[serde(rename = "disclosedquantity", default, deserialize_with = "lenient_i64")]
    pub disclosed_quantity: Option<i64>,
    #[serde(rename = "squareoff", default, deserialize_with = "lenient_f64")]
    pub square_off: Option<f64>,
    #[serde(rename = "stoploss", default, deserialize_with = "lenient_f64")]
    pub stop_loss: Option<f64>,
    #[serde(rename = "tradingsymbol")]
    pub trading_symbol: Option<String>,
    #[serde(rename = "transactiontype")]
    pub transaction_type: Option<String>,
    pub exchange: Option<String>,
    #[serde(rename = "symboltoken")]
    pub symbol_token: Option<String>,
    #[serde(rename = "instrumenttype")]
    pub instrument_type: Option<String>,
    #[serde(rename = "averageprice", default, deserialize_with = "lenient_f64")]
    pub average_price: Option<f64>,
    #[serde(rename = "filledshares", default, deserialize_with = "lenient_i64")]
    pub filled_shares: Option<i64>,
    #[serde(rename = "unfilledshares", default, deserialize_with = "lenient_i64")]
    pub unfilled_shares: Option<i64>,
    pub status: Option<String>,
    #[serde(rename = "orderstatus")]
    pub order_status: Option<String>,
    /// Rejection / status text from the exchange.
    pub text: Option<String>,
    #[serde(rename = "updatetime")]
    pub update_time: Option<String>,
    #[serde(rename = "exchtime")]
    pub exchange_time: Option<String>,
    #[serde(rename = "parentorderid")]
    pub parent_order_id: Option<String>,
}

impl OrderDetail {
    /// `updatetime` parsed as a local (IST) timestamp.
    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        parse_order_time(self.update_time.as_deref()?)
    }

    /// `exchtime` parsed as a local (IST) timestamp.
    pub fn exchange_timestamp(&self) -> Option<NaiveDateTime> {
        parse_order_time(self.exchange_time.as_deref()?)
    }
}

fn parse_order_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), ORDER_TIME_FORMAT).ok()
}

// ---------------------------------------------------------------------------
// Trade Book
// ---------------------------------------------------------------------------

/// A single fill from the trade book.
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    pub exchange: Option<String>,
    #[serde(rename = "producttype")]
    pub product_type: Option<String>,
    #[serde(rename = "tradingsymbol")]
    pub trading_symbol: Option<String>,
    #[serde(rename = "instrumenttype")]
    pub instrument_type: Option<String>,
    #[serde(rename = "transactiontype")]
    pub transaction_type: Option<String>,
    #[serde(rename = "fillprice", default, deserialize_with = "lenient_f64")]
    pub fill_price: Option<f64>,
    #[serde(rename = "fillsize", default, deserialize_with = "lenient_i64")]
    pub fill_size: Option<i64>,
    #[serde(rename = "tradevalue", default, deserialize_with = "lenient_f64")]
    pub trade_value: Option<f64>,
    #[serde(rename = "orderid")]
    pub order_id: Option<String>,
    #[serde(rename = "fillid")]
    pub fill_id: Option<String>,
    #[serde(rename = "filltime")]
    pub fill_time: Option<String>,
}

impl Trade {
    /// `filltime` (`HH:MM:SS`, exchange time of day).
    pub fn filled_at(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.fill_time.as_deref()?.trim(), "%H:%M:%S").ok()
    }
}
