#![allow(missing_docs)]
//! Portfolio types: Holdings, Positions, Convert Position.

use serde::{Deserialize, Serialize};

use crate::types::de::{lenient_f64, lenient_i64};
use crate::types::enums::*;

// ---------------------------------------------------------------------------
// Holdings
// ---------------------------------------------------------------------------

/// A single holding in the demat account.
#[derive(Debug, Clone, Deserialize)]
pub struct Holding {
    #[serde(rename = "tradingsymbol")]
    pub trading_symbol: Option<String>,
    pub exchange: Option<String>,
    pub isin: Option<String>,
    #[serde(rename = "symboltoken")]
    pub symbol_token: Option<String>,
    pub product: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub quantity: Option<i64>,
    #[serde(rename = "t1quantity", default, deserialize_with = "lenient_i64")]
    pub t1_quantity: Option<i64>,
    #[serde(rename = "realisedquantity", default, deserialize_with = "lenient_i64")]
    pub realised_quantity: Option<i64>,
    #[serde(rename = "authorisedquantity", default, deserialize_with = "lenient_i64")]
    pub authorised_quantity: Option<i64>,
    #[serde(rename = "collateralquantity", default, deserialize_with = "lenient_i64")]
    pub collateral_quantity: Option<i64>,
    #[serde(rename = "collateraltype")]
    pub collateral_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub haircut: Option<f64>,
    #[serde(rename = "averageprice", default, deserialize_with = "lenient_f64")]
    pub average_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ltp: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub close: Option<f64>,
    #[serde(rename = "profitandloss", default, deserialize_with = "lenient_f64")]
    pub profit_and_loss: Option<f64>,
}

// ---------------------------------------------------------------------------
// Positions
// ---------------------------------------------------------------------------

/// A single open position.
#[derive(Debug, Clone, Deserialize)]
pub struct Position {
    pub exchange: Option<String>,
    #[serde(rename = "symboltoken")]
    pub symbol_token: Option<String>,
    #[serde(rename = "producttype")]
    pub product_type: Option<String>,
    #[serde(rename = "tradingsymbol")]
    pub trading_symbol: Option<String>,
    #[serde(rename = "symbolname")]
    pub symbol_name: Option<String>,
    #[serde(rename = "instrumenttype")]
    pub instrument_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub multiplier: Option<i64>,
    #[serde(rename = "lotsize", default, deserialize_with = "lenient_i64")]
    pub lot_size: Option<i64>,
    #[serde(rename = "buyqty", default, deserialize_with = "lenient_i64")]
    pub buy_qty: Option<i64>,
    #[serde(rename = "sellqty", default, deserialize_with = "lenient_i64")]
    pub sell_qty: Option<i64>,
    #[serde(rename = "buyamount", default, deserialize_with = "lenient_f64")]
    pub buy_amount: Option<f64>,
    #[serde(rename = "sellamount", default, deserialize_with = "lenient_f64")]
    pub sell_amount: Option<f64>,
    #[serde(rename = "cfbuyqty", default, deserialize_with = "lenient_i64")]
    pub carry_forward_buy_qty: Option<i64>,
    #[serde(rename = "cfsellqty", default, deserialize_with = "lenient_i64")]
    pub carry_forward_sell_qty: Option<i64>,
    #[serde(rename = "buyavgprice", default, deserialize_with = "lenient_f64")]
    pub buy_avg_price: Option<f64>,
    #[serde(rename = "sellavgprice", default, deserialize_with = "lenient_f64")]
    pub sell_avg_price: Option<f64>,
    #[serde(rename = "avgnetprice", default, deserialize_with = "lenient_f64")]
    pub avg_net_price: Option<f64>,
    #[serde(rename = "netvalue", default, deserialize_with = "lenient_f64")]
    pub net_value: Option<f64>,
    #[serde(rename = "netqty", default, deserialize_with = "lenient_i64")]
    pub net_qty: Option<i64>,
    #[serde(rename = "strikeprice", default, deserialize_with = "lenient_f64")]
    pub strike_price: Option<f64>,
    #[serde(rename = "optiontype")]
    pub option_type: Option<String>,
    #[serde(rename = "expirydate")]
    pub expiry_date: Option<String>,
}

// ---------------------------------------------------------------------------
// Convert Position
// ---------------------------------------------------------------------------

/// Request body for converting a position's product type.
///
/// Used by `POST rest/secure/angelbroking/order/v1/convertPosition`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConvertPositionParams {
    #[serde(rename = "exchange")]
    pub exchange: Exchange,
    #[serde(rename = "oldproducttype")]
    pub old_product_type: ProductType,
    #[serde(rename = "newproducttype")]
    pub new_product_type: ProductType,
    #[serde(rename = "tradingsymbol")]
    pub trading_symbol: String,
    #[serde(rename = "transactiontype")]
    pub transaction_type: TransactionType,
    #[serde(rename = "quantity")]
    pub quantity: u64,
    #[serde(rename = "type")]
    pub position_type: PositionType,
}
