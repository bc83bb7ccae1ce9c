//! Market Quote types: Last Traded Price.

use serde::{Deserialize, Serialize};

use crate::types::de::lenient_f64;
use crate::types::enums::Exchange;

/// Request body for the LTP endpoint.
///
/// Used by `POST rest/secure/angelbroking/order/v1/getLtpData`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LtpParams {
    #[serde(rename = "exchange")]
    pub exchange: Exchange,
    #[serde(rename = "tradingsymbol")]
    pub trading_symbol: String,
    #[serde(rename = "symboltoken")]
    pub symbol_token: String,
}

/// Last traded price snapshot of one instrument.
#[derive(Debug, Clone, Deserialize)]
pub struct LtpData {
    pub exchange: String,
    #[serde(rename = "tradingsymbol")]
    pub trading_symbol: String,
    #[serde(rename = "symboltoken")]
    pub symbol_token: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub open: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub high: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub low: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub close: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ltp: Option<f64>,
}
