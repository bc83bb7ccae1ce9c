//! Risk management (RMS) types.

use serde::Deserialize;

use crate::types::de::lenient_f64;

/// Funds and margin utilisation for the trading account.
///
/// Returned by `GET rest/secure/angelbroking/user/v1/getRMS`. Every amount
/// arrives as a string; blanks decode to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct RmsLimits {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub net: Option<f64>,
    #[serde(rename = "availablecash", default, deserialize_with = "lenient_f64")]
    pub available_cash: Option<f64>,
    #[serde(rename = "availableintradaypayin", default, deserialize_with = "lenient_f64")]
    pub available_intraday_payin: Option<f64>,
    #[serde(rename = "availablelimitmargin", default, deserialize_with = "lenient_f64")]
    pub available_limit_margin: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub collateral: Option<f64>,
    #[serde(rename = "m2munrealized", default, deserialize_with = "lenient_f64")]
    pub m2m_unrealized: Option<f64>,
    #[serde(rename = "m2mrealized", default, deserialize_with = "lenient_f64")]
    pub m2m_realized: Option<f64>,
    #[serde(rename = "utiliseddebits", default, deserialize_with = "lenient_f64")]
    pub utilised_debits: Option<f64>,
    #[serde(rename = "utilisedspan", default, deserialize_with = "lenient_f64")]
    pub utilised_span: Option<f64>,
    #[serde(rename = "utilisedoptionpremium", default, deserialize_with = "lenient_f64")]
    pub utilised_option_premium: Option<f64>,
    #[serde(rename = "utilisedholdingsales", default, deserialize_with = "lenient_f64")]
    pub utilised_holding_sales: Option<f64>,
    #[serde(rename = "utilisedexposure", default, deserialize_with = "lenient_f64")]
    pub utilised_exposure: Option<f64>,
    #[serde(rename = "utilisedturnover", default, deserialize_with = "lenient_f64")]
    pub utilised_turnover: Option<f64>,
    #[serde(rename = "utilisedpayout", default, deserialize_with = "lenient_f64")]
    pub utilised_payout: Option<f64>,
}
