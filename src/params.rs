//! Parameter mapping: typed request records → generic key/value maps.
//!
//! SmartAPI request bodies are flat JSON objects. Each request record in
//! [`crate::types`] names its wire keys with serde tags, and
//! [`map_parameters`] turns a record into a [`FieldMap`] keyed by those tags.
//!
//! Only the records that implement the sealed [`RequestParams`] trait can be
//! mapped. Dynamically built values go through [`field_map_from_value`],
//! which rejects anything that is not already a flat object.
//!
//! ```
//! use angel_broking::params::map_parameters;
//! use angel_broking::types::orders::OrderParams;
//!
//! let order = OrderParams {
//!     trading_symbol: "INFY".into(),
//!     quantity: 10,
//!     ..Default::default()
//! };
//! let fields = map_parameters(&order, "json").unwrap();
//! assert_eq!(fields["tradingsymbol"], "INFY");
//! assert_eq!(fields["quantity"], 10);
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AngelError, Result};
use crate::types::market_quote::LtpParams;
use crate::types::orders::{ModifyOrderParams, OrderParams};
use crate::types::portfolio::ConvertPositionParams;

/// Wire key → value mapping produced by the mapper.
pub type FieldMap = Map<String, Value>;

/// The only tag scheme attached to request records.
pub const JSON_TAG: &str = "json";

mod sealed {
    pub trait Sealed {}
}

/// A request record the mapper knows how to flatten.
///
/// Sealed: implemented for [`OrderParams`], [`ModifyOrderParams`],
/// [`LtpParams`] and [`ConvertPositionParams`] only.
pub trait RequestParams: Serialize + sealed::Sealed {
    /// Short name used in logs and errors.
    const KIND: &'static str;
}

macro_rules! request_params {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl RequestParams for $ty {
                const KIND: &'static str = $kind;
            }
        )*
    };
}

request_params! {
    OrderParams => "order",
    ModifyOrderParams => "modify_order",
    LtpParams => "ltp",
    ConvertPositionParams => "convert_position",
}

/// Map a request record to its wire fields under `tag_key`.
///
/// Every declared field yields exactly one entry; unset optional fields are
/// present as `null`.
pub fn map_parameters<P: RequestParams>(params: &P, tag_key: &str) -> Result<FieldMap> {
    if tag_key != JSON_TAG {
        return Err(AngelError::UnsupportedTag(tag_key.to_owned()));
    }
    let value = serde_json::to_value(params)?;
    let fields = field_map_from_value(value)?;
    tracing::trace!(kind = P::KIND, fields = fields.len(), "mapped request parameters");
    Ok(fields)
}

/// Accept an already-built JSON value as request fields.
///
/// Objects pass through unchanged. Any other shape is rejected rather than
/// silently producing an empty body.
pub fn field_map_from_value(value: Value) -> Result<FieldMap> {
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(AngelError::UnsupportedParams(shape_of(&other).to_owned())),
    }
}

fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One of the closed set of request records, for callers that route
/// records of different kinds through a single path.
#[derive(Debug, Clone)]
pub enum ParamRecord {
    Order(OrderParams),
    ModifyOrder(ModifyOrderParams),
    Ltp(LtpParams),
    ConvertPosition(ConvertPositionParams),
}

impl ParamRecord {
    /// Short name of the wrapped record kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Order(_) => OrderParams::KIND,
            Self::ModifyOrder(_) => ModifyOrderParams::KIND,
            Self::Ltp(_) => LtpParams::KIND,
            Self::ConvertPosition(_) => ConvertPositionParams::KIND,
        }
    }

    /// Map the wrapped record, see [`map_parameters`].
    pub fn to_field_map(&self, tag_key: &str) -> Result<FieldMap> {
        match self {
            Self::Order(p) => map_parameters(p, tag_key),
            Self::ModifyOrder(p) => map_parameters(p, tag_key),
            Self::Ltp(p) => map_parameters(p, tag_key),
            Self::ConvertPosition(p) => map_parameters(p, tag_key),
        }
    }
}

impl From<OrderParams> for ParamRecord {
    fn from(p: OrderParams) -> Self {
        Self::Order(p)
    }
}

impl From<ModifyOrderParams> for ParamRecord {
    fn from(p: ModifyOrderParams) -> Self {
        Self::ModifyOrder(p)
    }
}

impl From<LtpParams> for ParamRecord {
    fn from(p: LtpParams) -> Self {
        Self::Ltp(p)
    }
}

impl From<ConvertPositionParams> for ParamRecord {
    fn from(p: ConvertPositionParams) -> Self {
        Self::ConvertPosition(p)
    }
}
