//! Shared enum types that map directly to SmartAPI string values.
//!
//! Variant names use `SCREAMING_SNAKE_CASE` to match the JSON wire format
//! expected by SmartAPI, so we suppress the Rust naming convention lint.
#![allow(non_camel_case_types)]

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Exchange
// ---------------------------------------------------------------------------

/// Exchange an instrument trades on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    /// NSE cash segment.
    #[default]
    NSE,
    /// BSE cash segment.
    BSE,
    /// NSE futures & options.
    NFO,
    /// MCX commodities.
    MCX,
}

// ---------------------------------------------------------------------------
// Variety
// ---------------------------------------------------------------------------

/// Order variety.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variety {
    /// Regular order.
    #[default]
    NORMAL,
    /// Stop-loss order.
    STOPLOSS,
    /// After-market order.
    AMO,
    /// Bracket order.
    ROBO,
}

// ---------------------------------------------------------------------------
// Transaction Type
// ---------------------------------------------------------------------------

/// Buy or sell side of a transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[default]
    BUY,
    SELL,
}

// ---------------------------------------------------------------------------
// Order Type
// ---------------------------------------------------------------------------

/// Type of order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    #[default]
    MARKET,
    LIMIT,
    STOPLOSS_LIMIT,
    STOPLOSS_MARKET,
}

// ---------------------------------------------------------------------------
// Product Type
// ---------------------------------------------------------------------------

/// Product type for an order or position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    /// Cash & Carry for equity deliveries.
    DELIVERY,
    /// Normal F&O trades.
    CARRYFORWARD,
    /// Margin delivery.
    MARGIN,
    /// Margin intraday square-off.
    #[default]
    INTRADAY,
    /// Bracket order (ROBO variety only).
    BO,
}

// ---------------------------------------------------------------------------
// Validity
// ---------------------------------------------------------------------------

/// Order validity, sent as the `duration` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Validity {
    /// Valid for the trading day.
    #[default]
    DAY,
    /// Immediate or Cancel.
    IOC,
}

// ---------------------------------------------------------------------------
// Position Type
// ---------------------------------------------------------------------------

/// Holding period of a position being converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionType {
    /// Opened today.
    #[default]
    DAY,
    /// Carried forward from a previous session.
    CARRYFORWARD,
}
