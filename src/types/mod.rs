//! Request and response types for the SmartAPI REST API.
//!
//! This module contains the strongly-typed structs used for serializing
//! requests and deserializing responses across every SmartAPI endpoint.
//!
//! ## Organization
//!
//! - [`enums`]: Shared enumerations (exchanges, order types, etc.)
//! - [`auth`]: Session tokens
//! - [`profile`]: User profile
//! - [`orders`]: Order placement, modification, order book, and trade book
//! - [`portfolio`]: Holdings, positions, and position conversion
//! - [`market_quote`]: Last traded price
//! - [`funds`]: Risk management (RMS) limits
//!
//! The request records ([`orders::OrderParams`],
//! [`orders::ModifyOrderParams`], [`market_quote::LtpParams`],
//! [`portfolio::ConvertPositionParams`]) are flattened into request bodies by
//! [`crate::params::map_parameters`].
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod auth;
pub(crate) mod de;
pub mod enums;
pub mod funds;
pub mod market_quote;
pub mod orders;
pub mod portfolio;
pub mod profile;

pub use enums::*;
