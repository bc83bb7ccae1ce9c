//! Constants for the Angel Broking SmartAPI.
//!
//! Contains the base URL, endpoint paths, request header names and the
//! defaults used by the network identity resolver. These are used internally
//! by [`AngelClient`](crate::client::AngelClient) but are also exported for
//! advanced usage.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Base URLs
// ---------------------------------------------------------------------------

/// Base URL for the SmartAPI REST API.
pub const API_BASE_URL: &str = "https://apiconnect.angelbroking.com";

/// Plain-text "what is my IP" echo service used for public IP discovery.
pub const PUBLIC_IP_LOOKUP_URL: &str = "https://myexternalip.com/raw";

/// Upper bound on the public IP lookup unless the caller sets another.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// Endpoint paths, relative to [`API_BASE_URL`].
pub mod endpoints {
    /// `POST`: log in with client code and password.
    pub const LOGIN: &str = "rest/auth/angelbroking/user/v1/loginByPassword";
    /// `POST`: exchange a refresh token for a new session.
    pub const SESSION_RENEW: &str = "rest/auth/angelbroking/jwt/v1/generateTokens";
    /// `GET`: user profile.
    pub const USER_PROFILE: &str = "rest/secure/angelbroking/user/v1/getProfile";
    /// `POST`: terminate the session.
    pub const LOGOUT: &str = "rest/secure/angelbroking/user/v1/logout";
    /// `GET`: orders for the day.
    pub const ORDER_BOOK: &str = "rest/secure/angelbroking/order/v1/getOrderBook";
    /// `POST`: place an order.
    pub const PLACE_ORDER: &str = "rest/secure/angelbroking/order/v1/placeOrder";
    /// `POST`: modify a pending order.
    pub const MODIFY_ORDER: &str = "rest/secure/angelbroking/order/v1/modifyOrder";
    /// `POST`: cancel a pending order.
    pub const CANCEL_ORDER: &str = "rest/secure/angelbroking/order/v1/cancelOrder";
    /// `GET`: demat holdings.
    pub const HOLDINGS: &str = "rest/secure/angelbroking/portfolio/v1/getHolding";
    /// `GET`: open positions.
    pub const POSITIONS: &str = "rest/secure/angelbroking/order/v1/getPosition";
    /// `GET`: trades for the day.
    pub const TRADE_BOOK: &str = "rest/secure/angelbroking/order/v1/getTradeBook";
    /// `POST`: last traded price of one instrument.
    pub const LTP: &str = "rest/secure/angelbroking/order/v1/getLtpData";
    /// `GET`: risk management (funds and margin) data.
    pub const RMS: &str = "rest/secure/angelbroking/user/v1/getRMS";
    /// `POST`: convert a position's product type.
    pub const CONVERT_POSITION: &str = "rest/secure/angelbroking/order/v1/convertPosition";
}

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

/// Request header names SmartAPI expects on every call.
pub mod headers {
    /// The application's API key.
    pub const PRIVATE_KEY: &str = "X-PrivateKey";
    /// Always [`USER_TYPE_USER`].
    pub const USER_TYPE: &str = "X-UserType";
    /// Always [`SOURCE_ID_WEB`].
    pub const SOURCE_ID: &str = "X-SourceID";
    /// Private IPv4 of the calling machine.
    pub const CLIENT_LOCAL_IP: &str = "X-ClientLocalIP";
    /// Public IP of the calling machine.
    pub const CLIENT_PUBLIC_IP: &str = "X-ClientPublicIP";
    /// MAC address of the interface that owns the local IP.
    pub const MAC_ADDRESS: &str = "X-MACAddress";

    pub const USER_TYPE_USER: &str = "USER";
    pub const SOURCE_ID_WEB: &str = "WEB";
}
