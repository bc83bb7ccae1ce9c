//! Response parsing tests, no live connection needed.

use angel_broking::types::auth::Session;
use angel_broking::types::orders::{OrderDetail, Trade};
use chrono::{NaiveDate, NaiveTime};

// ========================================================================
// Order book
// ========================================================================

#[test]
fn parse_order_book_entry() {
    let json = r#"{
        "variety": "NORMAL",
        "ordertype": "LIMIT",
        "producttype": "INTRADAY",
        "duration": "DAY",
        "price": "194.00",
        "triggerprice": "0",
        "quantity": "1",
        "disclosedquantity": "0",
        "squareoff": "0",
        "stoploss": "0",
        "trailingstoploss": "0",
        "tradingsymbol": "SBIN-EQ",
        "transactiontype": "BUY",
        "exchange": "NSE",
        "symboltoken": "3045",
        "instrumenttype": "",
        "averageprice": "0",
        "filledshares": "0",
        "unfilledshares": "1",
        "orderid": "201020000000080",
        "text": "",
        "status": "open",
        "orderstatus": "open",
        "updatetime": "20-Oct-2020 13:10:59",
        "exchtime": "20-Oct-2020 13:10:59",
        "exchorderupdatetime": "20-Oct-2020 13:10:59",
        "fillid": "",
        "filltime": "",
        "parentorderid": ""
    }"#;
    let order: OrderDetail = serde_json::from_str(json).unwrap();

    assert_eq!(order.order_id, "201020000000080");
    assert_eq!(order.price, Some(194.0));
    assert_eq!(order.quantity, Some(1));
    assert_eq!(order.unfilled_shares, Some(1));
    assert_eq!(order.status.as_deref(), Some("open"));

    let expected = NaiveDate::from_ymd_opt(2020, 10, 20)
        .unwrap()
        .and_hms_opt(13, 10, 59)
        .unwrap();
    assert_eq!(order.updated_at(), Some(expected));
    assert_eq!(order.exchange_timestamp(), Some(expected));
}

#[test]
fn order_with_blank_times_has_no_timestamps() {
    let json = r#"{"orderid": "1", "updatetime": "", "price": 12.5, "quantity": ""}"#;
    let order: OrderDetail = serde_json::from_str(json).unwrap();

    assert_eq!(order.updated_at(), None);
    assert_eq!(order.exchange_timestamp(), None);
    assert_eq!(order.price, Some(12.5));
    assert_eq!(order.quantity, None);
}

#[test]
fn fractional_quantity_is_rejected() {
    let json = r#"{"orderid": "1", "quantity": 1.5}"#;
    assert!(serde_json::from_str::<OrderDetail>(json).is_err());
}

// ========================================================================
// Trade book
// ========================================================================

#[test]
fn parse_trade_book_entry() {
    let json = r#"{
        "exchange": "NSE",
        "producttype": "DELIVERY",
        "tradingsymbol": "ITC-EQ",
        "instrumenttype": "",
        "symbolgroup": "EQ",
        "strikeprice": "-1",
        "optiontype": "",
        "expirydate": "",
        "marketlot": "1",
        "precision": "2",
        "multiplier": "-1",
        "tradevalue": "175.00",
        "transactiontype": "BUY",
        "fillprice": "175.00",
        "fillsize": "1",
        "orderid": "201020000000095",
        "fillid": "50005750",
        "filltime": "13:27:53"
    }"#;
    let trade: Trade = serde_json::from_str(json).unwrap();

    assert_eq!(trade.fill_price, Some(175.0));
    assert_eq!(trade.fill_size, Some(1));
    assert_eq!(trade.trade_value, Some(175.0));
    assert_eq!(trade.filled_at(), NaiveTime::from_hms_opt(13, 27, 53));
}

// ========================================================================
// Session
// ========================================================================

#[test]
fn session_without_feed_token() {
    let json = r#"{"jwtToken": "eyJhbGciOi", "refreshToken": "eyJyZWZyZXNo"}"#;
    let session: Session = serde_json::from_str(json).unwrap();

    assert_eq!(session.feed_token, None);
    assert_eq!(session.authorization(), "Bearer eyJhbGciOi");
}

#[test]
fn session_debug_redacts_tokens() {
    let json = r#"{"jwtToken": "secret-jwt", "refreshToken": "secret-refresh", "feedToken": "secret-feed"}"#;
    let session: Session = serde_json::from_str(json).unwrap();
    let debug = format!("{session:?}");

    assert!(!debug.contains("secret"), "{debug}");
}
