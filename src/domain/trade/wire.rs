//! Wire types for the trade book.

use crate::shared::{serde_util, Envelope, Symbol};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One entry of `tradeBook`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawTrade {
    #[serde(default)]
    pub trade_number: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub exchange_order_no: String,
    #[serde(default)]
    pub symbol: Symbol,
    #[serde(default)]
    pub exchange: Option<i32>,
    #[serde(default)]
    pub segment: Option<i32>,
    #[serde(default)]
    pub side: Option<i32>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub trade_price: Decimal,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub traded_qty: i64,
    #[serde(default)]
    pub trade_value: Decimal,
    #[serde(default)]
    pub order_date_time: String,
    #[serde(default)]
    pub fy_token: String,
}

/// `GET /tradebook`.
#[derive(Deserialize, Debug, Clone)]
pub struct TradeBookResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default, rename = "tradeBook")]
    pub trade_book: Option<Vec<RawTrade>>,
}
