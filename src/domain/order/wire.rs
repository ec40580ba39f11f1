//! Wire types for order endpoints and order-update frames.

use crate::shared::{serde_util, Envelope, Symbol};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One entry of `orderBook`, also the `d` payload of an order-update frame.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawOrder {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub exch_ord_id: String,
    #[serde(default)]
    pub symbol: Symbol,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exchange: Option<i32>,
    #[serde(default)]
    pub segment: Option<i32>,
    #[serde(default)]
    pub instrument: Option<i32>,
    #[serde(default)]
    pub side: Option<i32>,
    #[serde(default, rename = "type")]
    pub order_type: Option<i32>,
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub order_validity: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub qty: i64,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub filled_qty: i64,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub remaining_quantity: i64,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub disclose_qty: i64,
    #[serde(default)]
    pub limit_price: Decimal,
    #[serde(default)]
    pub stop_price: Decimal,
    #[serde(default)]
    pub traded_price: Decimal,
    #[serde(default, rename = "lp")]
    pub ltp: Decimal,
    #[serde(default)]
    pub order_date_time: String,
    #[serde(default)]
    pub offline_order: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub fy_token: String,
}

/// `GET /orders` (optionally `?id=`).
#[derive(Deserialize, Debug, Clone)]
pub struct OrderBookResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default, rename = "orderBook")]
    pub order_book: Option<Vec<RawOrder>>,
}

/// Place / modify / cancel response, also the body of each batch entry.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OrderAckResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub id: Option<String>,
}

/// One entry of a batch response, in request order.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BatchItem {
    #[serde(default, rename = "statusCode")]
    pub status_code: i64,
    #[serde(default)]
    pub body: OrderAckResponse,
}

/// `/orders-multi` response.
#[derive(Deserialize, Debug, Clone)]
pub struct BatchResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub data: Option<Vec<BatchItem>>,
}
