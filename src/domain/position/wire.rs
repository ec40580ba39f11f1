//! Wire types for position responses (REST).

use crate::shared::{serde_util, Envelope, Symbol};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One entry of `netPositions`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawPosition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub symbol: Symbol,
    #[serde(default)]
    pub side: Option<i32>,
    #[serde(default)]
    pub segment: Option<i32>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub net_qty: i64,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub qty: i64,
    #[serde(default)]
    pub avg_price: Decimal,
    #[serde(default)]
    pub net_avg: Decimal,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub buy_qty: i64,
    #[serde(default)]
    pub buy_avg: Decimal,
    #[serde(default)]
    pub buy_val: Decimal,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub sell_qty: i64,
    #[serde(default)]
    pub sell_avg: Decimal,
    #[serde(default)]
    pub sell_val: Decimal,
    #[serde(default, rename = "realized_profit")]
    pub realized_profit: Decimal,
    #[serde(default, rename = "unrealized_profit")]
    pub unrealized_profit: Decimal,
    #[serde(default)]
    pub pl: Decimal,
    #[serde(default)]
    pub ltp: Decimal,
    #[serde(default)]
    pub fy_token: String,
}

/// `GET /positions`.
#[derive(Deserialize, Debug, Clone)]
pub struct PositionsResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default, rename = "netPositions")]
    pub net_positions: Option<Vec<RawPosition>>,
}

/// `PUT` / `DELETE /positions`.
#[derive(Deserialize, Debug, Clone)]
pub struct PositionAckResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
}
