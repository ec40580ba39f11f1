//! Wire types for `GET /holdings`.

use crate::shared::{serde_util, Envelope, Symbol};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawHolding {
    #[serde(default, with = "serde_util::lenient_i64")]
    pub id: i64,
    #[serde(default)]
    pub symbol: Symbol,
    #[serde(default)]
    pub isin: String,
    #[serde(default)]
    pub holding_type: Option<String>,
    #[serde(default)]
    pub exchange: Option<i32>,
    #[serde(default)]
    pub segment: Option<i32>,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub quantity: i64,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub remaining_quantity: i64,
    #[serde(default, rename = "qty_t1", with = "serde_util::lenient_i64")]
    pub qty_t1: i64,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub collateral_quantity: i64,
    #[serde(default)]
    pub cost_price: Decimal,
    #[serde(default)]
    pub market_val: Decimal,
    #[serde(default)]
    pub pl: Decimal,
    #[serde(default)]
    pub ltp: Decimal,
    #[serde(default)]
    pub fy_token: String,
}

/// The server also sends its own `overall` block; it is ignored in favour of
/// totals computed from `holdings`.
#[derive(Deserialize, Debug, Clone)]
pub struct HoldingsResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub holdings: Option<Vec<RawHolding>>,
}
