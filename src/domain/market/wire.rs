//! Wire types for market status and the data endpoints.

use crate::shared::{serde_util, Envelope, Symbol};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

// ─── Market status ───────────────────────────────────────────────────────────

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawMarketStatus {
    #[serde(default)]
    pub exchange: Option<i32>,
    #[serde(default)]
    pub segment: Option<i32>,
    #[serde(default)]
    pub market_type: String,
    #[serde(default)]
    pub status: String,
}

/// `GET /market-status`.
#[derive(Deserialize, Debug, Clone)]
pub struct MarketStatusResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default, rename = "marketStatus")]
    pub market_status: Option<Vec<RawMarketStatus>>,
}

// ─── History ─────────────────────────────────────────────────────────────────

/// `[epoch, open, high, low, close, volume]`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RawCandle(
    #[serde(with = "serde_util::lenient_i64")] pub i64,
    pub Decimal,
    pub Decimal,
    pub Decimal,
    pub Decimal,
    #[serde(with = "serde_util::lenient_i64")] pub i64,
);

/// `GET /history`.
#[derive(Deserialize, Debug, Clone)]
pub struct HistoryResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub candles: Option<Vec<RawCandle>>,
}

// ─── Quotes ──────────────────────────────────────────────────────────────────

/// The `v` object of a quote entry. Failed entries carry `code`/`errmsg`
/// instead of prices.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawQuoteValues {
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub lp: Decimal,
    #[serde(default)]
    pub ch: Decimal,
    #[serde(default)]
    pub chp: Decimal,
    #[serde(default)]
    pub open_price: Decimal,
    #[serde(default)]
    pub high_price: Decimal,
    #[serde(default)]
    pub low_price: Decimal,
    #[serde(default)]
    pub prev_close_price: Decimal,
    #[serde(default)]
    pub bid: Decimal,
    #[serde(default)]
    pub ask: Decimal,
    #[serde(default)]
    pub spread: Decimal,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub volume: i64,
    #[serde(default, rename = "fyToken")]
    pub fy_token: String,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub tt: i64,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub errmsg: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawQuote {
    /// Symbol as requested.
    #[serde(default)]
    pub n: Symbol,
    /// Per-symbol status.
    #[serde(default)]
    pub s: String,
    #[serde(default)]
    pub v: RawQuoteValues,
}

/// `GET /quotes`.
#[derive(Deserialize, Debug, Clone)]
pub struct QuotesResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub d: Option<Vec<RawQuote>>,
}

// ─── Depth ───────────────────────────────────────────────────────────────────

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawDepthLevel {
    #[serde(default)]
    pub price: Decimal,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub volume: i64,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub ord: i64,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawDepth {
    #[serde(default, with = "serde_util::lenient_i64")]
    pub totalbuyqty: i64,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub totalsellqty: i64,
    #[serde(default)]
    pub bids: Vec<RawDepthLevel>,
    #[serde(default)]
    pub ask: Vec<RawDepthLevel>,
    #[serde(default)]
    pub o: Decimal,
    #[serde(default)]
    pub h: Decimal,
    #[serde(default)]
    pub l: Decimal,
    #[serde(default)]
    pub c: Decimal,
    #[serde(default)]
    pub ltp: Decimal,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub ltq: i64,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub ltt: i64,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub v: i64,
    #[serde(default)]
    pub atp: Decimal,
    #[serde(default)]
    pub ch: Decimal,
    #[serde(default)]
    pub chp: Decimal,
    #[serde(default)]
    pub lower_ckt: Decimal,
    #[serde(default)]
    pub upper_ckt: Decimal,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub oi: i64,
    #[serde(default, with = "serde_util::lenient_i64")]
    pub pdoi: i64,
}

/// `GET /depth`. `d` is keyed by the requested symbol.
#[derive(Deserialize, Debug, Clone)]
pub struct DepthResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub d: Option<BTreeMap<String, RawDepth>>,
}
