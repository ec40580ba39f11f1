//! Market domain — market status, candles, quotes, depth.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod request;
pub mod wire;

use crate::codes::{wire_codec, Exchange, Segment};
use crate::shared::Symbol;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use request::{DepthRequest, HistoryRange, HistoryRequest, QuotesRequest, MAX_QUOTE_SYMBOLS};

// ─── Resolution ──────────────────────────────────────────────────────────────

wire_codec! {
    /// Candle resolution.
    pub enum Resolution: &'static str {
        Minute1 = "1", "1M", "1 minute";
        Minute2 = "2", "2M", "2 minutes";
        Minute3 = "3", "3M", "3 minutes";
        Minute5 = "5", "5M", "5 minutes";
        Minute10 = "10", "10M", "10 minutes";
        Minute15 = "15", "15M", "15 minutes";
        Minute20 = "20", "20M", "20 minutes";
        Minute30 = "30", "30M", "30 minutes";
        Minute60 = "60", "60M", "60 minutes";
        Minute120 = "120", "120M", "120 minutes";
        Minute240 = "240", "240M", "240 minutes";
        Day = "D", "1D", "1 day";
    }
}

// ─── Market status ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStatus {
    pub exchange: Option<Exchange>,
    pub segment: Option<Segment>,
    pub market_type: String,
    pub status: String,
}

impl MarketStatus {
    pub fn is_open(&self) -> bool {
        self.status.eq_ignore_ascii_case("OPEN")
    }
}

// ─── History ─────────────────────────────────────────────────────────────────

/// One OHLCV candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: i64,
}

/// Summary of a candle series.
///
/// `from_date`/`open` come from the first candle and `to_date`/`close` from
/// the last; high, low and volume are reduced over the series. All zero when
/// the series is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryOverall {
    /// Epoch seconds.
    pub from_date: i64,
    /// Epoch seconds.
    pub to_date: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketHistory {
    pub candles: Vec<Candle>,
    pub overall: HistoryOverall,
}

// ─── Quotes ──────────────────────────────────────────────────────────────────

/// Level-1 snapshot for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Symbol,
    pub short_name: String,
    pub description: String,
    pub exchange: String,
    pub ltp: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub prev_close: Decimal,
    pub bid: Decimal,
    pub ask: Decimal,
    pub spread: Decimal,
    pub volume: i64,
    pub fy_token: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A symbol the quotes call could not serve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteError {
    pub symbol: Symbol,
    pub code: i64,
    pub message: String,
}

/// Quotes are served per symbol; one bad symbol does not fail the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotes {
    pub quotes: Vec<Quote>,
    pub errors: Vec<QuoteError>,
}

// ─── Depth ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthLevel {
    pub price: Decimal,
    pub quantity: i64,
    pub orders: i64,
}

/// Level-2 book for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDepth {
    pub symbol: Symbol,
    pub total_buy_quantity: i64,
    pub total_sell_quantity: i64,
    /// Best first.
    pub bids: Vec<DepthLevel>,
    /// Best first.
    pub asks: Vec<DepthLevel>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub ltp: Decimal,
    pub last_traded_quantity: i64,
    pub last_traded_at: Option<DateTime<Utc>>,
    pub volume: i64,
    pub average_price: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub lower_circuit: Decimal,
    pub upper_circuit: Decimal,
    pub open_interest: i64,
    pub prev_open_interest: i64,
}
