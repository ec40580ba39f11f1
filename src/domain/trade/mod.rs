//! Trade domain — the day's executions.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::codes::{Exchange, OrderSide, ProductType, Segment};
use crate::shared::Symbol;
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A trade execution record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub trade_number: String,
    pub order_number: String,
    pub exchange_order_number: String,
    pub symbol: Symbol,
    pub exchange: Option<Exchange>,
    pub segment: Option<Segment>,
    pub side: Option<OrderSide>,
    pub product_type: Option<ProductType>,
    pub price: Decimal,
    pub quantity: i64,
    pub value: Decimal,
    pub traded_at: Option<DateTime<FixedOffset>>,
    pub fy_token: String,
}

/// Totals over the raw trade book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TradesOverall {
    pub count: usize,
    pub total_quantity: i64,
    pub total_value: Decimal,
    pub buy_count: usize,
    pub sell_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeBook {
    pub trades: Vec<Trade>,
    pub overall: TradesOverall,
}
