//! Order domain — order book, single orders, mutation acks, batch fan-out.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod request;
pub mod wire;

use crate::codes::{
    Exchange, InstrumentType, OrderSide, OrderSource, OrderStatus, OrderType, OrderValidity,
    ProductType, Segment,
};
use crate::shared::Symbol;
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use convert::fan_out_batch;
pub use request::{
    CancelOrderBody, CancelOrderRequest, ModifyOrderBody, ModifyOrderRequest, PlaceOrderBody,
    PlaceOrderRequest,
};

// ─── Order ───────────────────────────────────────────────────────────────────

/// One order from the order book or an order-update notification.
///
/// Categorical fields are `None` when the wire code is absent or unknown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub exchange_order_id: String,
    pub symbol: Symbol,
    pub description: String,
    pub exchange: Option<Exchange>,
    pub segment: Option<Segment>,
    pub instrument: Option<InstrumentType>,
    pub side: Option<OrderSide>,
    pub order_type: Option<OrderType>,
    pub status: Option<OrderStatus>,
    pub product_type: Option<ProductType>,
    pub validity: Option<OrderValidity>,
    pub source: Option<OrderSource>,
    pub quantity: i64,
    pub filled_quantity: i64,
    pub remaining_quantity: i64,
    pub disclosed_quantity: i64,
    pub limit_price: Decimal,
    pub stop_price: Decimal,
    pub traded_price: Decimal,
    pub ltp: Decimal,
    pub placed_at: Option<DateTime<FixedOffset>>,
    pub offline: bool,
    pub message: String,
    pub fy_token: String,
}

impl Order {
    pub fn is_open(&self) -> bool {
        self.status.is_some_and(|s| s.is_open())
    }
}

// ─── OrderBook ───────────────────────────────────────────────────────────────

/// Totals over the raw order book.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrdersOverall {
    pub count: usize,
    pub total_quantity: i64,
    pub total_filled: i64,
    pub total_remaining: i64,
    pub total_disclosed: i64,
    /// Pending or in transit.
    pub open: usize,
    pub filled: usize,
    pub cancelled: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderBook {
    pub orders: Vec<Order>,
    pub overall: OrdersOverall,
}

// ─── Acks ────────────────────────────────────────────────────────────────────

/// Result of a successful place / modify / cancel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderAck {
    pub id: String,
    pub code: i64,
    pub message: String,
}
