//! Position domain — net positions, conversion between products, exits.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod request;
pub mod wire;

use crate::codes::{PositionSide, ProductType, Segment};
use crate::shared::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use request::{ConvertPositionBody, ConvertPositionRequest, ExitPositionBody, ExitPositionRequest};

/// A net position for the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// `SYMBOL-PRODUCT`, used to exit a single position.
    pub id: String,
    pub symbol: Symbol,
    pub side: Option<PositionSide>,
    pub segment: Option<Segment>,
    pub product_type: Option<ProductType>,
    pub net_quantity: i64,
    pub quantity: i64,
    pub average_price: Decimal,
    pub net_average: Decimal,
    pub buy_quantity: i64,
    pub buy_average: Decimal,
    pub buy_value: Decimal,
    pub sell_quantity: i64,
    pub sell_average: Decimal,
    pub sell_value: Decimal,
    pub realized_pl: Decimal,
    pub unrealized_pl: Decimal,
    pub pl: Decimal,
    pub ltp: Decimal,
    pub fy_token: String,
}

impl Position {
    pub fn is_open(&self) -> bool {
        self.net_quantity != 0
    }
}

/// Totals over the raw positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionsOverall {
    pub count_total: usize,
    pub count_open: usize,
    pub pl_total: Decimal,
    pub pl_realized: Decimal,
    pub pl_unrealized: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Positions {
    pub items: Vec<Position>,
    pub overall: PositionsOverall,
}

/// Result of a convert or exit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionAck {
    pub code: i64,
    pub message: String,
}
