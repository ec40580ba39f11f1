//! Holding domain — demat holdings and T1 quantities.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::codes::{Exchange, HoldingType, Segment};
use crate::shared::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One demat holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub id: i64,
    pub symbol: Symbol,
    pub isin: String,
    pub holding_type: Option<HoldingType>,
    pub exchange: Option<Exchange>,
    pub segment: Option<Segment>,
    pub quantity: i64,
    pub remaining_quantity: i64,
    /// Bought, not yet delivered.
    pub t1_quantity: i64,
    pub collateral_quantity: i64,
    pub cost_price: Decimal,
    pub market_value: Decimal,
    pub pl: Decimal,
    pub ltp: Decimal,
    pub fy_token: String,
}

impl Holding {
    pub fn investment(&self) -> Decimal {
        self.cost_price * Decimal::from(self.quantity)
    }
}

/// Totals over the raw holdings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HoldingsOverall {
    pub count: usize,
    pub total_investment: Decimal,
    pub total_current_value: Decimal,
    pub total_pl: Decimal,
    /// `total_pl / total_investment × 100`, zero without investment.
    pub pl_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holdings {
    pub items: Vec<Holding>,
    pub overall: HoldingsOverall,
}
