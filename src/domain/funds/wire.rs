//! Wire types for `GET /funds`.

use crate::shared::Envelope;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawFundLimit {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub equity_amount: Decimal,
    #[serde(default)]
    pub commodity_amount: Decimal,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FundsResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default)]
    pub fund_limit: Option<Vec<RawFundLimit>>,
}
