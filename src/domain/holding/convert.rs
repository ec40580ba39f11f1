//! Conversions: holdings wire types → Holding domain types.

use super::wire::{HoldingsResponse, RawHolding};
use super::{Holding, Holdings, HoldingsOverall};
use crate::codes::{Exchange, HoldingType, Segment, WireCode};
use crate::error::{DecodeError, SdkError};
use rust_decimal::Decimal;

impl From<RawHolding> for Holding {
    fn from(raw: RawHolding) -> Self {
        Holding {
            holding_type: raw.holding_type.as_deref().and_then(HoldingType::from_wire),
            exchange: raw.exchange.and_then(Exchange::from_wire),
            segment: raw.segment.and_then(Segment::from_wire),
            id: raw.id,
            symbol: raw.symbol,
            isin: raw.isin,
            quantity: raw.quantity,
            remaining_quantity: raw.remaining_quantity,
            t1_quantity: raw.qty_t1,
            collateral_quantity: raw.collateral_quantity,
            cost_price: raw.cost_price,
            market_value: raw.market_val,
            pl: raw.pl,
            ltp: raw.ltp,
            fy_token: raw.fy_token,
        }
    }
}

impl HoldingsOverall {
    pub fn from_raw(raw: &[RawHolding]) -> Self {
        let mut overall = raw.iter().fold(HoldingsOverall::default(), |mut acc, h| {
            acc.count += 1;
            acc.total_investment += h.cost_price * Decimal::from(h.quantity);
            acc.total_current_value += h.market_val;
            acc.total_pl += h.pl;
            acc
        });
        if !overall.total_investment.is_zero() {
            overall.pl_percent = overall.total_pl / overall.total_investment * Decimal::ONE_HUNDRED;
        }
        overall
    }
}

impl TryFrom<HoldingsResponse> for Holdings {
    type Error = SdkError;

    fn try_from(resp: HoldingsResponse) -> Result<Self, Self::Error> {
        resp.envelope.ensure_ok()?;
        let raw = resp.holdings.ok_or(DecodeError::MissingField("holdings"))?;
        let overall = HoldingsOverall::from_raw(&raw);
        Ok(Holdings {
            items: raw.into_iter().map(Holding::from).collect(),
            overall,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_holdings_overall() {
        let resp: HoldingsResponse = serde_json::from_value(json!({
            "s": "ok", "code": 200, "message": "",
            "overall": {"count_total": 99},
            "holdings": [
                {
                    "id": 1, "symbol": "NSE:SBIN-EQ", "isin": "INE062A01020", "holdingType": "HLD",
                    "exchange": 10, "segment": 10, "quantity": 10, "remainingQuantity": 10,
                    "qty_t1": 0, "costPrice": 500, "marketVal": 5600, "pl": 600, "ltp": 560
                },
                {
                    "id": 2, "symbol": "NSE:TCS-EQ", "isin": "INE467B01029", "holdingType": "T1",
                    "exchange": 10, "segment": 10, "quantity": "2", "qty_t1": 2,
                    "costPrice": 3000, "marketVal": 5800, "pl": -200, "ltp": 2900
                }
            ]
        }))
        .unwrap();
        let holdings = Holdings::try_from(resp).unwrap();
        let overall = holdings.overall;
        assert_eq!(overall.count, 2);
        assert_eq!(overall.total_investment, Decimal::from(11000));
        assert_eq!(overall.total_current_value, Decimal::from(11400));
        assert_eq!(overall.total_pl, Decimal::from(400));
        assert_eq!(overall.pl_percent.round_dp(4), Decimal::new(36364, 4));

        assert_eq!(holdings.items[0].holding_type, Some(HoldingType::Hld));
        assert_eq!(holdings.items[1].t1_quantity, 2);
        assert_eq!(holdings.items[1].investment(), Decimal::from(6000));
    }

    #[test]
    fn test_empty_holdings_zero_percent() {
        let resp: HoldingsResponse =
            serde_json::from_value(json!({"s": "ok", "code": 200, "message": "", "holdings": []}))
                .unwrap();
        let holdings = Holdings::try_from(resp).unwrap();
        assert_eq!(holdings.overall, HoldingsOverall::default());
    }
}
