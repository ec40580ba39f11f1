//! Conversions: position wire types → Position domain types.

use super::wire::{PositionAckResponse, PositionsResponse, RawPosition};
use super::{Position, PositionAck, Positions, PositionsOverall};
use crate::codes::{PositionSide, ProductType, Segment, WireCode};
use crate::error::{ApiError, DecodeError, SdkError};

impl From<RawPosition> for Position {
    fn from(raw: RawPosition) -> Self {
        Position {
            side: raw.side.and_then(PositionSide::from_wire),
            segment: raw.segment.and_then(Segment::from_wire),
            product_type: raw.product_type.as_deref().and_then(ProductType::from_wire),
            id: raw.id,
            symbol: raw.symbol,
            net_quantity: raw.net_qty,
            quantity: raw.qty,
            average_price: raw.avg_price,
            net_average: raw.net_avg,
            buy_quantity: raw.buy_qty,
            buy_average: raw.buy_avg,
            buy_value: raw.buy_val,
            sell_quantity: raw.sell_qty,
            sell_average: raw.sell_avg,
            sell_value: raw.sell_val,
            realized_pl: raw.realized_profit,
            unrealized_pl: raw.unrealized_profit,
            pl: raw.pl,
            ltp: raw.ltp,
            fy_token: raw.fy_token,
        }
    }
}

impl PositionsOverall {
    pub fn from_raw(raw: &[RawPosition]) -> Self {
        raw.iter().fold(PositionsOverall::default(), |mut acc, p| {
            acc.count_total += 1;
            if p.net_qty != 0 {
                acc.count_open += 1;
            }
            acc.pl_total += p.pl;
            acc.pl_realized += p.realized_profit;
            acc.pl_unrealized += p.unrealized_profit;
            acc
        })
    }
}

impl TryFrom<PositionsResponse> for Positions {
    type Error = SdkError;

    fn try_from(resp: PositionsResponse) -> Result<Self, Self::Error> {
        resp.envelope.ensure_ok()?;
        let raw = resp
            .net_positions
            .ok_or(DecodeError::MissingField("netPositions"))?;
        let overall = PositionsOverall::from_raw(&raw);
        Ok(Positions {
            items: raw.into_iter().map(Position::from).collect(),
            overall,
        })
    }
}

impl TryFrom<PositionAckResponse> for PositionAck {
    type Error = ApiError;

    fn try_from(resp: PositionAckResponse) -> Result<Self, Self::Error> {
        resp.envelope.ensure_ok()?;
        Ok(PositionAck {
            code: resp.envelope.code,
            message: resp.envelope.message,
        })
    }
}
