//! Conversions from wire types to domain types for trades.

use super::wire::{RawTrade, TradeBookResponse};
use super::{Trade, TradeBook, TradesOverall};
use crate::codes::{Exchange, OrderSide, ProductType, Segment, WireCode};
use crate::error::{DecodeError, SdkError};
use crate::shared::serde_util;

impl TryFrom<RawTrade> for Trade {
    type Error = DecodeError;

    fn try_from(t: RawTrade) -> Result<Self, Self::Error> {
        Ok(Self {
            traded_at: serde_util::parse_optional_exchange_datetime(&t.order_date_time)?,
            exchange: t.exchange.and_then(Exchange::from_wire),
            segment: t.segment.and_then(Segment::from_wire),
            side: t.side.and_then(OrderSide::from_wire),
            product_type: t.product_type.as_deref().and_then(ProductType::from_wire),
            trade_number: t.trade_number,
            order_number: t.order_number,
            exchange_order_number: t.exchange_order_no,
            symbol: t.symbol,
            price: t.trade_price,
            quantity: t.traded_qty,
            value: t.trade_value,
            fy_token: t.fy_token,
        })
    }
}

impl TradesOverall {
    pub fn from_raw(raw: &[RawTrade]) -> Self {
        raw.iter().fold(TradesOverall::default(), |mut acc, t| {
            acc.count += 1;
            acc.total_quantity += t.traded_qty;
            acc.total_value += t.trade_value;
            match t.side {
                Some(1) => acc.buy_count += 1,
                Some(-1) => acc.sell_count += 1,
                _ => {}
            }
            acc
        })
    }
}

impl TryFrom<TradeBookResponse> for TradeBook {
    type Error = SdkError;

    fn try_from(resp: TradeBookResponse) -> Result<Self, Self::Error> {
        resp.envelope.ensure_ok()?;
        let raw = resp
            .trade_book
            .ok_or(DecodeError::MissingField("tradeBook"))?;
        let overall = TradesOverall::from_raw(&raw);
        let trades = raw
            .into_iter()
            .map(Trade::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TradeBook { trades, overall })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn sample_trade(number: &str, side: i32, qty: i64, price: &str) -> serde_json::Value {
        let price: Decimal = price.parse().unwrap();
        json!({
            "tradeNumber": number,
            "orderNumber": "221121000001",
            "exchangeOrderNo": "1100000012345",
            "symbol": "NSE:SBIN-EQ",
            "exchange": 10,
            "segment": 10,
            "side": side,
            "productType": "CNC",
            "tradePrice": price.to_string(),
            "tradedQty": qty,
            "tradeValue": (price * Decimal::from(qty)).to_string(),
            "orderDateTime": "21-Nov-2022 10:15:02",
            "fyToken": "10100000003045"
        })
    }

    #[test]
    fn test_trade_book_overall() {
        let resp: TradeBookResponse = serde_json::from_value(json!({
            "s": "ok", "code": 200, "message": "",
            "tradeBook": [
                sample_trade("T1", 1, 10, "560.50"),
                sample_trade("T2", -1, 4, "562.00"),
                sample_trade("T3", 1, 1, "100")
            ]
        }))
        .unwrap();
        let book = TradeBook::try_from(resp).unwrap();
        assert_eq!(book.overall.count, 3);
        assert_eq!(book.overall.total_quantity, 15);
        assert_eq!(book.overall.total_value, Decimal::new(795300, 2));
        assert_eq!((book.overall.buy_count, book.overall.sell_count), (2, 1));

        let first = &book.trades[0];
        assert_eq!(first.trade_number, "T1");
        assert_eq!(first.side, Some(OrderSide::Buy));
        assert_eq!(first.price, Decimal::new(56050, 2));
        assert!(first.traded_at.is_some());
    }

    #[test]
    fn test_bad_timestamp_fails_loudly() {
        let mut trade = sample_trade("T1", 1, 1, "1");
        trade["orderDateTime"] = json!("yesterday");
        let resp: TradeBookResponse = serde_json::from_value(json!({
            "s": "ok", "code": 200, "message": "", "tradeBook": [trade]
        }))
        .unwrap();
        assert!(matches!(
            TradeBook::try_from(resp),
            Err(SdkError::Decode(DecodeError::Timestamp { .. }))
        ));
    }
}
