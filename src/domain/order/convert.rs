//! Conversions: order wire types → Order domain types.

use super::wire::{BatchItem, BatchResponse, OrderAckResponse, OrderBookResponse, RawOrder};
use super::{Order, OrderAck, OrderBook, OrdersOverall};
use crate::codes::{
    Exchange, InstrumentType, OrderSide, OrderSource, OrderStatus, OrderType, OrderValidity,
    ProductType, Segment, WireCode,
};
use crate::error::{ApiError, DecodeError, SdkError};
use crate::shared::serde_util;

impl TryFrom<RawOrder> for Order {
    type Error = DecodeError;

    fn try_from(raw: RawOrder) -> Result<Self, Self::Error> {
        let placed_at = serde_util::parse_optional_exchange_datetime(&raw.order_date_time)?;
        Ok(Order {
            exchange: raw.exchange.and_then(Exchange::from_wire),
            segment: raw.segment.and_then(Segment::from_wire),
            instrument: raw.instrument.and_then(InstrumentType::from_wire),
            side: raw.side.and_then(OrderSide::from_wire),
            order_type: raw.order_type.and_then(OrderType::from_wire),
            status: raw.status.and_then(OrderStatus::from_wire),
            product_type: raw.product_type.as_deref().and_then(ProductType::from_wire),
            validity: raw.order_validity.as_deref().and_then(OrderValidity::from_wire),
            source: raw.source.as_deref().and_then(OrderSource::from_wire),
            id: raw.id,
            exchange_order_id: raw.exch_ord_id,
            symbol: raw.symbol,
            description: raw.description,
            quantity: raw.qty,
            filled_quantity: raw.filled_qty,
            remaining_quantity: raw.remaining_quantity,
            disclosed_quantity: raw.disclose_qty,
            limit_price: raw.limit_price,
            stop_price: raw.stop_price,
            traded_price: raw.traded_price,
            ltp: raw.ltp,
            placed_at,
            offline: raw.offline_order,
            message: raw.message,
            fy_token: raw.fy_token,
        })
    }
}

impl OrdersOverall {
    /// Single pass over the raw records.
    pub fn from_raw(raw: &[RawOrder]) -> Self {
        raw.iter().fold(OrdersOverall::default(), |mut acc, o| {
            acc.count += 1;
            acc.total_quantity += o.qty;
            acc.total_filled += o.filled_qty;
            acc.total_remaining += o.remaining_quantity;
            acc.total_disclosed += o.disclose_qty;
            match o.status {
                Some(4) | Some(6) => acc.open += 1,
                Some(2) => acc.filled += 1,
                Some(1) => acc.cancelled += 1,
                Some(5) => acc.rejected += 1,
                _ => {}
            }
            acc
        })
    }
}

impl TryFrom<OrderBookResponse> for OrderBook {
    type Error = SdkError;

    fn try_from(resp: OrderBookResponse) -> Result<Self, Self::Error> {
        resp.envelope.ensure_ok()?;
        let raw = resp
            .order_book
            .ok_or(DecodeError::MissingField("orderBook"))?;
        let overall = OrdersOverall::from_raw(&raw);
        let orders = raw
            .into_iter()
            .map(Order::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(OrderBook { orders, overall })
    }
}

impl TryFrom<OrderAckResponse> for OrderAck {
    type Error = ApiError;

    fn try_from(resp: OrderAckResponse) -> Result<Self, Self::Error> {
        let id = resp.envelope.ensure_id(resp.id.as_deref())?;
        Ok(OrderAck {
            id,
            code: resp.envelope.code,
            message: resp.envelope.message,
        })
    }
}

fn batch_item_ack(item: BatchItem) -> Result<OrderAck, SdkError> {
    let status_code = item.status_code;
    let ack = OrderAck::try_from(item.body)?;
    if status_code >= 400 {
        return Err(ApiError::new(ack.code, ack.message).into());
    }
    Ok(ack)
}

/// Split one batch response into one result per submitted item.
///
/// The outer status failing fails the call. Otherwise item `i` is decided by
/// entry `i` alone; entries missing from the response become
/// `DecodeError::MissingBatchItem` for their slot.
pub fn fan_out_batch(
    resp: BatchResponse,
    expected: usize,
) -> Result<Vec<Result<OrderAck, SdkError>>, SdkError> {
    resp.envelope.ensure_ok()?;
    let items = resp.data.ok_or(DecodeError::MissingField("data"))?;
    if items.len() > expected {
        tracing::warn!(
            expected,
            received = items.len(),
            "batch response has more entries than requests"
        );
    }

    let mut items = items.into_iter();
    Ok((0..expected)
        .map(|index| match items.next() {
            Some(item) => batch_item_ack(item),
            None => Err(DecodeError::MissingBatchItem { index }.into()),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn raw_order(id: &str, status: i32, qty: i64, filled: i64, disclosed: i64) -> serde_json::Value {
        json!({
            "id": id,
            "exchOrdId": "1100000012345",
            "symbol": "NSE:SBIN-EQ",
            "description": "STATE BANK OF INDIA",
            "exchange": 10,
            "segment": 10,
            "instrument": 0,
            "side": 1,
            "type": 1,
            "status": status,
            "productType": "INTRADAY",
            "orderValidity": "DAY",
            "source": "W",
            "qty": qty,
            "filledQty": filled,
            "remainingQuantity": qty - filled,
            "discloseQty": disclosed,
            "limitPrice": 560.5,
            "stopPrice": 0,
            "tradedPrice": 560.5,
            "lp": 561.2,
            "orderDateTime": "21-Nov-2022 10:00:00",
            "offlineOrder": false,
            "message": "",
            "fyToken": "10100000003045"
        })
    }

    fn book(orders: Vec<serde_json::Value>) -> OrderBookResponse {
        serde_json::from_value(json!({
            "s": "ok",
            "code": 200,
            "message": "",
            "orderBook": orders
        }))
        .unwrap()
    }

    #[test]
    fn test_order_fields_decode() {
        let resp = book(vec![raw_order("221121000001", 2, 10, 10, 0)]);
        let book = OrderBook::try_from(resp).unwrap();
        let order = &book.orders[0];
        assert_eq!(order.id, "221121000001");
        assert_eq!(order.side, Some(OrderSide::Buy));
        assert_eq!(order.status, Some(OrderStatus::Filled));
        assert_eq!(order.order_type, Some(OrderType::Limit));
        assert_eq!(order.product_type, Some(ProductType::Intraday));
        assert_eq!(order.source, Some(OrderSource::Web));
        assert_eq!(order.instrument, Some(InstrumentType::Equity));
        assert_eq!(order.limit_price, Decimal::new(5605, 1));
        assert_eq!(order.ltp, Decimal::new(5612, 1));
        assert!(order.placed_at.is_some());
        assert!(!order.is_open());
    }

    #[test]
    fn test_overall_sums_raw_fields() {
        let resp = book(vec![
            raw_order("1", 6, 10, 0, 2),
            raw_order("2", 2, 25, 25, 0),
            raw_order("3", 1, 5, 0, 1),
            raw_order("4", 5, 7, 0, 0),
        ]);
        let book = OrderBook::try_from(resp).unwrap();
        let overall = book.overall;
        assert_eq!(overall.count, 4);
        assert_eq!(overall.total_quantity, 47);
        assert_eq!(overall.total_filled, 25);
        assert_eq!(overall.total_remaining, 22);
        assert_eq!(overall.total_disclosed, 3);
        assert_eq!(
            (overall.open, overall.filled, overall.cancelled, overall.rejected),
            (1, 1, 1, 1)
        );
        let ids: Vec<_> = book.orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_empty_book_has_zero_overall() {
        let book = OrderBook::try_from(book(vec![])).unwrap();
        assert!(book.orders.is_empty());
        assert_eq!(book.overall, OrdersOverall::default());
    }

    #[test]
    fn test_unknown_codes_decode_to_none() {
        let mut raw = raw_order("1", 99, 1, 0, 0);
        raw["side"] = json!(7);
        raw.as_object_mut().unwrap().remove("productType");
        let book = OrderBook::try_from(book(vec![raw])).unwrap();
        assert_eq!(book.orders[0].status, None);
        assert_eq!(book.orders[0].side, None);
        assert_eq!(book.orders[0].product_type, None);
    }

    #[test]
    fn test_error_status_is_api_error() {
        let resp: OrderBookResponse = serde_json::from_value(json!({
            "s": "error",
            "code": -15,
            "message": "Invalid token"
        }))
        .unwrap();
        let err = OrderBook::try_from(resp).unwrap_err();
        assert_eq!(err.api_code(), Some(-15));
    }

    #[test]
    fn test_missing_order_book_is_decode_error() {
        let resp: OrderBookResponse =
            serde_json::from_value(json!({"s": "ok", "code": 200, "message": ""})).unwrap();
        assert!(matches!(
            OrderBook::try_from(resp),
            Err(SdkError::Decode(DecodeError::MissingField("orderBook")))
        ));
    }

    #[test]
    fn test_ack_requires_id() {
        let ok: OrderAckResponse = serde_json::from_value(json!({
            "s": "ok", "code": 1101, "message": "Order submitted successfully", "id": "52104097616"
        }))
        .unwrap();
        assert_eq!(OrderAck::try_from(ok).unwrap().id, "52104097616");

        let empty: OrderAckResponse = serde_json::from_value(json!({
            "s": "ok", "code": 1101, "message": "Order submitted successfully", "id": ""
        }))
        .unwrap();
        let err = OrderAck::try_from(empty).unwrap_err();
        assert_eq!(err.code, 1101);
    }

    fn batch(entries: serde_json::Value) -> BatchResponse {
        serde_json::from_value(json!({"s": "ok", "code": 200, "message": "", "data": entries})).unwrap()
    }

    #[test]
    fn test_batch_failure_is_isolated() {
        let resp = batch(json!([
            {"statusCode": 200, "body": {"s": "ok", "code": 1102, "message": "modified", "id": "A"}},
            {"statusCode": 400, "body": {"s": "error", "code": -52, "message": "not modifiable"}},
            {"statusCode": 200, "body": {"s": "ok", "code": 1102, "message": "modified", "id": "C"}}
        ]));
        let results = fan_out_batch(resp, 3).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().id, "A");
        assert_eq!(results[1].as_ref().unwrap_err().api_code(), Some(-52));
        assert_eq!(results[2].as_ref().unwrap().id, "C");
    }

    #[test]
    fn test_batch_missing_entry() {
        let resp = batch(json!([
            {"statusCode": 200, "body": {"s": "ok", "code": 1101, "message": "", "id": "A"}}
        ]));
        let results = fan_out_batch(resp, 2).unwrap();
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(SdkError::Decode(DecodeError::MissingBatchItem { index: 1 }))
        ));
    }

    #[test]
    fn test_batch_http_status_overrides_ok_body() {
        let resp = batch(json!([
            {"statusCode": 500, "body": {"s": "ok", "code": 1101, "message": "odd", "id": "A"}}
        ]));
        let results = fan_out_batch(resp, 1).unwrap();
        assert_eq!(results[0].as_ref().unwrap_err().api_code(), Some(1101));
    }

    #[test]
    fn test_batch_outer_failure_fails_call() {
        let resp: BatchResponse = serde_json::from_value(json!({
            "s": "error", "code": -16, "message": "unauthorized"
        }))
        .unwrap();
        assert_eq!(fan_out_batch(resp, 3).unwrap_err().api_code(), Some(-16));
    }
}
