//! REST round trips against a local mock server.
//!
//! Each test mounts the broker's response shape on a `wiremock` server and
//! checks what the sub-client hands back.

use fyers_sdk::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, FyersClient) {
    let server = MockServer::start().await;
    let client = FyersClient::builder()
        .api_url(&format!("{}/api", server.uri()))
        .data_url(&format!("{}/data", server.uri()))
        .authorization(Authorization::new("APP-100", "tok"))
        .build()
        .expect("client should build");
    (server, client)
}

fn ok(extra: serde_json::Value) -> serde_json::Value {
    let mut body = json!({"s": "ok", "code": 200, "message": ""});
    if let (Some(body), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        body.extend(extra.clone());
    }
    body
}

#[tokio::test]
async fn profile_sends_authorization_header() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .and(header("Authorization", "APP-100:tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "data": {"fy_id": "XA00001", "name": "TEST USER", "email_id": "t@example.com", "PAN": "ABCDE1234F"}
        }))))
        .mount(&server)
        .await;

    let profile = client.profile().get().await.unwrap();
    assert_eq!(profile.fy_id, "XA00001");
    assert_eq!(profile.pan, "ABCDE1234F");
}

#[tokio::test]
async fn error_status_with_envelope_is_api_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "s": "error", "code": -16, "message": "Could not authenticate the user"
        })))
        .mount(&server)
        .await;

    let err = client.profile().get().await.unwrap_err();
    assert_eq!(err.api_code(), Some(-16));
}

#[tokio::test]
async fn non_json_error_is_http_status() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/funds"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let err = client.funds().get().await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Http(HttpError::Status { status: 502, .. })
    ));
}

#[tokio::test]
async fn order_book_with_overall() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "orderBook": [
                {"id": "1", "symbol": "NSE:SBIN-EQ", "status": 6, "side": 1, "type": 1,
                 "qty": 10, "filledQty": 0, "remainingQuantity": 10, "limitPrice": 560.5},
                {"id": "2", "symbol": "NSE:TCS-EQ", "status": 2, "side": -1, "type": 2,
                 "qty": 4, "filledQty": 4, "remainingQuantity": 0}
            ]
        }))))
        .mount(&server)
        .await;

    let book = client.orders().book().await.unwrap();
    assert_eq!(book.orders.len(), 2);
    assert_eq!(book.overall.count, 2);
    assert_eq!(book.overall.total_quantity, 14);
    assert_eq!(book.overall.open, 1);
    assert_eq!(book.overall.filled, 1);
    assert_eq!(book.orders[1].side, Some(OrderSide::Sell));
}

#[tokio::test]
async fn place_order_posts_body() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(body_json(json!({
            "symbol": "NSE:SBIN-EQ", "qty": 1, "type": 2, "side": 1, "productType": "INTRADAY",
            "limitPrice": 0.0, "stopPrice": 0.0, "validity": "DAY", "disclosedQty": 0,
            "offlineOrder": "False", "stopLoss": 0.0, "takeProfit": 0.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "s": "ok", "code": 1101, "message": "Order submitted successfully", "id": "52104097616"
        })))
        .mount(&server)
        .await;

    let ack = client
        .orders()
        .place(&PlaceOrderRequest::market("NSE:SBIN-EQ", OrderSide::Buy, 1))
        .await
        .unwrap();
    assert_eq!(ack.id, "52104097616");
}

#[tokio::test]
async fn batch_failure_stays_in_its_slot() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/orders-multi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "data": [
                {"statusCode": 200, "body": {"s": "ok", "code": 1103, "message": "cancelled", "id": "A"}},
                {"statusCode": 400, "body": {"s": "error", "code": -52, "message": "not cancellable"}},
                {"statusCode": 200, "body": {"s": "ok", "code": 1103, "message": "cancelled", "id": "C"}}
            ]
        }))))
        .mount(&server)
        .await;

    let results = client
        .orders()
        .cancel_batch(&[
            CancelOrderRequest::new("A"),
            CancelOrderRequest::new("B"),
            CancelOrderRequest::new("C"),
        ])
        .await
        .unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().id, "A");
    assert_eq!(results[1].as_ref().unwrap_err().api_code(), Some(-52));
    assert_eq!(results[2].as_ref().unwrap().id, "C");
}

#[tokio::test]
async fn batch_invalid_item_is_not_sent() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/orders-multi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "data": [
                {"statusCode": 200, "body": {"s": "ok", "code": 1101, "message": "", "id": "first"}},
                {"statusCode": 200, "body": {"s": "ok", "code": 1101, "message": "", "id": "third"}}
            ]
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let results = client
        .orders()
        .place_batch(&[
            PlaceOrderRequest::market("NSE:SBIN-EQ", OrderSide::Buy, 1),
            PlaceOrderRequest::market("NSE:SBIN-EQ", OrderSide::Buy, 0),
            PlaceOrderRequest::market("NSE:TCS-EQ", OrderSide::Sell, 2),
        ])
        .await
        .unwrap();
    assert_eq!(results[0].as_ref().unwrap().id, "first");
    assert!(matches!(results[1], Err(SdkError::Validation(_))));
    assert_eq!(results[2].as_ref().unwrap().id, "third");
}

#[tokio::test]
async fn batch_missing_entry_reports_input_slot() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/orders-multi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "data": [
                {"statusCode": 200, "body": {"s": "ok", "code": 1101, "message": "", "id": "first"}}
            ]
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let results = client
        .orders()
        .place_batch(&[
            PlaceOrderRequest::market("NSE:SBIN-EQ", OrderSide::Buy, 0),
            PlaceOrderRequest::market("NSE:SBIN-EQ", OrderSide::Buy, 1),
            PlaceOrderRequest::market("NSE:TCS-EQ", OrderSide::Sell, 2),
        ])
        .await
        .unwrap();
    assert!(matches!(results[0], Err(SdkError::Validation(_))));
    assert_eq!(results[1].as_ref().unwrap().id, "first");
    assert!(matches!(
        results[2],
        Err(SdkError::Decode(DecodeError::MissingBatchItem { index: 2 }))
    ));
}

#[tokio::test]
async fn holdings_overall() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/holdings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "holdings": [
                {"symbol": "NSE:SBIN-EQ", "quantity": 10, "costPrice": 500, "marketVal": 5600, "pl": 600},
                {"symbol": "NSE:TCS-EQ", "quantity": 2, "costPrice": 3000, "marketVal": 5800, "pl": -200}
            ],
            "overall": {"count_total": 99}
        }))))
        .mount(&server)
        .await;

    let holdings = client.holdings().get().await.unwrap();
    assert_eq!(holdings.overall.count, 2);
    assert_eq!(holdings.overall.total_investment, Decimal::from(11000));
    assert_eq!(holdings.overall.total_pl, Decimal::from(400));
}

#[tokio::test]
async fn history_uses_data_url() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/data/history"))
        .and(query_param("symbol", "NSE:SBIN-EQ"))
        .and(query_param("resolution", "D"))
        .and(query_param("date_format", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "candles": [[1700000000, 558, 562, 557, 560.5, 1000], [1700086400, 560.5, 565, 559, 564, 1200]]
        }))))
        .mount(&server)
        .await;

    let request = HistoryRequest::new(
        "NSE:SBIN-EQ",
        Resolution::Day,
        HistoryRange::Epoch { from: 1700000000, to: 1700086400 },
    );
    let history = client.market_data().history(&request).await.unwrap();
    assert_eq!(history.candles.len(), 2);
    assert_eq!(history.overall.high, Decimal::from(565));
    assert_eq!(history.overall.volume, 2200);
}

#[tokio::test]
async fn depth_empty_and_single() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/data/depth"))
        .and(query_param("symbol", "NSE:NONE-EQ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({"d": {}}))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/depth"))
        .and(query_param("symbol", "NSE:SBIN-EQ"))
        .and(query_param("ohlcv_flag", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({
            "d": {"NSE:SBIN-EQ": {
                "totalbuyqty": 10, "totalsellqty": 20,
                "bids": [{"price": 560.4, "volume": 10, "ord": 1}],
                "ask": [{"price": 560.6, "volume": 20, "ord": 2}],
                "ltp": 560.5
            }}
        }))))
        .mount(&server)
        .await;

    let none = client
        .market_data()
        .depth(&DepthRequest::new("NSE:NONE-EQ"))
        .await
        .unwrap();
    assert!(none.is_none());

    let book = client
        .market_data()
        .depth(&DepthRequest::new("NSE:SBIN-EQ"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(book.bids[0].quantity, 10);
    assert_eq!(book.asks[0].orders, 2);
}

#[tokio::test]
async fn validation_fails_before_any_request() {
    let (server, client) = setup().await;
    let err = client
        .market_data()
        .quotes(&QuotesRequest::new(Vec::<Symbol>::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn validate_auth_code_installs_token() {
    let server = MockServer::start().await;
    let client = FyersClient::builder()
        .api_url(&format!("{}/api", server.uri()))
        .app_id("APP-100")
        .build()
        .unwrap();
    Mock::given(method("POST"))
        .and(path("/api/validate-authcode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok(json!({"access_token": "fresh"}))))
        .mount(&server)
        .await;

    let token = client.auth().validate_auth_code("secret", "code-123").await.unwrap();
    assert_eq!(token, "fresh");
    assert_eq!(
        client.authorization().await.unwrap().header_value(),
        "APP-100:fresh"
    );
}
