use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nomics_api_client::auth::ApiKey;
use nomics_api_client::error::NomicsError;
use nomics_api_client::rest::NomicsRestClient;
use nomics_api_client::rest::candles::ExchangeCandlesRequest;
use nomics_api_client::rest::currencies::{CurrenciesTickerRequest, SupplyHistoryRequest};
use nomics_api_client::rest::global::GlobalTickerRequest;
use nomics_api_client::rest::markets::MarketsRequest;
use nomics_api_client::rest::orders::OrdersSnapshotRequest;
use nomics_api_client::rest::predictions::PredictionsHistoryRequest;
use nomics_api_client::rest::trades::TradesRequest;
use nomics_api_client::types::common::{CandleInterval, SortOrder, TickerInterval};
use time::macros::datetime;

fn build_client(server: &MockServer) -> NomicsRestClient {
    NomicsRestClient::builder(ApiKey::new("test-key"))
        .base_url(server.uri())
        .build()
}

#[tokio::test]
async fn test_get_currencies_ticker() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "id": "BTC",
        "status": "active",
        "price": "44822.12",
        "price_date": "2021-02-10T00:00:00Z",
        "symbol": "BTC",
        "name": "Bitcoin",
        "rank": "1",
        "num_exchanges": "372",
        "1d": {
            "price_change": "1302.61",
            "price_change_pct": "0.0411",
            "volume": "48111129924.90"
        }
    }]);

    Mock::given(method("GET"))
        .and(path("/currencies/ticker"))
        .and(query_param("key", "test-key"))
        .and(query_param("ids", "BTC,ETH"))
        .and(query_param("interval", "1d"))
        .and(query_param("convert", "EUR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = CurrenciesTickerRequest::new()
        .ids(["BTC", "ETH"])
        .interval([TickerInterval::OneDay])
        .convert("EUR");
    let ticker = client.get_currencies_ticker(&request).await.unwrap();

    assert_eq!(ticker.len(), 1);
    assert_eq!(ticker[0].id, "BTC");
    assert_eq!(ticker[0].rank, Some(1));
    let one_day = ticker[0].one_day.as_ref().unwrap();
    assert_eq!(one_day.price_change_pct.unwrap().to_string(), "0.0411");
}

#[tokio::test]
async fn test_get_markets() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {"exchange": "binance", "market": "BNBBTC", "base": "BNB", "quote": "BTC"},
        {"exchange": "binance", "market": "LTCBTC", "base": "LTC", "quote": "BTC"}
    ]);

    Mock::given(method("GET"))
        .and(path("/markets"))
        .and(query_param("key", "test-key"))
        .and(query_param("exchange", "binance"))
        .and(query_param("base", "BNB,LTC"))
        .and(query_param("quote", "BTC,ETH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = MarketsRequest::new()
        .exchange("binance")
        .base(["BNB", "LTC"])
        .quote(["BTC", "ETH"]);
    let markets = client.get_markets(&request).await.unwrap();

    assert_eq!(markets.len(), 2);
    assert!(markets.iter().all(|m| m.base.is_some()));
}

#[tokio::test]
async fn test_get_exchange_rates() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {"currency": "USD", "rate": "1.0", "timestamp": "2021-02-11T00:00:00Z"},
        {"currency": "EUR", "rate": "1.2103", "timestamp": "2021-02-11T00:00:00Z"}
    ]);

    Mock::given(method("GET"))
        .and(path("/exchange-rates"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let rates = client.get_exchange_rates().await.unwrap();

    assert_eq!(rates.len(), 2);
    assert_eq!(rates[1].currency, "EUR");
    assert_eq!(rates[1].rate.unwrap().to_string(), "1.2103");
}

#[tokio::test]
async fn test_get_global_ticker() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "num_currencies": "13259",
        "num_currencies_active": "8136",
        "market_cap": "1444490472904",
        "1d": {
            "market_cap_change": "61101976945",
            "volume": "186535351228.11"
        }
    }]);

    Mock::given(method("GET"))
        .and(path("/global-ticker"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let ticker = client
        .get_global_ticker(&GlobalTickerRequest::new())
        .await
        .unwrap();

    assert_eq!(ticker.len(), 1);
    assert_eq!(ticker[0].num_currencies, Some(13259));
    assert!(ticker[0].one_day.is_some());
}

#[tokio::test]
async fn test_get_trades() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {"id": "1", "timestamp": "2021-02-10T15:00:00Z", "price": 44822.12, "volume": "0.5112"},
        {"id": "2", "timestamp": "2021-02-10T15:00:01Z", "price": 44823.01, "volume": "0.0021"}
    ]);

    Mock::given(method("GET"))
        .and(path("/trades"))
        .and(query_param("key", "test-key"))
        .and(query_param("exchange", "binance"))
        .and(query_param("market", "BTCUSDT"))
        .and(query_param("limit", "2"))
        .and(query_param("order", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = TradesRequest::new("binance", "BTCUSDT")
        .limit(2)
        .order(SortOrder::Desc);
    let trades = client.get_trades(&request).await.unwrap();

    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].id, "1");
    assert!(trades[0].price.is_some());
}

#[tokio::test]
async fn test_get_orders_snapshot() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "timestamp": "2021-02-10T15:00:00Z",
        "bids": [[44820.10, 0.25], [44819.55, 1.02]],
        "asks": [[44822.00, 0.55]]
    });

    Mock::given(method("GET"))
        .and(path("/orders/snapshot"))
        .and(query_param("key", "test-key"))
        .and(query_param("exchange", "binance"))
        .and(query_param("market", "BTCUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = OrdersSnapshotRequest::new("binance", "BTCUSDT");
    let snapshot = client.get_orders_snapshot(&request).await.unwrap();

    assert_eq!(snapshot.bids.len(), 2);
    assert_eq!(snapshot.asks.len(), 1);
    assert_eq!(snapshot.bids[0].amount.to_string(), "0.25");
}

#[tokio::test]
async fn test_get_exchange_candles_null_outliers() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "timestamp": "2021-02-10T00:00:00Z",
        "low": "43737.72",
        "open": "46469.39",
        "close": "44836.69",
        "high": "47299.99",
        "volume": "2522225524",
        "num_trades": "1196973",
        "price_outlier": null,
        "volume_outlier": null
    }]);

    Mock::given(method("GET"))
        .and(path("/exchange_candles"))
        .and(query_param("key", "test-key"))
        .and(query_param("interval", "1h"))
        .and(query_param("exchange", "binance"))
        .and(query_param("market", "BTCUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = ExchangeCandlesRequest::new(CandleInterval::OneHour, "binance", "BTCUSDT");
    let candles = client.get_exchange_candles(&request).await.unwrap();

    assert_eq!(candles.len(), 1);
    assert_eq!(candles[0].num_trades, Some(1196973));
    assert!(!candles[0].price_outlier);
    assert!(!candles[0].volume_outlier);
}

#[tokio::test]
async fn test_get_predictions_history() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "id": "ETH",
        "interval": "30d",
        "predictions": [{
            "price_change_pct": "0.0852",
            "price_end": "1901.22",
            "actual_price_end": "1799.55",
            "price_start": "1752.01",
            "timestamp_end": "2021-03-10T00:00:00Z",
            "timestamp_start": "2021-02-10T00:00:00Z"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/currencies/predictions/history"))
        .and(query_param("key", "test-key"))
        .and(query_param("id", "ETH"))
        .and(query_param("interval", "30d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = PredictionsHistoryRequest::new().id("ETH").interval("30d");
    let history = client.get_predictions_history(&request).await.unwrap();

    assert_eq!(history.id.as_deref(), Some("ETH"));
    assert_eq!(history.predictions.len(), 1);
    assert_eq!(
        history.predictions[0].actual_price_end.unwrap().to_string(),
        "1799.55"
    );
}

#[tokio::test]
async fn test_missing_field_fails_before_request() {
    // No mocks are mounted: if the client issued a request anyway, the mock
    // server would answer 404 and the error would be Status, not MissingField.
    let server = MockServer::start().await;
    let client = build_client(&server);

    let request = SupplyHistoryRequest::new("", datetime!(2021-01-01 00:00 UTC));
    let error = client.get_supply_history(&request).await.unwrap_err();

    assert!(matches!(error, NomicsError::MissingField("currency")));
}

#[tokio::test]
async fn test_non_200_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/exchange-rates"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.get_exchange_rates().await.unwrap_err();

    match error {
        NomicsError::Status { status, reason } => {
            assert_eq!(status, 500);
            assert_eq!(reason, "Internal Server Error");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/exchange-rates"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let error = client.get_exchange_rates().await.unwrap_err();

    assert!(matches!(error, NomicsError::InvalidResponse(_)));
    assert!(error.to_string().contains("not json at all"));
}
