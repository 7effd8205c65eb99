use std::path::PathBuf;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nomics_api_client::auth::ApiKey;
use nomics_api_client::error::NomicsError;
use nomics_api_client::rest::NomicsRestClient;
use nomics_api_client::rest::markets::MarketsRequest;

fn build_client(server: &MockServer) -> NomicsRestClient {
    NomicsRestClient::builder(ApiKey::new("test-key"))
        .base_url(server.uri())
        .build()
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("nomics_{}_{}", std::process::id(), name))
}

#[tokio::test]
async fn test_markets_csv_written_verbatim() {
    let server = MockServer::start().await;
    let body = "exchange,market,base,quote\nbinance,BNBBTC,BNB,BTC\nbinance,LTCBTC,LTC,BTC\n";

    Mock::given(method("GET"))
        .and(path("/markets"))
        .and(query_param("key", "test-key"))
        .and(query_param("exchange", "binance"))
        .and(query_param("format", "csv"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/csv"),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = MarketsRequest::new().exchange("binance");
    let target = temp_file("markets.csv");

    client.get_markets_csv(&request, &target).await.unwrap();

    let saved = tokio::fs::read_to_string(&target).await.unwrap();
    assert_eq!(saved, body);

    tokio::fs::remove_file(&target).await.unwrap();
}

#[tokio::test]
async fn test_exchange_rates_csv_appends_format() {
    let server = MockServer::start().await;
    let body = "currency,rate,timestamp\nEUR,1.2103,2021-02-11T00:00:00Z\n";

    Mock::given(method("GET"))
        .and(path("/exchange-rates"))
        .and(query_param("key", "test-key"))
        .and(query_param("format", "csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let target = temp_file("rates.csv");

    client.get_exchange_rates_csv(&target).await.unwrap();

    let saved = tokio::fs::read_to_string(&target).await.unwrap();
    assert_eq!(saved, body);

    tokio::fs::remove_file(&target).await.unwrap();
}

#[tokio::test]
async fn test_csv_download_surfaces_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let target = temp_file("missing.csv");

    let error = client
        .get_markets_csv(&MarketsRequest::new(), &target)
        .await
        .unwrap_err();

    assert!(matches!(error, NomicsError::Status { status: 404, .. }));
    // The file is only created once the status check passes.
    assert!(!target.exists());
}
