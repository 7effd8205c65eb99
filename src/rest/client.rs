//! Nomics REST API client implementation.

use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use url::Url;

use crate::auth::ApiKey;
use crate::error::NomicsError;
use crate::rest::candles::{
    Candle, CandlesRequest, ExchangeCandlesRequest, MarketCandle, MarketCandlesRequest,
};
use crate::rest::currencies::{
    CurrenciesMetadataRequest, CurrenciesSparklineRequest, CurrenciesTickerRequest,
    CurrencyMetadata, CurrencySparkline, CurrencyTicker, SupplyHistoryEntry, SupplyHistoryRequest,
};
use crate::rest::endpoints::NOMICS_BASE_URL;
use crate::rest::exchange_rates::{
    ExchangeRate, ExchangeRateHistoryEntry, ExchangeRatesHistoryRequest,
};
use crate::rest::exchanges::{
    ExchangeMetadata, ExchangeTicker, ExchangesMetadataRequest, ExchangesTickerRequest,
    ExchangesVolumeHistoryRequest,
};
use crate::rest::global::{GlobalTicker, GlobalTickerRequest};
use crate::rest::markets::{
    ExchangeMarketTicker, ExchangeMarketsTickerRequest, Market, MarketCapHistoryEntry,
    MarketCapHistoryRequest, MarketsRequest,
};
use crate::rest::orders::{OrdersSnapshot, OrdersSnapshotRequest};
use crate::rest::predictions::{
    CurrencyPredictions, PredictionsHistory, PredictionsHistoryRequest, PredictionsTickerRequest,
};
use crate::rest::trades::{Trade, TradesRequest};
use crate::rest::traits::NomicsClient;
use crate::rest::volume::{VolumeHistoryEntry, VolumeHistoryRequest};
use crate::types::common::Format;

/// The Nomics REST API client.
///
/// This client provides access to all Nomics v1 market-data endpoints. It
/// appends the API key to every request and centralizes status checking and
/// response decoding.
///
/// # Example
///
/// ```rust,no_run
/// use nomics_api_client::rest::NomicsRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = NomicsRestClient::new("your-api-key");
///     let rates = client.get_exchange_rates().await?;
///     println!("{} exchange rates", rates.len());
///     Ok(())
/// }
/// ```
///
/// Use the builder to point the client at a different base URL (e.g. a mock
/// server) or set a request timeout:
///
/// ```rust,no_run
/// use std::time::Duration;
/// use nomics_api_client::auth::ApiKey;
/// use nomics_api_client::rest::NomicsRestClient;
///
/// let client = NomicsRestClient::builder(ApiKey::new("your-api-key"))
///     .timeout(Duration::from_secs(10))
///     .build();
/// ```
#[derive(Clone)]
pub struct NomicsRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    api_key: ApiKey,
}

impl NomicsRestClient {
    /// Create a new client with default settings.
    ///
    /// Use [`NomicsRestClient::builder()`] to configure the base URL, user
    /// agent or timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder(ApiKey::new(api_key)).build()
    }

    /// Create a new client builder.
    pub fn builder(api_key: ApiKey) -> NomicsRestClientBuilder {
        NomicsRestClientBuilder::new(api_key)
    }

    /// Make a GET request without endpoint-specific parameters.
    pub(crate) async fn get_json<T>(&self, endpoint: &str) -> Result<T, NomicsError>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(endpoint, "", None)?;
        let response = self.http_client.get(url.as_str()).send().await?;
        Self::parse_response(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_json_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<T, NomicsError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let query = serde_urlencoded::to_string(params)?;
        let url = self.build_url(endpoint, &query, None)?;
        let response = self.http_client.get(url.as_str()).send().await?;
        Self::parse_response(response).await
    }

    /// Request a CSV body and stream it into `path`.
    pub(crate) async fn get_csv(&self, endpoint: &str, path: &Path) -> Result<(), NomicsError> {
        let url = self.build_url(endpoint, "", Some(Format::Csv))?;
        self.download(url, path).await
    }

    /// Request a CSV body with query parameters and stream it into `path`.
    pub(crate) async fn get_csv_with_params<Q>(
        &self,
        endpoint: &str,
        params: &Q,
        path: &Path,
    ) -> Result<(), NomicsError>
    where
        Q: Serialize + ?Sized,
    {
        let query = serde_urlencoded::to_string(params)?;
        let url = self.build_url(endpoint, &query, Some(Format::Csv))?;
        self.download(url, path).await
    }

    /// Build the full request URL: base + endpoint, `key`, endpoint
    /// parameters and the optional `format` selector.
    fn build_url(
        &self,
        endpoint: &str,
        query: &str,
        format: Option<Format>,
    ) -> Result<Url, NomicsError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", self.api_key.expose());
            for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
                pairs.append_pair(&name, &value);
            }
            if let Some(format) = format {
                pairs.append_pair("format", format.as_str());
            }
        }
        Ok(url)
    }

    /// Check for a 200 response, surfacing anything else as an error.
    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, NomicsError> {
        let status = response.status();
        if status != StatusCode::OK {
            return Err(NomicsError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }
        Ok(response)
    }

    /// Decode a JSON response body.
    async fn parse_response<T>(response: reqwest::Response) -> Result<T, NomicsError>
    where
        T: DeserializeOwned,
    {
        let response = Self::check_status(response)?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            NomicsError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        })
    }

    /// Stream a response body into a file on disk.
    async fn download(&self, url: Url, path: &Path) -> Result<(), NomicsError> {
        let response = self.http_client.get(url.as_str()).send().await?;
        let mut response = Self::check_status(response)?;

        let mut file = tokio::fs::File::create(path).await?;
        let mut written = 0usize;
        while let Some(chunk) = response.chunk().await? {
            written += chunk.len();
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        debug!(bytes = written, path = %path.display(), "saved CSV response");
        Ok(())
    }
}

impl std::fmt::Debug for NomicsRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NomicsRestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for [`NomicsRestClient`].
pub struct NomicsRestClientBuilder {
    api_key: ApiKey,
    base_url: String,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl NomicsRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: NOMICS_BASE_URL.to_string(),
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> NomicsRestClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("nomics-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("nomics-api-client"));
        headers.insert(USER_AGENT, header_value);

        // Build the HTTP client with middleware.
        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let reqwest_client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        NomicsRestClient {
            http_client: client,
            base_url: self.base_url,
            api_key: self.api_key,
        }
    }
}

// NomicsClient trait implementation.

impl NomicsClient for NomicsRestClient {
    // ========== Currencies ==========

    async fn get_currencies_ticker(
        &self,
        request: &CurrenciesTickerRequest,
    ) -> Result<Vec<CurrencyTicker>, NomicsError> {
        NomicsRestClient::get_currencies_ticker(self, request).await
    }

    async fn get_currencies_metadata(
        &self,
        request: &CurrenciesMetadataRequest,
    ) -> Result<Vec<CurrencyMetadata>, NomicsError> {
        NomicsRestClient::get_currencies_metadata(self, request).await
    }

    async fn get_currencies_metadata_csv(
        &self,
        request: &CurrenciesMetadataRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        NomicsRestClient::get_currencies_metadata_csv(self, request, path).await
    }

    async fn get_currencies_sparkline(
        &self,
        request: &CurrenciesSparklineRequest,
    ) -> Result<Vec<CurrencySparkline>, NomicsError> {
        NomicsRestClient::get_currencies_sparkline(self, request).await
    }

    async fn get_supply_history(
        &self,
        request: &SupplyHistoryRequest,
    ) -> Result<Vec<SupplyHistoryEntry>, NomicsError> {
        NomicsRestClient::get_supply_history(self, request).await
    }

    async fn get_supply_history_csv(
        &self,
        request: &SupplyHistoryRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        NomicsRestClient::get_supply_history_csv(self, request, path).await
    }

    // ========== Markets ==========

    async fn get_markets(&self, request: &MarketsRequest) -> Result<Vec<Market>, NomicsError> {
        NomicsRestClient::get_markets(self, request).await
    }

    async fn get_markets_csv(
        &self,
        request: &MarketsRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        NomicsRestClient::get_markets_csv(self, request, path).await
    }

    async fn get_market_cap_history(
        &self,
        request: &MarketCapHistoryRequest,
    ) -> Result<Vec<MarketCapHistoryEntry>, NomicsError> {
        NomicsRestClient::get_market_cap_history(self, request).await
    }

    async fn get_market_cap_history_csv(
        &self,
        request: &MarketCapHistoryRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        NomicsRestClient::get_market_cap_history_csv(self, request, path).await
    }

    async fn get_exchange_markets_ticker(
        &self,
        request: &ExchangeMarketsTickerRequest,
    ) -> Result<Vec<ExchangeMarketTicker>, NomicsError> {
        NomicsRestClient::get_exchange_markets_ticker(self, request).await
    }

    // ========== Volume ==========

    async fn get_volume_history(
        &self,
        request: &VolumeHistoryRequest,
    ) -> Result<Vec<VolumeHistoryEntry>, NomicsError> {
        NomicsRestClient::get_volume_history(self, request).await
    }

    async fn get_volume_history_csv(
        &self,
        request: &VolumeHistoryRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        NomicsRestClient::get_volume_history_csv(self, request, path).await
    }

    // ========== Exchange rates ==========

    async fn get_exchange_rates(&self) -> Result<Vec<ExchangeRate>, NomicsError> {
        NomicsRestClient::get_exchange_rates(self).await
    }

    async fn get_exchange_rates_csv(&self, path: &Path) -> Result<(), NomicsError> {
        NomicsRestClient::get_exchange_rates_csv(self, path).await
    }

    async fn get_exchange_rates_history(
        &self,
        request: &ExchangeRatesHistoryRequest,
    ) -> Result<Vec<ExchangeRateHistoryEntry>, NomicsError> {
        NomicsRestClient::get_exchange_rates_history(self, request).await
    }

    async fn get_exchange_rates_history_csv(
        &self,
        request: &ExchangeRatesHistoryRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        NomicsRestClient::get_exchange_rates_history_csv(self, request, path).await
    }

    // ========== Global ==========

    async fn get_global_ticker(
        &self,
        request: &GlobalTickerRequest,
    ) -> Result<Vec<GlobalTicker>, NomicsError> {
        NomicsRestClient::get_global_ticker(self, request).await
    }

    // ========== Exchanges ==========

    async fn get_exchanges_ticker(
        &self,
        request: &ExchangesTickerRequest,
    ) -> Result<Vec<ExchangeTicker>, NomicsError> {
        NomicsRestClient::get_exchanges_ticker(self, request).await
    }

    async fn get_exchanges_volume_history(
        &self,
        request: &ExchangesVolumeHistoryRequest,
    ) -> Result<Vec<VolumeHistoryEntry>, NomicsError> {
        NomicsRestClient::get_exchanges_volume_history(self, request).await
    }

    async fn get_exchanges_volume_history_csv(
        &self,
        request: &ExchangesVolumeHistoryRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        NomicsRestClient::get_exchanges_volume_history_csv(self, request, path).await
    }

    async fn get_exchanges_metadata(
        &self,
        request: &ExchangesMetadataRequest,
    ) -> Result<Vec<ExchangeMetadata>, NomicsError> {
        NomicsRestClient::get_exchanges_metadata(self, request).await
    }

    async fn get_exchanges_metadata_csv(
        &self,
        request: &ExchangesMetadataRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        NomicsRestClient::get_exchanges_metadata_csv(self, request, path).await
    }

    // ========== Candles ==========

    async fn get_candles(&self, request: &CandlesRequest) -> Result<Vec<Candle>, NomicsError> {
        NomicsRestClient::get_candles(self, request).await
    }

    async fn get_candles_csv(
        &self,
        request: &CandlesRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        NomicsRestClient::get_candles_csv(self, request, path).await
    }

    async fn get_exchange_candles(
        &self,
        request: &ExchangeCandlesRequest,
    ) -> Result<Vec<MarketCandle>, NomicsError> {
        NomicsRestClient::get_exchange_candles(self, request).await
    }

    async fn get_exchange_candles_csv(
        &self,
        request: &ExchangeCandlesRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        NomicsRestClient::get_exchange_candles_csv(self, request, path).await
    }

    async fn get_market_candles(
        &self,
        request: &MarketCandlesRequest,
    ) -> Result<Vec<MarketCandle>, NomicsError> {
        NomicsRestClient::get_market_candles(self, request).await
    }

    async fn get_market_candles_csv(
        &self,
        request: &MarketCandlesRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        NomicsRestClient::get_market_candles_csv(self, request, path).await
    }

    // ========== Trades ==========

    async fn get_trades(&self, request: &TradesRequest) -> Result<Vec<Trade>, NomicsError> {
        NomicsRestClient::get_trades(self, request).await
    }

    async fn get_trades_csv(
        &self,
        request: &TradesRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        NomicsRestClient::get_trades_csv(self, request, path).await
    }

    // ========== Orders ==========

    async fn get_orders_snapshot(
        &self,
        request: &OrdersSnapshotRequest,
    ) -> Result<OrdersSnapshot, NomicsError> {
        NomicsRestClient::get_orders_snapshot(self, request).await
    }

    async fn get_orders_snapshot_csv(
        &self,
        request: &OrdersSnapshotRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        NomicsRestClient::get_orders_snapshot_csv(self, request, path).await
    }

    // ========== Predictions ==========

    async fn get_predictions_ticker(
        &self,
        request: &PredictionsTickerRequest,
    ) -> Result<Vec<CurrencyPredictions>, NomicsError> {
        NomicsRestClient::get_predictions_ticker(self, request).await
    }

    async fn get_predictions_history(
        &self,
        request: &PredictionsHistoryRequest,
    ) -> Result<PredictionsHistory, NomicsError> {
        NomicsRestClient::get_predictions_history(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> NomicsRestClient {
        NomicsRestClient::builder(ApiKey::new("test-key"))
            .base_url("https://example.com/v1")
            .build()
    }

    #[test]
    fn test_build_url_appends_key_first() {
        let client = test_client();
        let url = client.build_url("/markets", "", None).unwrap();
        assert_eq!(url.as_str(), "https://example.com/v1/markets?key=test-key");
    }

    #[test]
    fn test_build_url_merges_params() {
        let client = test_client();
        let url = client
            .build_url("/markets", "exchange=binance&base=BNB%2CLTC", None)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/v1/markets?key=test-key&exchange=binance&base=BNB%2CLTC"
        );
    }

    #[test]
    fn test_build_url_appends_csv_format_last() {
        let client = test_client();
        let url = client
            .build_url("/markets", "exchange=binance", Some(Format::Csv))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/v1/markets?key=test-key&exchange=binance&format=csv"
        );
    }
}
