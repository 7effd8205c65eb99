//! Market endpoints: market listings, market-cap history and the
//! exchange-markets ticker.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::NomicsError;
use crate::rest::NomicsRestClient;
use crate::rest::endpoints::paths;
use crate::types::common::TickerInterval;
use crate::types::serde_helpers::comma_separated;

/// Request parameters for market listings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MarketsRequest {
    /// Nomics exchange ID to filter by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    /// Base currency IDs to filter by.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub base: Vec<String>,
    /// Quote currency IDs to filter by.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub quote: Vec<String>,
}

impl MarketsRequest {
    /// Create an empty request (all markets).
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by exchange.
    pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Filter by base currencies.
    pub fn base<I, S>(mut self, base: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base = base.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by quote currencies.
    pub fn quote<I, S>(mut self, quote: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quote = quote.into_iter().map(Into::into).collect();
        self
    }
}

/// One market on one exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct Market {
    /// Nomics exchange ID.
    pub exchange: String,
    /// Market symbol as listed by the exchange.
    pub market: String,
    /// Base currency ID.
    #[serde(default)]
    pub base: Option<String>,
    /// Quote currency ID.
    #[serde(default)]
    pub quote: Option<String>,
}

/// Request parameters for market-cap history.
#[derive(Debug, Clone, Serialize)]
pub struct MarketCapHistoryRequest {
    /// Start of the history window.
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    /// End of the window (defaults to now).
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub end: Option<OffsetDateTime>,
    /// Quote currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<String>,
    /// Include the transparent market cap series.
    #[serde(
        rename = "include-transparency",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub include_transparency: bool,
}

impl MarketCapHistoryRequest {
    /// Create a market-cap history request starting at `start`.
    pub fn new(start: OffsetDateTime) -> Self {
        Self {
            start,
            end: None,
            convert: None,
            include_transparency: false,
        }
    }

    /// Set the end of the window.
    pub fn end(mut self, end: OffsetDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the quote currency.
    pub fn convert(mut self, convert: impl Into<String>) -> Self {
        self.convert = Some(convert.into());
        self
    }

    /// Request the transparent market cap series.
    pub fn include_transparency(mut self) -> Self {
        self.include_transparency = true;
        self
    }
}

/// One point of the total market-cap history.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketCapHistoryEntry {
    /// Sample timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Total market capitalization.
    #[serde(default)]
    pub market_cap: Option<Decimal>,
    /// Market capitalization from transparent volume only.
    #[serde(default)]
    pub transparent_market_cap: Option<Decimal>,
}

/// Request parameters for the exchange-markets ticker.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExchangeMarketsTickerRequest {
    /// Rolling windows to return interval statistics for.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub interval: Vec<TickerInterval>,
    /// Currency IDs to filter by (either side of the market).
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub currency: Vec<String>,
    /// Base currency IDs to filter by.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub base: Vec<String>,
    /// Quote currency IDs to filter by.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub quote: Vec<String>,
    /// Nomics exchange IDs to filter by.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub exchange: Vec<String>,
    /// Market symbols to filter by.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub market: Vec<String>,
    /// Quote currency for converted prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<String>,
    /// Market status filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Free-text search over market names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Page size.
    #[serde(rename = "per-page", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ExchangeMarketsTickerRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the interval windows to return.
    pub fn interval(mut self, interval: impl IntoIterator<Item = TickerInterval>) -> Self {
        self.interval = interval.into_iter().collect();
        self
    }

    /// Filter by currency IDs.
    pub fn currency<I, S>(mut self, currency: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.currency = currency.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by base currencies.
    pub fn base<I, S>(mut self, base: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.base = base.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by quote currencies.
    pub fn quote<I, S>(mut self, quote: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.quote = quote.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by exchanges.
    pub fn exchange<I, S>(mut self, exchange: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exchange = exchange.into_iter().map(Into::into).collect();
        self
    }

    /// Filter by market symbols.
    pub fn market<I, S>(mut self, market: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.market = market.into_iter().map(Into::into).collect();
        self
    }

    /// Set the quote currency for converted prices.
    pub fn convert(mut self, convert: impl Into<String>) -> Self {
        self.convert = Some(convert.into());
        self
    }

    /// Set the status filter.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set a free-text search.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the page size.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Ticker statistics for one market on one exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeMarketTicker {
    /// Nomics exchange ID.
    pub exchange: String,
    /// Market symbol as listed by the exchange.
    pub market: String,
    /// Market type (e.g. "spot", "derivative").
    #[serde(rename = "type", default)]
    pub market_type: Option<String>,
    /// Market subtype.
    #[serde(rename = "subtype", default)]
    pub sub_type: Option<String>,
    /// Whether this row aggregates several markets.
    #[serde(default)]
    pub aggregated: Option<bool>,
    /// Whether the market is excluded from price calculation.
    #[serde(default)]
    pub price_exclude: Option<bool>,
    /// Whether the market is excluded from volume calculation.
    #[serde(default)]
    pub volume_exclude: Option<bool>,
    /// Base currency ID.
    #[serde(default)]
    pub base: Option<String>,
    /// Quote currency ID.
    #[serde(default)]
    pub quote: Option<String>,
    /// Base currency symbol on the exchange.
    #[serde(default)]
    pub base_symbol: Option<String>,
    /// Quote currency symbol on the exchange.
    #[serde(default)]
    pub quote_symbol: Option<String>,
    /// Price in the convert currency.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Price in the quote currency.
    #[serde(default)]
    pub price_quote: Option<Decimal>,
    /// 24h volume in USD.
    #[serde(default)]
    pub volume_usd: Option<Decimal>,
    /// Last update time.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub last_updated: Option<OffsetDateTime>,
    /// One-hour statistics.
    #[serde(rename = "1h", default)]
    pub one_hour: Option<ExchangeMarketIntervalStats>,
    /// One-day statistics.
    #[serde(rename = "1d", default)]
    pub one_day: Option<ExchangeMarketIntervalStats>,
    /// Seven-day statistics.
    #[serde(rename = "7d", default)]
    pub seven_days: Option<ExchangeMarketIntervalStats>,
    /// Thirty-day statistics.
    #[serde(rename = "30d", default)]
    pub thirty_days: Option<ExchangeMarketIntervalStats>,
    /// 365-day statistics.
    #[serde(rename = "365d", default)]
    pub one_year: Option<ExchangeMarketIntervalStats>,
    /// Year-to-date statistics.
    #[serde(rename = "ytd", default)]
    pub year_to_date: Option<ExchangeMarketIntervalStats>,
}

/// Rolling statistics for one interval window of an exchange market.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeMarketIntervalStats {
    /// Volume in the convert currency.
    #[serde(default)]
    pub volume: Option<Decimal>,
    /// Volume in the base currency.
    #[serde(default)]
    pub volume_base: Option<Decimal>,
    /// Absolute volume change.
    #[serde(default)]
    pub volume_change: Option<Decimal>,
    /// Absolute base-volume change.
    #[serde(default)]
    pub volume_base_change: Option<Decimal>,
    /// Number of trades.
    #[serde(default)]
    pub trades: Option<Decimal>,
    /// Change in number of trades.
    #[serde(default)]
    pub trades_change: Option<Decimal>,
    /// Absolute price change.
    #[serde(default)]
    pub price_change: Option<Decimal>,
    /// Absolute quote-price change.
    #[serde(default)]
    pub price_quote_change: Option<Decimal>,
}

impl NomicsRestClient {
    /// Get the markets Nomics tracks, optionally filtered by exchange and
    /// base/quote currencies.
    pub async fn get_markets(&self, request: &MarketsRequest) -> Result<Vec<Market>, NomicsError> {
        self.get_json_with_params(paths::MARKETS, request).await
    }

    /// Download market listings as CSV into `path`.
    pub async fn get_markets_csv(
        &self,
        request: &MarketsRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        self.get_csv_with_params(paths::MARKETS, request, path).await
    }

    /// Get the total market-cap history of all cryptoassets.
    pub async fn get_market_cap_history(
        &self,
        request: &MarketCapHistoryRequest,
    ) -> Result<Vec<MarketCapHistoryEntry>, NomicsError> {
        self.get_json_with_params(paths::MARKET_CAP_HISTORY, request)
            .await
    }

    /// Download the market-cap history as CSV into `path`.
    pub async fn get_market_cap_history_csv(
        &self,
        request: &MarketCapHistoryRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        self.get_csv_with_params(paths::MARKET_CAP_HISTORY, request, path)
            .await
    }

    /// Get per-market ticker statistics across exchanges.
    pub async fn get_exchange_markets_ticker(
        &self,
        request: &ExchangeMarketsTickerRequest,
    ) -> Result<Vec<ExchangeMarketTicker>, NomicsError> {
        self.get_json_with_params(paths::EXCHANGE_MARKETS_TICKER, request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markets_request_query_string() {
        let request = MarketsRequest::new()
            .exchange("binance")
            .base(["BNB", "LTC"])
            .quote(["BTC", "ETH"]);
        let query = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(query, "exchange=binance&base=BNB%2CLTC&quote=BTC%2CETH");
    }

    #[test]
    fn test_market_deserialize() {
        let json = r#"{"exchange":"binance","market":"BNBBTC","base":"BNB","quote":"BTC"}"#;
        let market: Market = serde_json::from_str(json).unwrap();
        assert_eq!(market.exchange, "binance");
        assert_eq!(market.base.as_deref(), Some("BNB"));
    }

    #[test]
    fn test_exchange_market_ticker_renames_type() {
        let json = r#"{
            "exchange": "binance",
            "market": "BTCUSDT",
            "type": "spot",
            "aggregated": false,
            "price": "33245.10",
            "1d": {"volume": "1983493.23", "trades": "1432"}
        }"#;
        let ticker: ExchangeMarketTicker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.market_type.as_deref(), Some("spot"));
        assert_eq!(ticker.aggregated, Some(false));
        assert_eq!(ticker.one_day.unwrap().trades.unwrap().to_string(), "1432");
    }
}
