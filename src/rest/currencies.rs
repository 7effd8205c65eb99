//! Currency endpoints: ticker, metadata, sparklines and supply history.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::NomicsError;
use crate::rest::NomicsRestClient;
use crate::rest::endpoints::paths;
use crate::types::common::{TickerInterval, VolumeTransparency};
use crate::types::serde_helpers::{comma_separated, optional_display_fromstr, rfc3339_vec};

/// Request parameters for the currencies ticker.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CurrenciesTickerRequest {
    /// Currency IDs to filter by (e.g. `["BTC", "ETH"]`). Empty means all.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    /// Rolling windows to return interval statistics for.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub interval: Vec<TickerInterval>,
    /// Quote currency for prices (default USD).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<String>,
    /// Currency status filter: "active", "inactive" or "dead".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Further filter: "any" or "new".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Sort order: "rank" or "first_priced_at".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Include volume transparency breakdowns.
    #[serde(
        rename = "include-transparency",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub include_transparency: bool,
    /// Page size (paid plans only).
    #[serde(rename = "per-page", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl CurrenciesTickerRequest {
    /// Create an empty request (all currencies, default intervals).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the ticker to specific currency IDs.
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Select the interval windows to return.
    pub fn interval(mut self, interval: impl IntoIterator<Item = TickerInterval>) -> Self {
        self.interval = interval.into_iter().collect();
        self
    }

    /// Set the quote currency.
    pub fn convert(mut self, convert: impl Into<String>) -> Self {
        self.convert = Some(convert.into());
        self
    }

    /// Set the status filter.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the "any"/"new" filter.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the sort order.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Request volume transparency breakdowns.
    pub fn include_transparency(mut self) -> Self {
        self.include_transparency = true;
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

/// Price and market-cap statistics for one currency.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyTicker {
    /// Nomics currency ID.
    pub id: String,
    /// Currency status ("active", "inactive", "dead").
    #[serde(default)]
    pub status: Option<String>,
    /// Current price in the quote currency.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Date the price applies to.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub price_date: Option<OffsetDateTime>,
    /// Moment the price was computed.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub price_timestamp: Option<OffsetDateTime>,
    /// Trading symbol.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Circulating supply.
    #[serde(default)]
    pub circulating_supply: Option<Decimal>,
    /// Maximum supply, if capped.
    #[serde(default)]
    pub max_supply: Option<Decimal>,
    /// Human-readable name.
    #[serde(default)]
    pub name: Option<String>,
    /// URL of the currency logo.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Market capitalization.
    #[serde(default)]
    pub market_cap: Option<Decimal>,
    /// Market capitalization from transparent volume only.
    #[serde(default)]
    pub transparent_market_cap: Option<Decimal>,
    /// Number of exchanges listing the currency.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub num_exchanges: Option<u32>,
    /// Number of mapped market pairs.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub num_pairs: Option<u32>,
    /// Number of unmapped market pairs.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub num_pairs_unmapped: Option<u32>,
    /// First candle seen.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub first_candle: Option<OffsetDateTime>,
    /// First trade seen.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub first_trade: Option<OffsetDateTime>,
    /// First order book seen.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub first_order_book: Option<OffsetDateTime>,
    /// First time a price was computed.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub first_priced_at: Option<OffsetDateTime>,
    /// Market-cap rank.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub rank: Option<i32>,
    /// Rank change over the requested interval.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub rank_delta: Option<i32>,
    /// All-time high price.
    #[serde(default)]
    pub high: Option<Decimal>,
    /// When the all-time high was set.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub high_timestamp: Option<OffsetDateTime>,
    /// One-hour statistics.
    #[serde(rename = "1h", default)]
    pub one_hour: Option<TickerIntervalStats>,
    /// One-day statistics.
    #[serde(rename = "1d", default)]
    pub one_day: Option<TickerIntervalStats>,
    /// Seven-day statistics.
    #[serde(rename = "7d", default)]
    pub seven_days: Option<TickerIntervalStats>,
    /// Thirty-day statistics.
    #[serde(rename = "30d", default)]
    pub thirty_days: Option<TickerIntervalStats>,
    /// 365-day statistics.
    #[serde(rename = "365d", default)]
    pub one_year: Option<TickerIntervalStats>,
    /// Year-to-date statistics.
    #[serde(rename = "ytd", default)]
    pub year_to_date: Option<TickerIntervalStats>,
}

/// Rolling statistics for one interval window of a currency.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerIntervalStats {
    /// Absolute price change.
    #[serde(default)]
    pub price_change: Option<Decimal>,
    /// Percent price change.
    #[serde(default)]
    pub price_change_pct: Option<Decimal>,
    /// Traded volume.
    #[serde(default)]
    pub volume: Option<Decimal>,
    /// Absolute volume change.
    #[serde(default)]
    pub volume_change: Option<Decimal>,
    /// Percent volume change.
    #[serde(default)]
    pub volume_change_pct: Option<Decimal>,
    /// Absolute market-cap change.
    #[serde(default)]
    pub market_cap_change: Option<Decimal>,
    /// Percent market-cap change.
    #[serde(default)]
    pub market_cap_change_pct: Option<Decimal>,
    /// Absolute transparent market-cap change.
    #[serde(default)]
    pub transparent_market_cap_change: Option<Decimal>,
    /// Percent transparent market-cap change.
    #[serde(default)]
    pub transparent_market_cap_change_pct: Option<Decimal>,
    /// Volume broken down by transparency grade.
    #[serde(default)]
    pub volume_transparency: Vec<VolumeTransparency>,
    /// Overall volume transparency grade.
    #[serde(default)]
    pub volume_transparency_grade: Option<String>,
}

/// Request parameters for currency metadata.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CurrenciesMetadataRequest {
    /// Currency IDs to filter by. Empty means all.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    /// Metadata attributes to return. Empty means all.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
}

impl CurrenciesMetadataRequest {
    /// Create an empty request (all currencies, all attributes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to specific currency IDs.
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the attributes returned.
    pub fn attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = attributes.into_iter().map(Into::into).collect();
        self
    }
}

/// Descriptive metadata for one currency.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyMetadata {
    /// Nomics currency ID.
    pub id: String,
    /// Symbol as listed by the project itself.
    #[serde(default)]
    pub original_symbol: Option<String>,
    /// Human-readable name.
    #[serde(default)]
    pub name: Option<String>,
    /// Project description.
    #[serde(default)]
    pub description: Option<String>,
    /// Project website.
    #[serde(default)]
    pub website_url: Option<String>,
    /// Logo URL.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Blog URL.
    #[serde(default)]
    pub blog_url: Option<String>,
    /// Discord URL.
    #[serde(default)]
    pub discord_url: Option<String>,
    /// Facebook URL.
    #[serde(default)]
    pub facebook_url: Option<String>,
    /// GitHub URL.
    #[serde(default)]
    pub github_url: Option<String>,
    /// Medium URL.
    #[serde(default)]
    pub medium_url: Option<String>,
    /// Reddit URL.
    #[serde(default)]
    pub reddit_url: Option<String>,
    /// Telegram URL.
    #[serde(default)]
    pub telegram_url: Option<String>,
    /// Twitter URL.
    #[serde(default)]
    pub twitter_url: Option<String>,
    /// Whitepaper URL.
    #[serde(default)]
    pub whitepaper_url: Option<String>,
    /// YouTube URL.
    #[serde(default)]
    pub youtube_url: Option<String>,
    /// LinkedIn URL.
    #[serde(default)]
    pub linkedin_url: Option<String>,
    /// BitcoinTalk URL.
    #[serde(default)]
    pub bitcointalk_url: Option<String>,
    /// Block explorer URL.
    #[serde(default)]
    pub block_explorer_url: Option<String>,
    /// ID of the currency that replaced this one, if any.
    #[serde(default)]
    pub replaced_by: Option<String>,
    /// CryptoControl news coin ID.
    #[serde(default)]
    pub cryptocontrol_coin_id: Option<String>,
    /// Platform currency ID for tokens.
    #[serde(default)]
    pub platform_currency_id: Option<String>,
    /// Contract address for tokens.
    #[serde(default)]
    pub platform_contract_address: Option<String>,
}

/// Request parameters for currency sparklines.
#[derive(Debug, Clone, Serialize)]
pub struct CurrenciesSparklineRequest {
    /// Currency IDs to filter by. Empty means all.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    /// Start of the sparkline window.
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    /// End of the window (defaults to now).
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub end: Option<OffsetDateTime>,
    /// Quote currency for prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<String>,
}

impl CurrenciesSparklineRequest {
    /// Create a request for sparklines starting at `start`.
    pub fn new(start: OffsetDateTime) -> Self {
        Self {
            ids: Vec::new(),
            start,
            end: None,
            convert: None,
        }
    }

    /// Restrict to specific currency IDs.
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
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
}

/// Sparkline (parallel timestamp/price arrays) for one currency.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencySparkline {
    /// Nomics currency ID.
    pub currency: String,
    /// Sample timestamps.
    #[serde(deserialize_with = "rfc3339_vec::deserialize", default)]
    pub timestamps: Vec<OffsetDateTime>,
    /// Prices at each timestamp; the server sends these as strings.
    #[serde(default)]
    pub prices: Vec<Decimal>,
}

/// Request parameters for currency supply history.
#[derive(Debug, Clone, Serialize)]
pub struct SupplyHistoryRequest {
    /// Nomics currency ID.
    pub currency: String,
    /// Start of the history window.
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    /// End of the window (defaults to now).
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub end: Option<OffsetDateTime>,
}

impl SupplyHistoryRequest {
    /// Create a supply history request for a currency.
    pub fn new(currency: impl Into<String>, start: OffsetDateTime) -> Self {
        Self {
            currency: currency.into(),
            start,
            end: None,
        }
    }

    /// Set the end of the window.
    pub fn end(mut self, end: OffsetDateTime) -> Self {
        self.end = Some(end);
        self
    }

    fn validate(&self) -> Result<(), NomicsError> {
        if self.currency.is_empty() {
            return Err(NomicsError::MissingField("currency"));
        }
        Ok(())
    }
}

/// One point of a currency's supply history.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplyHistoryEntry {
    /// Sample timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Available (circulating) supply.
    #[serde(default)]
    pub available: Option<Decimal>,
    /// Maximum supply.
    #[serde(default)]
    pub max: Option<Decimal>,
}

impl NomicsRestClient {
    /// Get price, volume and market-cap statistics for currencies.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use nomics_api_client::rest::NomicsRestClient;
    /// use nomics_api_client::rest::currencies::CurrenciesTickerRequest;
    /// use nomics_api_client::types::common::TickerInterval;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = NomicsRestClient::new("your-api-key");
    ///     let request = CurrenciesTickerRequest::new()
    ///         .ids(["BTC", "ETH"])
    ///         .interval([TickerInterval::OneDay]);
    ///     let ticker = client.get_currencies_ticker(&request).await?;
    ///     for currency in ticker {
    ///         println!("{}: {:?}", currency.id, currency.price);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_currencies_ticker(
        &self,
        request: &CurrenciesTickerRequest,
    ) -> Result<Vec<CurrencyTicker>, NomicsError> {
        self.get_json_with_params(paths::CURRENCIES_TICKER, request)
            .await
    }

    /// Get descriptive metadata for currencies.
    pub async fn get_currencies_metadata(
        &self,
        request: &CurrenciesMetadataRequest,
    ) -> Result<Vec<CurrencyMetadata>, NomicsError> {
        self.get_json_with_params(paths::CURRENCIES_METADATA, request)
            .await
    }

    /// Download currency metadata as CSV into `path`.
    pub async fn get_currencies_metadata_csv(
        &self,
        request: &CurrenciesMetadataRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        self.get_csv_with_params(paths::CURRENCIES_METADATA, request, path)
            .await
    }

    /// Get price sparklines for currencies over a time window.
    pub async fn get_currencies_sparkline(
        &self,
        request: &CurrenciesSparklineRequest,
    ) -> Result<Vec<CurrencySparkline>, NomicsError> {
        self.get_json_with_params(paths::CURRENCIES_SPARKLINE, request)
            .await
    }

    /// Get the supply history of a currency.
    pub async fn get_supply_history(
        &self,
        request: &SupplyHistoryRequest,
    ) -> Result<Vec<SupplyHistoryEntry>, NomicsError> {
        request.validate()?;
        self.get_json_with_params(paths::SUPPLIES_HISTORY, request)
            .await
    }

    /// Download the supply history of a currency as CSV into `path`.
    pub async fn get_supply_history_csv(
        &self,
        request: &SupplyHistoryRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        request.validate()?;
        self.get_csv_with_params(paths::SUPPLIES_HISTORY, request, path)
            .await
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_ticker_request_query_string() {
        let request = CurrenciesTickerRequest::new()
            .ids(["BTC", "ETH"])
            .interval([TickerInterval::OneDay, TickerInterval::SevenDays])
            .convert("EUR")
            .per_page(50)
            .page(2);
        let query = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(
            query,
            "ids=BTC%2CETH&interval=1d%2C7d&convert=EUR&per-page=50&page=2"
        );
    }

    #[test]
    fn test_ticker_request_skips_false_transparency() {
        let query = serde_urlencoded::to_string(&CurrenciesTickerRequest::new()).unwrap();
        assert!(query.is_empty());

        let request = CurrenciesTickerRequest::new().include_transparency();
        let query = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(query, "include-transparency=true");
    }

    #[test]
    fn test_supply_history_requires_currency() {
        let request = SupplyHistoryRequest::new("", datetime!(2021-01-01 00:00 UTC));
        assert!(matches!(
            request.validate(),
            Err(NomicsError::MissingField("currency"))
        ));
    }

    #[test]
    fn test_currency_ticker_deserialize() {
        let json = r#"{
            "id": "BTC",
            "status": "active",
            "price": "33005.23",
            "price_date": "2021-02-11T00:00:00Z",
            "symbol": "BTC",
            "circulating_supply": "18625512",
            "name": "Bitcoin",
            "market_cap": "614713542014",
            "num_exchanges": "372",
            "rank": "1",
            "high": "40670.25",
            "1d": {
                "price_change": "1302.61",
                "price_change_pct": "0.0411",
                "volume": "48111129924.90"
            }
        }"#;
        let ticker: CurrencyTicker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.id, "BTC");
        assert_eq!(ticker.rank, Some(1));
        assert_eq!(ticker.num_exchanges, Some(372));
        let one_day = ticker.one_day.unwrap();
        assert_eq!(one_day.price_change_pct.unwrap().to_string(), "0.0411");
        assert!(ticker.one_hour.is_none());
    }

    #[test]
    fn test_sparkline_deserialize_string_prices() {
        let json = r#"{
            "currency": "BTC",
            "timestamps": ["2021-01-01T00:00:00Z", "2021-01-02T00:00:00Z"],
            "prices": ["29022.42", "29352.20"]
        }"#;
        let sparkline: CurrencySparkline = serde_json::from_str(json).unwrap();
        assert_eq!(sparkline.currency, "BTC");
        assert_eq!(sparkline.timestamps.len(), 2);
        assert_eq!(sparkline.prices[1].to_string(), "29352.20");
    }
}
