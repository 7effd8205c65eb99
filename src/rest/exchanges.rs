//! Exchange endpoints: ticker, volume history and metadata.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::NomicsError;
use crate::rest::NomicsRestClient;
use crate::rest::endpoints::paths;
use crate::rest::volume::VolumeHistoryEntry;
use crate::types::common::TickerInterval;
use crate::types::serde_helpers::{comma_separated, optional_display_fromstr};

/// Request parameters for the exchanges ticker.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExchangesTickerRequest {
    /// Nomics exchange IDs to filter by. Empty means all.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    /// Rolling windows to return interval statistics for.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub interval: Vec<TickerInterval>,
    /// Quote currency for volumes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<String>,
    /// Exchange status filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Exchange type filter: "centralized" or "decentralized".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub exchange_type: Option<String>,
    /// Page size.
    #[serde(rename = "per-page", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ExchangesTickerRequest {
    /// Create an empty request (all exchanges).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to specific exchange IDs.
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

    /// Set the exchange type filter.
    pub fn exchange_type(mut self, exchange_type: impl Into<String>) -> Self {
        self.exchange_type = Some(exchange_type.into());
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

/// Volume and coverage statistics for one exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeTicker {
    /// Nomics exchange ID.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: Option<String>,
    /// Logo URL.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Volume rank.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub rank: Option<i32>,
    /// Transparency grade ("A" best).
    #[serde(default)]
    pub transparency_grade: Option<String>,
    /// Data coverage type.
    #[serde(default)]
    pub coverage_type: Option<String>,
    /// Whether order books are collected for this exchange.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub order_books: Option<bool>,
    /// First trade seen.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub first_trade: Option<OffsetDateTime>,
    /// First candle seen.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub first_candle: Option<OffsetDateTime>,
    /// First order book seen.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub first_order_book: Option<OffsetDateTime>,
    /// Last update time.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub last_updated: Option<OffsetDateTime>,
    /// Fiat currencies the exchange supports.
    #[serde(default)]
    pub fiat_currencies: Vec<String>,
    /// Number of mapped market pairs.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub num_pairs: Option<u32>,
    /// Number of unmapped market pairs.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub num_pairs_unmapped: Option<u32>,
    /// One-hour statistics.
    #[serde(rename = "1h", default)]
    pub one_hour: Option<ExchangeIntervalStats>,
    /// One-day statistics.
    #[serde(rename = "1d", default)]
    pub one_day: Option<ExchangeIntervalStats>,
    /// Seven-day statistics.
    #[serde(rename = "7d", default)]
    pub seven_days: Option<ExchangeIntervalStats>,
    /// Thirty-day statistics.
    #[serde(rename = "30d", default)]
    pub thirty_days: Option<ExchangeIntervalStats>,
    /// 365-day statistics.
    #[serde(rename = "365d", default)]
    pub one_year: Option<ExchangeIntervalStats>,
    /// Year-to-date statistics.
    #[serde(rename = "ytd", default)]
    pub year_to_date: Option<ExchangeIntervalStats>,
}

/// Rolling statistics for one interval window of an exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeIntervalStats {
    /// Total volume.
    #[serde(default)]
    pub volume: Option<Decimal>,
    /// Absolute volume change.
    #[serde(default)]
    pub volume_change: Option<Decimal>,
    /// Percent volume change.
    #[serde(default)]
    pub volume_change_pct: Option<Decimal>,
    /// Spot volume.
    #[serde(default)]
    pub spot_volume: Option<Decimal>,
    /// Absolute spot-volume change.
    #[serde(default)]
    pub spot_volume_change: Option<Decimal>,
    /// Percent spot-volume change.
    #[serde(default)]
    pub spot_volume_change_pct: Option<Decimal>,
    /// Derivative volume.
    #[serde(default)]
    pub derivative_volume: Option<Decimal>,
    /// Absolute derivative-volume change.
    #[serde(default)]
    pub derivative_volume_change: Option<Decimal>,
    /// Percent derivative-volume change.
    #[serde(default)]
    pub derivative_volume_change_pct: Option<Decimal>,
    /// Number of trades.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub trades: Option<u64>,
    /// Change in number of trades.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub trades_change: Option<i64>,
    /// Percent change in number of trades.
    #[serde(default)]
    pub trades_change_pct: Option<Decimal>,
}

/// Request parameters for an exchange's volume history.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangesVolumeHistoryRequest {
    /// Nomics exchange ID.
    pub exchange: String,
    /// Start of the history window.
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    /// End of the window (defaults to now).
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub end: Option<OffsetDateTime>,
    /// Quote currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<String>,
    /// Include the transparent volume series.
    #[serde(
        rename = "include-transparency",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub include_transparency: bool,
}

impl ExchangesVolumeHistoryRequest {
    /// Create a volume history request for an exchange.
    pub fn new(exchange: impl Into<String>, start: OffsetDateTime) -> Self {
        Self {
            exchange: exchange.into(),
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

    /// Request the transparent volume series.
    pub fn include_transparency(mut self) -> Self {
        self.include_transparency = true;
        self
    }

    fn validate(&self) -> Result<(), NomicsError> {
        if self.exchange.is_empty() {
            return Err(NomicsError::MissingField("exchange"));
        }
        Ok(())
    }
}

/// Request parameters for exchange metadata.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExchangesMetadataRequest {
    /// Nomics exchange IDs to filter by. Empty means all.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    /// Metadata attributes to return. Empty means all.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
}

impl ExchangesMetadataRequest {
    /// Create an empty request (all exchanges, all attributes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to specific exchange IDs.
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

/// Descriptive metadata and capabilities for one exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeMetadata {
    /// Nomics exchange ID.
    pub id: String,
    /// Whether the exchange exposes market listings.
    #[serde(default)]
    pub capability_markets: Option<bool>,
    /// Whether the exchange exposes trades.
    #[serde(default)]
    pub capability_trades: Option<bool>,
    /// Whether trades can be queried by timestamp.
    #[serde(default)]
    pub capability_trades_by_timestamp: Option<bool>,
    /// Whether trade snapshots are available.
    #[serde(default)]
    pub capability_trades_snapshot: Option<bool>,
    /// Whether order-book snapshots are available.
    #[serde(default)]
    pub capability_orders_snapshot: Option<bool>,
    /// Whether candles are available.
    #[serde(default)]
    pub capability_candles: Option<bool>,
    /// Whether a ticker is available.
    #[serde(default)]
    pub capability_ticker: Option<bool>,
    /// Whether the exchange is integrated into aggregates.
    #[serde(default)]
    pub integrated: Option<bool>,
    /// Human-readable name.
    #[serde(default)]
    pub name: Option<String>,
    /// Exchange description.
    #[serde(default)]
    pub description: Option<String>,
    /// Location of incorporation.
    #[serde(default)]
    pub location: Option<String>,
    /// Logo URL.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Website URL.
    #[serde(default)]
    pub website_url: Option<String>,
    /// Fee schedule URL.
    #[serde(default)]
    pub fees_url: Option<String>,
    /// Twitter URL.
    #[serde(default)]
    pub twitter_url: Option<String>,
    /// Facebook URL.
    #[serde(default)]
    pub facebook_url: Option<String>,
    /// Reddit URL.
    #[serde(default)]
    pub reddit_url: Option<String>,
    /// Chat (Discord/Telegram) URL.
    #[serde(default)]
    pub chat_url: Option<String>,
    /// Blog URL.
    #[serde(default)]
    pub blog_url: Option<String>,
    /// Year the exchange launched.
    #[serde(default)]
    pub year: Option<u32>,
    /// Transparency grade.
    #[serde(default)]
    pub transparency_grade: Option<String>,
    /// Order-book snapshot interval in seconds.
    #[serde(default)]
    pub order_books_interval: Option<u32>,
}

impl NomicsRestClient {
    /// Get volume and coverage statistics for exchanges.
    pub async fn get_exchanges_ticker(
        &self,
        request: &ExchangesTickerRequest,
    ) -> Result<Vec<ExchangeTicker>, NomicsError> {
        self.get_json_with_params(paths::EXCHANGES_TICKER, request)
            .await
    }

    /// Get the volume history of one exchange.
    pub async fn get_exchanges_volume_history(
        &self,
        request: &ExchangesVolumeHistoryRequest,
    ) -> Result<Vec<VolumeHistoryEntry>, NomicsError> {
        request.validate()?;
        self.get_json_with_params(paths::EXCHANGES_VOLUME_HISTORY, request)
            .await
    }

    /// Download the volume history of one exchange as CSV into `path`.
    pub async fn get_exchanges_volume_history_csv(
        &self,
        request: &ExchangesVolumeHistoryRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        request.validate()?;
        self.get_csv_with_params(paths::EXCHANGES_VOLUME_HISTORY, request, path)
            .await
    }

    /// Get descriptive metadata for exchanges.
    pub async fn get_exchanges_metadata(
        &self,
        request: &ExchangesMetadataRequest,
    ) -> Result<Vec<ExchangeMetadata>, NomicsError> {
        self.get_json_with_params(paths::EXCHANGES_METADATA, request)
            .await
    }

    /// Download exchange metadata as CSV into `path`.
    pub async fn get_exchanges_metadata_csv(
        &self,
        request: &ExchangesMetadataRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        self.get_csv_with_params(paths::EXCHANGES_METADATA, request, path)
            .await
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_exchanges_ticker_request_renames_type() {
        let request = ExchangesTickerRequest::new()
            .ids(["binance"])
            .exchange_type("centralized");
        let query = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(query, "ids=binance&type=centralized");
    }

    #[test]
    fn test_volume_history_requires_exchange() {
        let request = ExchangesVolumeHistoryRequest::new("", datetime!(2021-01-01 00:00 UTC));
        assert!(matches!(
            request.validate(),
            Err(NomicsError::MissingField("exchange"))
        ));
    }

    #[test]
    fn test_exchange_ticker_deserialize() {
        let json = r#"{
            "id": "binance",
            "name": "Binance",
            "rank": "1",
            "transparency_grade": "A",
            "order_books": "true",
            "fiat_currencies": ["EUR", "GBP"],
            "num_pairs": "1204",
            "1d": {"volume": "24453955522.71", "trades": "28431098", "trades_change": "-104331"}
        }"#;
        let ticker: ExchangeTicker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.rank, Some(1));
        assert_eq!(ticker.order_books, Some(true));
        assert_eq!(ticker.fiat_currencies.len(), 2);
        let one_day = ticker.one_day.unwrap();
        assert_eq!(one_day.trades, Some(28431098));
        assert_eq!(one_day.trades_change, Some(-104331));
    }

    #[test]
    fn test_exchange_metadata_deserialize() {
        let json = r#"{
            "id": "kraken",
            "capability_trades": true,
            "integrated": true,
            "name": "Kraken",
            "year": 2011,
            "order_books_interval": 300
        }"#;
        let metadata: ExchangeMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.id, "kraken");
        assert_eq!(metadata.capability_trades, Some(true));
        assert_eq!(metadata.year, Some(2011));
    }
}
