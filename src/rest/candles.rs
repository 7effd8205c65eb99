//! Candle endpoints: aggregated candles, exchange candles and market candles.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::NomicsError;
use crate::rest::NomicsRestClient;
use crate::rest::endpoints::paths;
use crate::types::common::CandleInterval;
use crate::types::serde_helpers::{null_as_default, optional_display_fromstr};

/// Request parameters for aggregated candles of one currency.
#[derive(Debug, Clone, Serialize)]
pub struct CandlesRequest {
    /// Candle aggregation window.
    pub interval: CandleInterval,
    /// Nomics currency ID.
    pub currency: String,
    /// Start of the window.
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub start: Option<OffsetDateTime>,
    /// End of the window (defaults to now).
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub end: Option<OffsetDateTime>,
}

impl CandlesRequest {
    /// Create a candles request for a currency.
    pub fn new(interval: CandleInterval, currency: impl Into<String>) -> Self {
        Self {
            interval,
            currency: currency.into(),
            start: None,
            end: None,
        }
    }

    /// Set the start of the window.
    pub fn start(mut self, start: OffsetDateTime) -> Self {
        self.start = Some(start);
        self
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

/// One aggregated (cross-exchange) candle.
#[derive(Debug, Clone, Deserialize)]
pub struct Candle {
    /// Candle open time.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Open price.
    #[serde(default)]
    pub open: Option<Decimal>,
    /// High price.
    #[serde(default)]
    pub high: Option<Decimal>,
    /// Low price.
    #[serde(default)]
    pub low: Option<Decimal>,
    /// Close price.
    #[serde(default)]
    pub close: Option<Decimal>,
    /// Volume over the candle.
    #[serde(default)]
    pub volume: Option<Decimal>,
    /// Open price from transparent markets only.
    #[serde(default)]
    pub transparent_open: Option<Decimal>,
    /// High price from transparent markets only.
    #[serde(default)]
    pub transparent_high: Option<Decimal>,
    /// Low price from transparent markets only.
    #[serde(default)]
    pub transparent_low: Option<Decimal>,
    /// Close price from transparent markets only.
    #[serde(default)]
    pub transparent_close: Option<Decimal>,
    /// Volume from transparent markets only.
    #[serde(default)]
    pub transparent_volume: Option<Decimal>,
    /// Volume broken down by transparency grade.
    #[serde(default)]
    pub volume_transparency: Option<CandleVolumeTransparency>,
}

/// Per-grade volume breakdown of one candle.
#[derive(Debug, Clone, Deserialize)]
pub struct CandleVolumeTransparency {
    /// Volume from ungraded markets.
    #[serde(rename = "?", default)]
    pub ungraded: Option<Decimal>,
    /// Volume from grade-A markets.
    #[serde(rename = "A", default)]
    pub grade_a: Option<Decimal>,
    /// Volume from grade-B markets.
    #[serde(rename = "B", default)]
    pub grade_b: Option<Decimal>,
    /// Volume from grade-C markets.
    #[serde(rename = "C", default)]
    pub grade_c: Option<Decimal>,
    /// Volume from grade-D markets.
    #[serde(rename = "D", default)]
    pub grade_d: Option<Decimal>,
}

/// Request parameters for raw candles of one market on one exchange.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeCandlesRequest {
    /// Candle aggregation window.
    pub interval: CandleInterval,
    /// Nomics exchange ID.
    pub exchange: String,
    /// Market symbol as listed by the exchange.
    pub market: String,
    /// Start of the window.
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub start: Option<OffsetDateTime>,
    /// End of the window (defaults to now).
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub end: Option<OffsetDateTime>,
}

impl ExchangeCandlesRequest {
    /// Create an exchange candles request.
    pub fn new(
        interval: CandleInterval,
        exchange: impl Into<String>,
        market: impl Into<String>,
    ) -> Self {
        Self {
            interval,
            exchange: exchange.into(),
            market: market.into(),
            start: None,
            end: None,
        }
    }

    /// Set the start of the window.
    pub fn start(mut self, start: OffsetDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end of the window.
    pub fn end(mut self, end: OffsetDateTime) -> Self {
        self.end = Some(end);
        self
    }

    fn validate(&self) -> Result<(), NomicsError> {
        if self.exchange.is_empty() {
            return Err(NomicsError::MissingField("exchange"));
        }
        if self.market.is_empty() {
            return Err(NomicsError::MissingField("market"));
        }
        Ok(())
    }
}

/// Request parameters for candles of one base/quote pair across exchanges.
#[derive(Debug, Clone, Serialize)]
pub struct MarketCandlesRequest {
    /// Candle aggregation window.
    pub interval: CandleInterval,
    /// Base currency ID.
    pub base: String,
    /// Quote currency ID.
    pub quote: String,
    /// Start of the window.
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub start: Option<OffsetDateTime>,
    /// End of the window (defaults to now).
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub end: Option<OffsetDateTime>,
}

impl MarketCandlesRequest {
    /// Create a market candles request for a base/quote pair.
    pub fn new(
        interval: CandleInterval,
        base: impl Into<String>,
        quote: impl Into<String>,
    ) -> Self {
        Self {
            interval,
            base: base.into(),
            quote: quote.into(),
            start: None,
            end: None,
        }
    }

    /// Set the start of the window.
    pub fn start(mut self, start: OffsetDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end of the window.
    pub fn end(mut self, end: OffsetDateTime) -> Self {
        self.end = Some(end);
        self
    }

    fn validate(&self) -> Result<(), NomicsError> {
        if self.base.is_empty() {
            return Err(NomicsError::MissingField("base"));
        }
        if self.quote.is_empty() {
            return Err(NomicsError::MissingField("quote"));
        }
        Ok(())
    }
}

/// One raw candle of a single market.
///
/// Shared by the exchange candles and market candles endpoints, which return
/// the same shape.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketCandle {
    /// Candle open time.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Low price.
    #[serde(default)]
    pub low: Option<Decimal>,
    /// Open price.
    #[serde(default)]
    pub open: Option<Decimal>,
    /// Close price.
    #[serde(default)]
    pub close: Option<Decimal>,
    /// High price.
    #[serde(default)]
    pub high: Option<Decimal>,
    /// Volume over the candle.
    #[serde(default)]
    pub volume: Option<Decimal>,
    /// Number of trades in the candle.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub num_trades: Option<u32>,
    /// Whether the candle's price is an outlier; `null` decodes as `false`.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub price_outlier: bool,
    /// Whether the candle's volume is an outlier; `null` decodes as `false`.
    #[serde(deserialize_with = "null_as_default::deserialize", default)]
    pub volume_outlier: bool,
}

impl NomicsRestClient {
    /// Get aggregated (cross-exchange) candles for one currency.
    pub async fn get_candles(&self, request: &CandlesRequest) -> Result<Vec<Candle>, NomicsError> {
        request.validate()?;
        self.get_json_with_params(paths::CANDLES, request).await
    }

    /// Download aggregated candles as CSV into `path`.
    pub async fn get_candles_csv(
        &self,
        request: &CandlesRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        request.validate()?;
        self.get_csv_with_params(paths::CANDLES, request, path).await
    }

    /// Get raw candles for one market on one exchange.
    pub async fn get_exchange_candles(
        &self,
        request: &ExchangeCandlesRequest,
    ) -> Result<Vec<MarketCandle>, NomicsError> {
        request.validate()?;
        self.get_json_with_params(paths::EXCHANGE_CANDLES, request)
            .await
    }

    /// Download raw exchange candles as CSV into `path`.
    pub async fn get_exchange_candles_csv(
        &self,
        request: &ExchangeCandlesRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        request.validate()?;
        self.get_csv_with_params(paths::EXCHANGE_CANDLES, request, path)
            .await
    }

    /// Get candles for one base/quote pair aggregated across exchanges.
    pub async fn get_market_candles(
        &self,
        request: &MarketCandlesRequest,
    ) -> Result<Vec<MarketCandle>, NomicsError> {
        request.validate()?;
        self.get_json_with_params(paths::MARKET_CANDLES, request)
            .await
    }

    /// Download market candles as CSV into `path`.
    pub async fn get_market_candles_csv(
        &self,
        request: &MarketCandlesRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        request.validate()?;
        self.get_csv_with_params(paths::MARKET_CANDLES, request, path)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candles_request_query_string() {
        let request = CandlesRequest::new(CandleInterval::OneDay, "BTC");
        let query = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(query, "interval=1d&currency=BTC");
    }

    #[test]
    fn test_candles_request_requires_currency() {
        let request = CandlesRequest::new(CandleInterval::OneDay, "");
        assert!(matches!(
            request.validate(),
            Err(NomicsError::MissingField("currency"))
        ));
    }

    #[test]
    fn test_exchange_candles_request_requires_market() {
        let request = ExchangeCandlesRequest::new(CandleInterval::OneHour, "binance", "");
        assert!(matches!(
            request.validate(),
            Err(NomicsError::MissingField("market"))
        ));
    }

    #[test]
    fn test_candle_deserialize_with_transparency() {
        let json = r#"{
            "timestamp": "2021-02-10T00:00:00Z",
            "open": "44722.22",
            "high": "47893.63",
            "low": "43795.08",
            "close": "44823.22",
            "volume": "75289435570",
            "volume_transparency": {"?": "1.12", "A": "35099599915.92"}
        }"#;
        let candle: Candle = serde_json::from_str(json).unwrap();
        assert_eq!(candle.open.unwrap().to_string(), "44722.22");
        let transparency = candle.volume_transparency.unwrap();
        assert_eq!(transparency.ungraded.unwrap().to_string(), "1.12");
        assert!(transparency.grade_b.is_none());
    }

    #[test]
    fn test_market_candle_null_outliers() {
        let json = r#"{
            "timestamp": "2021-02-10T00:00:00Z",
            "low": "43737.72",
            "open": "46469.39",
            "close": "44836.69",
            "high": "47299.99",
            "volume": "2522225524",
            "num_trades": "1196973",
            "price_outlier": null,
            "volume_outlier": null
        }"#;
        let candle: MarketCandle = serde_json::from_str(json).unwrap();
        assert_eq!(candle.num_trades, Some(1196973));
        assert!(!candle.price_outlier);
        assert!(!candle.volume_outlier);
    }
}
