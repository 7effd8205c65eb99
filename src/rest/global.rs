//! Global (all-cryptoassets) ticker endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::NomicsError;
use crate::rest::NomicsRestClient;
use crate::rest::endpoints::paths;
use crate::types::common::VolumeTransparency;
use crate::types::serde_helpers::optional_display_fromstr;

/// Request parameters for the global ticker.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GlobalTickerRequest {
    /// Quote currency for market caps and volumes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convert: Option<String>,
}

impl GlobalTickerRequest {
    /// Create an empty request (USD quotes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quote currency.
    pub fn convert(mut self, convert: impl Into<String>) -> Self {
        self.convert = Some(convert.into());
        self
    }
}

/// Market-wide statistics across all cryptoassets.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalTicker {
    /// Number of currencies tracked.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub num_currencies: Option<u32>,
    /// Number of active currencies.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub num_currencies_active: Option<u32>,
    /// Number of inactive currencies.
    #[serde(
        rename = "num_currencies_inative",
        deserialize_with = "optional_display_fromstr::deserialize",
        default
    )]
    pub num_currencies_inactive: Option<u32>,
    /// Number of dead currencies.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub num_currencies_dead: Option<u32>,
    /// Number of newly listed currencies.
    #[serde(deserialize_with = "optional_display_fromstr::deserialize", default)]
    pub num_currencies_new: Option<u32>,
    /// Total market capitalization.
    #[serde(default)]
    pub market_cap: Option<Decimal>,
    /// Market capitalization from transparent volume only.
    #[serde(default)]
    pub transparent_market_cap: Option<Decimal>,
    /// One-day statistics.
    #[serde(rename = "1d", default)]
    pub one_day: Option<GlobalIntervalStats>,
    /// Seven-day statistics.
    #[serde(rename = "7d", default)]
    pub seven_days: Option<GlobalIntervalStats>,
    /// Thirty-day statistics.
    #[serde(rename = "30d", default)]
    pub thirty_days: Option<GlobalIntervalStats>,
    /// 365-day statistics.
    #[serde(rename = "365d", default)]
    pub one_year: Option<GlobalIntervalStats>,
    /// Year-to-date statistics.
    #[serde(rename = "ytd", default)]
    pub year_to_date: Option<GlobalIntervalStats>,
}

/// Rolling market-wide statistics for one interval window.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalIntervalStats {
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
    /// Total volume.
    #[serde(default)]
    pub volume: Option<Decimal>,
    /// Absolute volume change.
    #[serde(default)]
    pub volume_change: Option<Decimal>,
    /// Percent volume change.
    #[serde(default)]
    pub volume_change_pct: Option<Decimal>,
    /// Transparent volume.
    #[serde(default)]
    pub transparent_volume: Option<Decimal>,
    /// Absolute transparent-volume change.
    #[serde(default)]
    pub transparent_volume_change: Option<Decimal>,
    /// Percent transparent-volume change.
    #[serde(default)]
    pub transparent_volume_change_pct: Option<Decimal>,
    /// Volume broken down by transparency grade.
    #[serde(default)]
    pub volume_transparency: Vec<VolumeTransparency>,
}

impl NomicsRestClient {
    /// Get market-wide statistics across all cryptoassets.
    ///
    /// The API returns a single-element array; the element is the ticker.
    pub async fn get_global_ticker(
        &self,
        request: &GlobalTickerRequest,
    ) -> Result<Vec<GlobalTicker>, NomicsError> {
        self.get_json_with_params(paths::GLOBAL_TICKER, request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_ticker_deserialize() {
        let json = r#"[{
            "num_currencies": "13259",
            "num_currencies_active": "8136",
            "num_currencies_inative": "4701",
            "market_cap": "1444490472904",
            "1d": {
                "market_cap_change": "61101976945",
                "market_cap_change_pct": "0.0442",
                "volume": "186535351228.11",
                "volume_transparency": [
                    {"grade": "A", "volume": "66605523261.31"}
                ]
            }
        }]"#;
        let tickers: Vec<GlobalTicker> = serde_json::from_str(json).unwrap();
        assert_eq!(tickers.len(), 1);
        let ticker = &tickers[0];
        assert_eq!(ticker.num_currencies, Some(13259));
        assert_eq!(ticker.num_currencies_inactive, Some(4701));
        let one_day = ticker.one_day.as_ref().unwrap();
        assert_eq!(one_day.volume_transparency.len(), 1);
        assert_eq!(one_day.volume_transparency[0].grade.as_deref(), Some("A"));
    }
}
