//! Currency price-prediction endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::NomicsError;
use crate::rest::NomicsRestClient;
use crate::rest::endpoints::paths;
use crate::types::serde_helpers::comma_separated;

/// Request parameters for the predictions ticker.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PredictionsTickerRequest {
    /// Currency IDs to filter by. Empty means all.
    #[serde(with = "comma_separated", skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
}

impl PredictionsTickerRequest {
    /// Create an empty request (all currencies).
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
}

/// Current price predictions for one currency, one entry per horizon.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyPredictions {
    /// Nomics currency ID.
    pub id: String,
    /// Predictions for each horizon.
    #[serde(default)]
    pub predictions: Vec<PredictionWindow>,
}

/// One prediction over one horizon.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionWindow {
    /// Average model error over all horizons.
    #[serde(default)]
    pub avg_error_pct: Option<Decimal>,
    /// Average model error over the last thirty days.
    #[serde(rename = "avg_error_pct_30d", default)]
    pub avg_error_pct_thirty_days: Option<Decimal>,
    /// Average model error over the last seven days.
    #[serde(rename = "avg_error_pct_7d", default)]
    pub avg_error_pct_seven_days: Option<Decimal>,
    /// Prediction horizon (e.g. "7d", "30d").
    #[serde(default)]
    pub interval: Option<String>,
    /// Predicted percent price change.
    #[serde(default)]
    pub price_change_pct: Option<Decimal>,
    /// Predicted price at the end of the horizon.
    #[serde(default)]
    pub price_end: Option<Decimal>,
    /// Price at the start of the horizon.
    #[serde(default)]
    pub price_start: Option<Decimal>,
    /// End of the horizon.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub timestamp_end: Option<OffsetDateTime>,
    /// Start of the horizon.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub timestamp_start: Option<OffsetDateTime>,
}

/// Request parameters for the prediction history of one currency.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PredictionsHistoryRequest {
    /// Nomics currency ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Prediction horizon to return (e.g. "7d").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

impl PredictionsHistoryRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the currency ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the prediction horizon.
    pub fn interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = Some(interval.into());
        self
    }
}

/// Historical predictions for one currency and horizon.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionsHistory {
    /// Nomics currency ID.
    #[serde(default)]
    pub id: Option<String>,
    /// Prediction horizon.
    #[serde(default)]
    pub interval: Option<String>,
    /// Past predictions, newest first.
    #[serde(default)]
    pub predictions: Vec<HistoricalPrediction>,
}

/// One past prediction together with the realized price.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalPrediction {
    /// Predicted percent price change.
    #[serde(default)]
    pub price_change_pct: Option<Decimal>,
    /// Predicted price at the end of the horizon.
    #[serde(default)]
    pub price_end: Option<Decimal>,
    /// Actual price at the end of the horizon.
    #[serde(default)]
    pub actual_price_end: Option<Decimal>,
    /// Price at the start of the horizon.
    #[serde(default)]
    pub price_start: Option<Decimal>,
    /// End of the horizon.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub timestamp_end: Option<OffsetDateTime>,
    /// Start of the horizon.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub timestamp_start: Option<OffsetDateTime>,
}

impl NomicsRestClient {
    /// Get the current price predictions for currencies.
    pub async fn get_predictions_ticker(
        &self,
        request: &PredictionsTickerRequest,
    ) -> Result<Vec<CurrencyPredictions>, NomicsError> {
        self.get_json_with_params(paths::PREDICTIONS_TICKER, request)
            .await
    }

    /// Get past predictions and realized prices for one currency.
    pub async fn get_predictions_history(
        &self,
        request: &PredictionsHistoryRequest,
    ) -> Result<PredictionsHistory, NomicsError> {
        self.get_json_with_params(paths::PREDICTIONS_HISTORY, request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predictions_ticker_deserialize() {
        let json = r#"[{
            "id": "BTC",
            "predictions": [{
                "avg_error_pct": "0.0372",
                "avg_error_pct_30d": "0.0512",
                "avg_error_pct_7d": "0.0391",
                "interval": "7d",
                "price_change_pct": "0.0122",
                "price_end": "45368.10",
                "price_start": "44822.12",
                "timestamp_end": "2021-02-17T00:00:00Z",
                "timestamp_start": "2021-02-10T00:00:00Z"
            }]
        }]"#;
        let tickers: Vec<CurrencyPredictions> = serde_json::from_str(json).unwrap();
        assert_eq!(tickers[0].id, "BTC");
        let window = &tickers[0].predictions[0];
        assert_eq!(window.interval.as_deref(), Some("7d"));
        assert_eq!(window.avg_error_pct_seven_days.unwrap().to_string(), "0.0391");
    }

    #[test]
    fn test_predictions_history_request_query_string() {
        let request = PredictionsHistoryRequest::new().id("ETH").interval("30d");
        let query = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(query, "id=ETH&interval=30d");
    }
}
