//! Fiat exchange-rate endpoints.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::NomicsError;
use crate::rest::NomicsRestClient;
use crate::rest::endpoints::paths;

/// Current exchange rate of one currency against USD.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRate {
    /// Currency code (fiat or crypto).
    pub currency: String,
    /// Units of USD per unit of the currency.
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// When the rate was computed.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub timestamp: Option<OffsetDateTime>,
}

/// Request parameters for the exchange-rate history of one currency.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeRatesHistoryRequest {
    /// Currency code.
    pub currency: String,
    /// Start of the history window.
    #[serde(with = "time::serde::rfc3339")]
    pub start: OffsetDateTime,
    /// End of the window (defaults to now).
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub end: Option<OffsetDateTime>,
}

impl ExchangeRatesHistoryRequest {
    /// Create a rate history request for a currency.
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

/// One point of a currency's exchange-rate history.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateHistoryEntry {
    /// Sample timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Units of USD per unit of the currency.
    #[serde(default)]
    pub rate: Option<Decimal>,
}

impl NomicsRestClient {
    /// Get the current exchange rates used by Nomics to convert prices.
    pub async fn get_exchange_rates(&self) -> Result<Vec<ExchangeRate>, NomicsError> {
        self.get_json(paths::EXCHANGE_RATES).await
    }

    /// Download the current exchange rates as CSV into `path`.
    pub async fn get_exchange_rates_csv(&self, path: &Path) -> Result<(), NomicsError> {
        self.get_csv(paths::EXCHANGE_RATES, path).await
    }

    /// Get the exchange-rate history of one currency against USD.
    pub async fn get_exchange_rates_history(
        &self,
        request: &ExchangeRatesHistoryRequest,
    ) -> Result<Vec<ExchangeRateHistoryEntry>, NomicsError> {
        request.validate()?;
        self.get_json_with_params(paths::EXCHANGE_RATES_HISTORY, request)
            .await
    }

    /// Download the exchange-rate history of one currency as CSV into `path`.
    pub async fn get_exchange_rates_history_csv(
        &self,
        request: &ExchangeRatesHistoryRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        request.validate()?;
        self.get_csv_with_params(paths::EXCHANGE_RATES_HISTORY, request, path)
            .await
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_exchange_rate_deserialize() {
        let json = r#"{"currency":"EUR","rate":"1.2103","timestamp":"2021-02-11T00:00:00Z"}"#;
        let rate: ExchangeRate = serde_json::from_str(json).unwrap();
        assert_eq!(rate.currency, "EUR");
        assert_eq!(rate.rate.unwrap().to_string(), "1.2103");
    }

    #[test]
    fn test_history_requires_currency() {
        let request = ExchangeRatesHistoryRequest::new("", datetime!(2021-01-01 00:00 UTC));
        assert!(matches!(
            request.validate(),
            Err(NomicsError::MissingField("currency"))
        ));
    }

    #[test]
    fn test_history_request_query_string() {
        let request = ExchangeRatesHistoryRequest::new("EUR", datetime!(2021-01-01 00:00 UTC))
            .end(datetime!(2021-02-01 00:00 UTC));
        let query = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(
            query,
            "currency=EUR&start=2021-01-01T00%3A00%3A00Z&end=2021-02-01T00%3A00%3A00Z"
        );
    }
}
