//! Raw trade history endpoint.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::NomicsError;
use crate::rest::NomicsRestClient;
use crate::rest::endpoints::paths;
use crate::types::common::SortOrder;

/// Request parameters for raw trades of one market.
#[derive(Debug, Clone, Serialize)]
pub struct TradesRequest {
    /// Nomics exchange ID.
    pub exchange: String,
    /// Market symbol as listed by the exchange.
    pub market: String,
    /// Maximum number of trades to return (server default 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Sort direction by timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Return trades at or after this time.
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub from: Option<OffsetDateTime>,
}

impl TradesRequest {
    /// Create a trades request for one market.
    pub fn new(exchange: impl Into<String>, market: impl Into<String>) -> Self {
        Self {
            exchange: exchange.into(),
            market: market.into(),
            limit: None,
            order: None,
            from: None,
        }
    }

    /// Limit the number of trades returned.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the sort direction.
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Only return trades at or after `from`.
    pub fn from(mut self, from: OffsetDateTime) -> Self {
        self.from = Some(from);
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

/// One executed trade.
#[derive(Debug, Clone, Deserialize)]
pub struct Trade {
    /// Exchange-assigned trade ID.
    pub id: String,
    /// Execution time.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Execution price; the server sends this as a JSON number.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Executed volume in the base currency.
    #[serde(default)]
    pub volume: Option<Decimal>,
}

impl NomicsRestClient {
    /// Get raw trades for one market on one exchange.
    pub async fn get_trades(&self, request: &TradesRequest) -> Result<Vec<Trade>, NomicsError> {
        request.validate()?;
        self.get_json_with_params(paths::TRADES, request).await
    }

    /// Download raw trades as CSV into `path`.
    pub async fn get_trades_csv(
        &self,
        request: &TradesRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        request.validate()?;
        self.get_csv_with_params(paths::TRADES, request, path).await
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_trades_request_query_string() {
        let request = TradesRequest::new("binance", "BTCUSDT")
            .limit(500)
            .order(SortOrder::Desc)
            .from(datetime!(2021-01-01 00:00 UTC));
        let query = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(
            query,
            "exchange=binance&market=BTCUSDT&limit=500&order=desc&from=2021-01-01T00%3A00%3A00Z"
        );
    }

    #[test]
    fn test_trades_request_requires_exchange() {
        let request = TradesRequest::new("", "BTCUSDT");
        assert!(matches!(
            request.validate(),
            Err(NomicsError::MissingField("exchange"))
        ));
    }

    #[test]
    fn test_trade_deserialize_numeric_price() {
        // Price arrives as a JSON number, volume as a string.
        let json = r#"{
            "id": "633174087",
            "timestamp": "2021-02-10T15:00:00Z",
            "price": 44822.12,
            "volume": "0.5112"
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.id, "633174087");
        assert_eq!(trade.volume.unwrap().to_string(), "0.5112");
        assert!(trade.price.is_some());
    }
}
