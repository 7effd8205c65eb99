//! Order-book snapshot endpoint.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::NomicsError;
use crate::rest::NomicsRestClient;
use crate::rest::endpoints::paths;

/// Request parameters for an order-book snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct OrdersSnapshotRequest {
    /// Nomics exchange ID.
    pub exchange: String,
    /// Market symbol as listed by the exchange.
    pub market: String,
    /// Point in time to snapshot (defaults to the latest snapshot).
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub at: Option<OffsetDateTime>,
}

impl OrdersSnapshotRequest {
    /// Create a snapshot request for one market.
    pub fn new(exchange: impl Into<String>, market: impl Into<String>) -> Self {
        Self {
            exchange: exchange.into(),
            market: market.into(),
            at: None,
        }
    }

    /// Snapshot the book as of `at`.
    pub fn at(mut self, at: OffsetDateTime) -> Self {
        self.at = Some(at);
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

/// An order-book snapshot for one market.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersSnapshot {
    /// Snapshot time.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Bid side, best first.
    #[serde(default)]
    pub bids: Vec<OrderBookLevel>,
    /// Ask side, best first.
    #[serde(default)]
    pub asks: Vec<OrderBookLevel>,
}

/// Single order-book price level.
/// Format: [price, amount]
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBookLevel {
    /// Price of the level.
    pub price: Decimal,
    /// Amount available at the price.
    pub amount: Decimal,
}

impl<'de> Deserialize<'de> for OrderBookLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (Decimal, Decimal) = Deserialize::deserialize(deserializer)?;
        Ok(OrderBookLevel {
            price: arr.0,
            amount: arr.1,
        })
    }
}

impl NomicsRestClient {
    /// Get an order-book snapshot for one market.
    pub async fn get_orders_snapshot(
        &self,
        request: &OrdersSnapshotRequest,
    ) -> Result<OrdersSnapshot, NomicsError> {
        request.validate()?;
        self.get_json_with_params(paths::ORDERS_SNAPSHOT, request)
            .await
    }

    /// Download an order-book snapshot as CSV into `path`.
    pub async fn get_orders_snapshot_csv(
        &self,
        request: &OrdersSnapshotRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        request.validate()?;
        self.get_csv_with_params(paths::ORDERS_SNAPSHOT, request, path)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_request_requires_market() {
        let request = OrdersSnapshotRequest::new("binance", "");
        assert!(matches!(
            request.validate(),
            Err(NomicsError::MissingField("market"))
        ));
    }

    #[test]
    fn test_orders_snapshot_deserialize() {
        let json = r#"{
            "timestamp": "2021-02-10T15:00:00Z",
            "bids": [[44820.10, 0.25], [44819.55, 1.02]],
            "asks": [[44822.00, 0.55]]
        }"#;
        let snapshot: OrdersSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.bids.len(), 2);
        assert_eq!(snapshot.asks.len(), 1);
        assert_eq!(snapshot.bids[0].amount.to_string(), "0.25");
        assert!(snapshot.bids[0].price > snapshot.bids[1].price);
    }
}
