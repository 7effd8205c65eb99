//! Aggregated volume history endpoint.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::NomicsError;
use crate::rest::NomicsRestClient;
use crate::rest::endpoints::paths;

/// Request parameters for the aggregated volume history.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VolumeHistoryRequest {
    /// Start of the history window (defaults to the beginning of time).
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub start: Option<OffsetDateTime>,
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

impl VolumeHistoryRequest {
    /// Create an empty request (full history).
    pub fn new() -> Self {
        Self::default()
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
}

/// One point of a volume history series.
///
/// Shared by the aggregated volume history and the per-exchange volume
/// history, which return the same shape.
#[derive(Debug, Clone, Deserialize)]
pub struct VolumeHistoryEntry {
    /// Sample timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Total volume.
    #[serde(default)]
    pub volume: Option<Decimal>,
    /// Volume from transparent markets only.
    #[serde(default)]
    pub transparent_volume: Option<Decimal>,
}

impl NomicsRestClient {
    /// Get the aggregated volume history across all cryptoassets.
    pub async fn get_volume_history(
        &self,
        request: &VolumeHistoryRequest,
    ) -> Result<Vec<VolumeHistoryEntry>, NomicsError> {
        self.get_json_with_params(paths::VOLUME_HISTORY, request)
            .await
    }

    /// Download the aggregated volume history as CSV into `path`.
    pub async fn get_volume_history_csv(
        &self,
        request: &VolumeHistoryRequest,
        path: &Path,
    ) -> Result<(), NomicsError> {
        self.get_csv_with_params(paths::VOLUME_HISTORY, request, path)
            .await
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_volume_history_request_query_string() {
        let request = VolumeHistoryRequest::new()
            .start(datetime!(2021-01-01 00:00 UTC))
            .convert("EUR")
            .include_transparency();
        let query = serde_urlencoded::to_string(&request).unwrap();
        assert_eq!(
            query,
            "start=2021-01-01T00%3A00%3A00Z&convert=EUR&include-transparency=true"
        );
    }

    #[test]
    fn test_volume_history_entry_deserialize() {
        let json = r#"{
            "timestamp": "2021-02-10T00:00:00Z",
            "volume": "186535351228.11",
            "transparent_volume": "66605523261.31"
        }"#;
        let entry: VolumeHistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.timestamp.year(), 2021);
        assert_eq!(entry.transparent_volume.unwrap().to_string(), "66605523261.31");
    }
}
