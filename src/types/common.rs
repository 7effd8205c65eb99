//! Common domain types for the Nomics API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rolling statistics window accepted by the ticker endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickerInterval {
    /// Last hour
    #[serde(rename = "1h")]
    OneHour,
    /// Last day
    #[serde(rename = "1d")]
    OneDay,
    /// Last seven days
    #[serde(rename = "7d")]
    SevenDays,
    /// Last thirty days
    #[serde(rename = "30d")]
    ThirtyDays,
    /// Last 365 days
    #[serde(rename = "365d")]
    OneYear,
    /// Year to date
    #[serde(rename = "ytd")]
    YearToDate,
}

impl std::fmt::Display for TickerInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TickerInterval::OneHour => "1h",
            TickerInterval::OneDay => "1d",
            TickerInterval::SevenDays => "7d",
            TickerInterval::ThirtyDays => "30d",
            TickerInterval::OneYear => "365d",
            TickerInterval::YearToDate => "ytd",
        };
        write!(f, "{}", s)
    }
}

/// Candle aggregation window for the candle endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandleInterval {
    /// One-minute candles
    #[serde(rename = "1m")]
    OneMinute,
    /// Five-minute candles
    #[serde(rename = "5m")]
    FiveMinutes,
    /// Thirty-minute candles
    #[serde(rename = "30m")]
    ThirtyMinutes,
    /// One-hour candles
    #[serde(rename = "1h")]
    OneHour,
    /// Four-hour candles
    #[serde(rename = "4h")]
    FourHours,
    /// Daily candles
    #[serde(rename = "1d")]
    OneDay,
}

impl std::fmt::Display for CandleInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CandleInterval::OneMinute => "1m",
            CandleInterval::FiveMinutes => "5m",
            CandleInterval::ThirtyMinutes => "30m",
            CandleInterval::OneHour => "1h",
            CandleInterval::FourHours => "4h",
            CandleInterval::OneDay => "1d",
        };
        write!(f, "{}", s)
    }
}

/// Sort direction for endpoints that accept an `order` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Output mode for an endpoint response.
///
/// `Json` bodies are decoded into typed responses; `Csv` bodies are streamed
/// verbatim to a file on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Decoded JSON (the default)
    #[default]
    Json,
    /// Raw CSV saved to disk
    Csv,
}

impl Format {
    /// The value sent in the `format` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Volume broken down by transparency grade.
///
/// Appears inside the interval statistics of the currencies ticker and the
/// global ticker when `include-transparency` is requested.
#[derive(Debug, Clone, Deserialize)]
pub struct VolumeTransparency {
    /// Transparency grade ("A", "B", ...)
    #[serde(default)]
    pub grade: Option<String>,
    /// Volume attributed to this grade
    #[serde(default)]
    pub volume: Option<Decimal>,
    /// Absolute volume change over the interval
    #[serde(default)]
    pub volume_change: Option<Decimal>,
    /// Percent volume change over the interval
    #[serde(default)]
    pub volume_change_pct: Option<Decimal>,
}
