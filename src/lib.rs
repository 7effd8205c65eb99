//! # Nomics Client
//!
//! An async Rust client library for the Nomics cryptocurrency market data REST API.
//!
//! ## Features
//!
//! - All v1 market-data endpoints: currencies, markets, exchanges, candles,
//!   trades, order-book snapshots, volume, exchange rates, global ticker and
//!   predictions
//! - CSV download variants for the endpoints that support `format=csv`
//! - Strong typing for all request/response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nomics_api_client::rest::NomicsRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NomicsRestClient::new("your-api-key");
//!     let rates = client.get_exchange_rates().await?;
//!     println!("{} exchange rates", rates.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::NomicsError;
pub use types::common::{CandleInterval, Format, SortOrder, TickerInterval};

/// Result type alias using NomicsError
pub type Result<T> = std::result::Result<T, NomicsError>;
