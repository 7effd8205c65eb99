//! Nomics REST API client.
//!
//! Provides access to all Nomics v1 market-data endpoints.
//!
//! # Trait-based API
//!
//! The [`NomicsClient`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., caching wrapper)
//! - Alternative implementations
//!
//! ```rust,ignore
//! use nomics_api_client::rest::{NomicsClient, NomicsRestClient};
//!
//! async fn use_client<C: NomicsClient>(client: &C) -> Result<(), nomics_api_client::NomicsError> {
//!     let rates = client.get_exchange_rates().await?;
//!     println!("{} rates", rates.len());
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
mod traits;

pub mod candles;
pub mod currencies;
pub mod exchange_rates;
pub mod exchanges;
pub mod global;
pub mod markets;
pub mod orders;
pub mod predictions;
pub mod trades;
pub mod volume;

pub use client::{NomicsRestClient, NomicsRestClientBuilder};
pub use endpoints::*;
pub use traits::NomicsClient;
