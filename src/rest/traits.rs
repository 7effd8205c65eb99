//! Trait definition for the Nomics REST API client.
//!
//! This module provides the `NomicsClient` trait which abstracts all REST API
//! operations. This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., caching wrapper)
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use nomics_api_client::rest::{NomicsClient, NomicsRestClient};
//!
//! async fn print_rates<C: NomicsClient>(client: &C) -> Result<(), nomics_api_client::NomicsError> {
//!     let rates = client.get_exchange_rates().await?;
//!     println!("{} rates", rates.len());
//!     Ok(())
//! }
//! ```

use std::future::Future;
use std::path::Path;

use crate::error::NomicsError;
use crate::rest::candles::{
    Candle, CandlesRequest, ExchangeCandlesRequest, MarketCandle, MarketCandlesRequest,
};
use crate::rest::currencies::{
    CurrenciesMetadataRequest, CurrenciesSparklineRequest, CurrenciesTickerRequest,
    CurrencyMetadata, CurrencySparkline, CurrencyTicker, SupplyHistoryEntry, SupplyHistoryRequest,
};
use crate::rest::exchange_rates::{
    ExchangeRate, ExchangeRateHistoryEntry, ExchangeRatesHistoryRequest,
};
use crate::rest::exchanges::{
    ExchangeMetadata, ExchangeTicker, ExchangesMetadataRequest, ExchangesTickerRequest,
    ExchangesVolumeHistoryRequest,
};
use crate::rest::global::{GlobalTicker, GlobalTickerRequest};
use crate::rest::markets::{
    ExchangeMarketTicker, ExchangeMarketsTickerRequest, Market, MarketCapHistoryEntry,
    MarketCapHistoryRequest, MarketsRequest,
};
use crate::rest::orders::{OrdersSnapshot, OrdersSnapshotRequest};
use crate::rest::predictions::{
    CurrencyPredictions, PredictionsHistory, PredictionsHistoryRequest, PredictionsTickerRequest,
};
use crate::rest::trades::{Trade, TradesRequest};
use crate::rest::volume::{VolumeHistoryEntry, VolumeHistoryRequest};

/// Trait defining all Nomics REST API operations.
///
/// This trait enables dependency injection and allows for:
/// - Testing with mock implementations
/// - Wrapping with decorators
/// - Alternative implementations
///
/// All methods are async and return `Result<T, NomicsError>`.
pub trait NomicsClient: Send + Sync {
    // ========== Currencies ==========

    /// Get price, volume and market-cap statistics for currencies.
    fn get_currencies_ticker(
        &self,
        request: &CurrenciesTickerRequest,
    ) -> impl Future<Output = Result<Vec<CurrencyTicker>, NomicsError>> + Send;

    /// Get descriptive metadata for currencies.
    fn get_currencies_metadata(
        &self,
        request: &CurrenciesMetadataRequest,
    ) -> impl Future<Output = Result<Vec<CurrencyMetadata>, NomicsError>> + Send;

    /// Download currency metadata as CSV.
    fn get_currencies_metadata_csv(
        &self,
        request: &CurrenciesMetadataRequest,
        path: &Path,
    ) -> impl Future<Output = Result<(), NomicsError>> + Send;

    /// Get price sparklines for currencies.
    fn get_currencies_sparkline(
        &self,
        request: &CurrenciesSparklineRequest,
    ) -> impl Future<Output = Result<Vec<CurrencySparkline>, NomicsError>> + Send;

    /// Get the supply history of a currency.
    fn get_supply_history(
        &self,
        request: &SupplyHistoryRequest,
    ) -> impl Future<Output = Result<Vec<SupplyHistoryEntry>, NomicsError>> + Send;

    /// Download the supply history of a currency as CSV.
    fn get_supply_history_csv(
        &self,
        request: &SupplyHistoryRequest,
        path: &Path,
    ) -> impl Future<Output = Result<(), NomicsError>> + Send;

    // ========== Markets ==========

    /// Get the markets Nomics tracks.
    fn get_markets(
        &self,
        request: &MarketsRequest,
    ) -> impl Future<Output = Result<Vec<Market>, NomicsError>> + Send;

    /// Download market listings as CSV.
    fn get_markets_csv(
        &self,
        request: &MarketsRequest,
        path: &Path,
    ) -> impl Future<Output = Result<(), NomicsError>> + Send;

    /// Get the total market-cap history.
    fn get_market_cap_history(
        &self,
        request: &MarketCapHistoryRequest,
    ) -> impl Future<Output = Result<Vec<MarketCapHistoryEntry>, NomicsError>> + Send;

    /// Download the market-cap history as CSV.
    fn get_market_cap_history_csv(
        &self,
        request: &MarketCapHistoryRequest,
        path: &Path,
    ) -> impl Future<Output = Result<(), NomicsError>> + Send;

    /// Get per-market ticker statistics across exchanges.
    fn get_exchange_markets_ticker(
        &self,
        request: &ExchangeMarketsTickerRequest,
    ) -> impl Future<Output = Result<Vec<ExchangeMarketTicker>, NomicsError>> + Send;

    // ========== Volume ==========

    /// Get the aggregated volume history.
    fn get_volume_history(
        &self,
        request: &VolumeHistoryRequest,
    ) -> impl Future<Output = Result<Vec<VolumeHistoryEntry>, NomicsError>> + Send;

    /// Download the aggregated volume history as CSV.
    fn get_volume_history_csv(
        &self,
        request: &VolumeHistoryRequest,
        path: &Path,
    ) -> impl Future<Output = Result<(), NomicsError>> + Send;

    // ========== Exchange rates ==========

    /// Get the current exchange rates.
    fn get_exchange_rates(
        &self,
    ) -> impl Future<Output = Result<Vec<ExchangeRate>, NomicsError>> + Send;

    /// Download the current exchange rates as CSV.
    fn get_exchange_rates_csv(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<(), NomicsError>> + Send;

    /// Get the exchange-rate history of one currency.
    fn get_exchange_rates_history(
        &self,
        request: &ExchangeRatesHistoryRequest,
    ) -> impl Future<Output = Result<Vec<ExchangeRateHistoryEntry>, NomicsError>> + Send;

    /// Download the exchange-rate history of one currency as CSV.
    fn get_exchange_rates_history_csv(
        &self,
        request: &ExchangeRatesHistoryRequest,
        path: &Path,
    ) -> impl Future<Output = Result<(), NomicsError>> + Send;

    // ========== Global ==========

    /// Get market-wide statistics across all cryptoassets.
    fn get_global_ticker(
        &self,
        request: &GlobalTickerRequest,
    ) -> impl Future<Output = Result<Vec<GlobalTicker>, NomicsError>> + Send;

    // ========== Exchanges ==========

    /// Get volume and coverage statistics for exchanges.
    fn get_exchanges_ticker(
        &self,
        request: &ExchangesTickerRequest,
    ) -> impl Future<Output = Result<Vec<ExchangeTicker>, NomicsError>> + Send;

    /// Get the volume history of one exchange.
    fn get_exchanges_volume_history(
        &self,
        request: &ExchangesVolumeHistoryRequest,
    ) -> impl Future<Output = Result<Vec<VolumeHistoryEntry>, NomicsError>> + Send;

    /// Download the volume history of one exchange as CSV.
    fn get_exchanges_volume_history_csv(
        &self,
        request: &ExchangesVolumeHistoryRequest,
        path: &Path,
    ) -> impl Future<Output = Result<(), NomicsError>> + Send;

    /// Get descriptive metadata for exchanges.
    fn get_exchanges_metadata(
        &self,
        request: &ExchangesMetadataRequest,
    ) -> impl Future<Output = Result<Vec<ExchangeMetadata>, NomicsError>> + Send;

    /// Download exchange metadata as CSV.
    fn get_exchanges_metadata_csv(
        &self,
        request: &ExchangesMetadataRequest,
        path: &Path,
    ) -> impl Future<Output = Result<(), NomicsError>> + Send;

    // ========== Candles ==========

    /// Get aggregated candles for one currency.
    fn get_candles(
        &self,
        request: &CandlesRequest,
    ) -> impl Future<Output = Result<Vec<Candle>, NomicsError>> + Send;

    /// Download aggregated candles as CSV.
    fn get_candles_csv(
        &self,
        request: &CandlesRequest,
        path: &Path,
    ) -> impl Future<Output = Result<(), NomicsError>> + Send;

    /// Get raw candles for one market on one exchange.
    fn get_exchange_candles(
        &self,
        request: &ExchangeCandlesRequest,
    ) -> impl Future<Output = Result<Vec<MarketCandle>, NomicsError>> + Send;

    /// Download raw exchange candles as CSV.
    fn get_exchange_candles_csv(
        &self,
        request: &ExchangeCandlesRequest,
        path: &Path,
    ) -> impl Future<Output = Result<(), NomicsError>> + Send;

    /// Get candles for one base/quote pair across exchanges.
    fn get_market_candles(
        &self,
        request: &MarketCandlesRequest,
    ) -> impl Future<Output = Result<Vec<MarketCandle>, NomicsError>> + Send;

    /// Download market candles as CSV.
    fn get_market_candles_csv(
        &self,
        request: &MarketCandlesRequest,
        path: &Path,
    ) -> impl Future<Output = Result<(), NomicsError>> + Send;

    // ========== Trades ==========

    /// Get raw trades for one market.
    fn get_trades(
        &self,
        request: &TradesRequest,
    ) -> impl Future<Output = Result<Vec<Trade>, NomicsError>> + Send;

    /// Download raw trades as CSV.
    fn get_trades_csv(
        &self,
        request: &TradesRequest,
        path: &Path,
    ) -> impl Future<Output = Result<(), NomicsError>> + Send;

    // ========== Orders ==========

    /// Get an order-book snapshot for one market.
    fn get_orders_snapshot(
        &self,
        request: &OrdersSnapshotRequest,
    ) -> impl Future<Output = Result<OrdersSnapshot, NomicsError>> + Send;

    /// Download an order-book snapshot as CSV.
    fn get_orders_snapshot_csv(
        &self,
        request: &OrdersSnapshotRequest,
        path: &Path,
    ) -> impl Future<Output = Result<(), NomicsError>> + Send;

    // ========== Predictions ==========

    /// Get the current price predictions for currencies.
    fn get_predictions_ticker(
        &self,
        request: &PredictionsTickerRequest,
    ) -> impl Future<Output = Result<Vec<CurrencyPredictions>, NomicsError>> + Send;

    /// Get past predictions and realized prices for one currency.
    fn get_predictions_history(
        &self,
        request: &PredictionsHistoryRequest,
    ) -> impl Future<Output = Result<PredictionsHistory, NomicsError>> + Send;
}
