//! Nomics REST API endpoint constants.

/// Base URL for the Nomics v1 REST API.
pub const NOMICS_BASE_URL: &str = "https://api.nomics.com/v1";

/// Endpoint paths, relative to the base URL.
///
/// Several endpoints are only available on paid Nomics plans; the doc
/// comments note which.
pub mod paths {
    // Currencies
    /// Currencies ticker (partial paid plan).
    pub const CURRENCIES_TICKER: &str = "/currencies/ticker";
    /// Currencies metadata.
    pub const CURRENCIES_METADATA: &str = "/currencies";
    /// Currencies sparkline.
    pub const CURRENCIES_SPARKLINE: &str = "/currencies/sparkline";
    /// Currencies supply history (paid plan).
    pub const SUPPLIES_HISTORY: &str = "/supplies/history";

    // Markets
    /// Markets.
    pub const MARKETS: &str = "/markets";
    /// Market-cap history (partial paid plan).
    pub const MARKET_CAP_HISTORY: &str = "/market-cap/history";
    /// Exchange-markets ticker (paid plan).
    pub const EXCHANGE_MARKETS_TICKER: &str = "/exchange-markets/ticker";

    // Volume
    /// Volume history (partial paid plan).
    pub const VOLUME_HISTORY: &str = "/volume/history";

    // Exchange rates
    /// Exchange rates.
    pub const EXCHANGE_RATES: &str = "/exchange-rates";
    /// Exchange rates history.
    pub const EXCHANGE_RATES_HISTORY: &str = "/exchange-rates/history";

    // Global
    /// Global ticker (paid plan).
    pub const GLOBAL_TICKER: &str = "/global-ticker";

    // Exchanges
    /// Exchanges ticker (paid plan).
    pub const EXCHANGES_TICKER: &str = "/exchanges/ticker";
    /// Exchanges volume history (paid plan).
    pub const EXCHANGES_VOLUME_HISTORY: &str = "/exchanges/volume/history";
    /// Exchanges metadata (paid plan).
    pub const EXCHANGES_METADATA: &str = "/exchanges";

    // Candles
    /// Aggregated candles (paid plan).
    pub const CANDLES: &str = "/candles";
    /// Exchange candles (paid plan).
    pub const EXCHANGE_CANDLES: &str = "/exchange_candles";
    /// Market candles (paid plan).
    pub const MARKET_CANDLES: &str = "/markets/candles";

    // Trades
    /// Trades (paid plan).
    pub const TRADES: &str = "/trades";

    // Orders
    /// Order-book snapshot (paid plan).
    pub const ORDERS_SNAPSHOT: &str = "/orders/snapshot";

    // Predictions
    /// Currencies predictions ticker (paid plan).
    pub const PREDICTIONS_TICKER: &str = "/currencies/predictions/ticker";
    /// Currencies predictions history (paid plan).
    pub const PREDICTIONS_HISTORY: &str = "/currencies/predictions/history";
}
