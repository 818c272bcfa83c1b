//! High-level service tying configuration, providers, and the cache
//! together.
//!
//! This is the surface scripts use: ask for an exchange history or a
//! Poloniex pair and get a cached table back, then merge the results into a
//! combined view.

use crate::cache::SeriesCache;
use crate::config::MarketDataConfig;
use crate::constants::DATALINK_BCHARTS_PREFIX;
use crate::errors::MarketDataError;
use crate::models::{PriceTable, SeriesCode};
use crate::provider::datalink::DataLinkProvider;
use crate::provider::poloniex::{ChartDataProvider, ChartDataWindow};
use crate::transform;

/// Cached access to exchange and altcoin price histories.
pub struct MarketDataService {
    config: MarketDataConfig,
    cache: SeriesCache,
    datalink: DataLinkProvider,
}

impl MarketDataService {
    /// Create a service from an explicit configuration.
    pub fn new(config: MarketDataConfig) -> Self {
        let cache = SeriesCache::from_config(&config);
        let datalink = DataLinkProvider::new(&config);
        Self {
            config,
            cache,
            datalink,
        }
    }

    /// Create a service configured from the environment.
    ///
    /// # Errors
    ///
    /// Fails when the API key variable is unset; see
    /// [`MarketDataConfig::from_env`].
    pub fn from_env() -> Result<Self, MarketDataError> {
        Ok(Self::new(MarketDataConfig::from_env()?))
    }

    /// Fetch (or load from cache) an arbitrary Data Link series.
    pub fn series(&self, code: &SeriesCode) -> Result<PriceTable, MarketDataError> {
        self.cache.get(code, &self.datalink)
    }

    /// Fetch (or load from cache) the USD bitcoin history of one exchange,
    /// e.g. `"KRAKEN"` resolves to the `BCHARTS/KRAKENUSD` series.
    pub fn exchange_history(&self, exchange: &str) -> Result<PriceTable, MarketDataError> {
        let code = SeriesCode::new(format!("{}/{}USD", DATALINK_BCHARTS_PREFIX, exchange));
        self.series(&code)
    }

    /// Collect the histories of several exchanges as ordered label/table
    /// pairs, ready for [`merged_column`](Self::merged_column).
    pub fn collect_exchange_data(
        &self,
        exchanges: &[&str],
    ) -> Result<Vec<(String, PriceTable)>, MarketDataError> {
        exchanges
            .iter()
            .map(|exchange| {
                self.exchange_history(exchange)
                    .map(|table| (exchange.to_string(), table))
            })
            .collect()
    }

    /// Fetch (or load from cache) candles for a Poloniex currency pair over
    /// the given window. The pair name is the cache key.
    pub fn chart_data(
        &self,
        pair: &str,
        window: ChartDataWindow,
    ) -> Result<PriceTable, MarketDataError> {
        let provider = ChartDataProvider::new(&self.config, window);
        self.cache.get(&SeriesCode::new(pair), &provider)
    }

    /// Fetch (or load from cache) the BTC trading history of one altcoin,
    /// e.g. `"ETH"` resolves to the `BTC_ETH` Poloniex pair.
    pub fn altcoin_history(
        &self,
        coin: &str,
        window: ChartDataWindow,
    ) -> Result<PriceTable, MarketDataError> {
        self.chart_data(&format!("BTC_{}", coin), window)
    }

    /// Merge one column from each labeled table into a combined table.
    pub fn merged_column(
        &self,
        tables: &[(String, PriceTable)],
        column: &str,
    ) -> Result<PriceTable, MarketDataError> {
        transform::merge(tables, column)
    }
}
