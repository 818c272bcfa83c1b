//! Provider trait definition.

use crate::errors::MarketDataError;
use crate::models::{PriceTable, SeriesCode};

/// A remote source of price series.
///
/// Implementations download and parse one series per call, blocking until
/// the response is complete. Providers never read or write the cache; that
/// responsibility belongs exclusively to
/// [`SeriesCache`](crate::cache::SeriesCache).
///
/// # Example
///
/// ```ignore
/// use coinfolio_market_data::provider::SeriesProvider;
///
/// struct FixedProvider;
///
/// impl SeriesProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     fn fetch_series(&self, code: &SeriesCode) -> Result<PriceTable, MarketDataError> {
///         // ... build a table
///     }
/// }
/// ```
pub trait SeriesProvider {
    /// Unique identifier for this provider, e.g. "NASDAQ_DATA_LINK".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Download the full history for one series.
    ///
    /// # Errors
    ///
    /// Network and parse failures propagate unmodified; there is no retry.
    fn fetch_series(&self, code: &SeriesCode) -> Result<PriceTable, MarketDataError>;
}
