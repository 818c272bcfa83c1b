use serde::{Deserialize, Serialize};
use std::fmt;

/// File extension for cached series tables.
pub const CACHE_FILE_EXT: &str = ".json";

/// Identifier for one remote price series.
///
/// The same string is used as the request parameter sent to the provider and
/// as the cache lookup key. Examples: `"BCHARTS/BITSTAMPUSD"` (Data Link
/// dataset code), `"BTC_ETH"` (Poloniex currency pair).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesCode(String);

impl SeriesCode {
    /// Create a series code from any string-like value.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The raw code as sent to the provider.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Deterministic cache file name for this code.
    ///
    /// Path separators are replaced with `-` so dataset codes like
    /// `BCHARTS/BITSTAMPUSD` map to a single flat file
    /// (`BCHARTS-BITSTAMPUSD.json`). Codes that differ only by the
    /// substituted separator can collide; callers own that namespace.
    pub fn cache_file_name(&self) -> String {
        format!("{}{}", self.0.replace('/', "-"), CACHE_FILE_EXT)
    }
}

impl fmt::Display for SeriesCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for SeriesCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}
