//! Library configuration.
//!
//! A single explicit struct replaces ad-hoc keyword options: the provider
//! credential, an optional cache directory, and the HTTP timeout. The
//! credential is required at construction time; requests never start
//! without one.

use std::path::PathBuf;
use std::time::Duration;

use crate::errors::MarketDataError;

/// Environment variable holding the Nasdaq Data Link API key.
pub const API_KEY_ENV: &str = "NASDAQ_DATA_LINK_API_KEY";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for providers and the series cache.
#[derive(Clone, Debug)]
pub struct MarketDataConfig {
    /// API credential for the quote provider.
    pub api_key: String,

    /// Directory for cache files. `None` means the current working directory
    /// (cache files are created with bare file names).
    pub cache_dir: Option<PathBuf>,

    /// Timeout applied to every HTTP request.
    pub timeout: Duration,
}

impl MarketDataConfig {
    /// Create a configuration with an explicit API key and defaults for the
    /// rest: no cache directory, 30 second timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            cache_dir: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the API key from [`API_KEY_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::MissingCredential`] when the variable is
    /// unset.
    pub fn from_env() -> Result<Self, MarketDataError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| MarketDataError::MissingCredential(API_KEY_ENV))?;
        Ok(Self::new(api_key))
    }

    /// Set the cache directory.
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// Set the HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
