//! Error types for the market data crate.
//!
//! All failures surface directly to the caller: a fetch either succeeds or
//! returns one of these variants unmodified. There is no retry layer and no
//! partial-result degradation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching, caching, or merging price series.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The API credential environment variable is not set.
    /// Raised at construction time, before any request is made.
    #[error("Missing API credential: set {0}")]
    MissingCredential(&'static str),

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered, but with an error status or error payload.
    #[error("Provider error: {provider} - {message}")]
    Provider {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider response could not be parsed into a price table.
    #[error("Failed to parse response from {provider}: {message}")]
    Parse {
        /// The provider whose response was malformed
        provider: String,
        /// What went wrong while parsing
        message: String,
    },

    /// A merge or extract operation asked for a column the table does not have.
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// Reading or writing a cache file failed.
    #[error("Cache I/O error at {}: {source}", path.display())]
    CacheIo {
        /// The cache file involved
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// A cache file exists but does not deserialize into a price table.
    /// Not handled specially; manual deletion is the only recovery path.
    #[error("Malformed cache file at {}: {source}", path.display())]
    CacheFormat {
        /// The cache file involved
        path: PathBuf,
        /// The underlying serde error
        source: serde_json::Error,
    },
}
