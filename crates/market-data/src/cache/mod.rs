//! On-disk memoization cache for price series.
//!
//! Each series is persisted once at a path derived from its code; every
//! later request for the same code is served from disk without touching the
//! network. Entries are never expired or invalidated by the library;
//! deleting the file is the only invalidation path.
//!
//! There is no locking: two callers missing on the same code at the same
//! time will both fetch and both write. Acceptable for single-user batch
//! use; callers needing stronger guarantees must serialize access
//! themselves.

use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::config::MarketDataConfig;
use crate::errors::MarketDataError;
use crate::models::{PriceTable, SeriesCode};
use crate::provider::SeriesProvider;

/// Cache path for a series code: `<dir>/<code with '/'→'-'>.json`, or the
/// bare file name when no directory is given. Pure function of its inputs.
pub fn cache_path(code: &SeriesCode, dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(dir) => dir.join(code.cache_file_name()),
        None => PathBuf::from(code.cache_file_name()),
    }
}

/// Disk-backed store mapping series codes to cached tables.
#[derive(Clone, Debug, Default)]
pub struct SeriesCache {
    dir: Option<PathBuf>,
}

impl SeriesCache {
    /// A cache writing into the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// A cache writing bare file names into the working directory.
    pub fn unscoped() -> Self {
        Self { dir: None }
    }

    /// A cache using the configured directory, if any.
    pub fn from_config(config: &MarketDataConfig) -> Self {
        Self {
            dir: config.cache_dir.clone(),
        }
    }

    /// The path this cache uses for a code.
    pub fn path_for(&self, code: &SeriesCode) -> PathBuf {
        cache_path(code, self.dir.as_deref())
    }

    /// Return the table for `code`, fetching and persisting it on first use.
    ///
    /// On a hit the file is deserialized and zero cells are replaced with
    /// the missing-marker. On a miss the provider is invoked, the same
    /// zero-to-missing substitution is applied, and exactly one cache file
    /// is written before returning.
    ///
    /// # Errors
    ///
    /// Fetch errors propagate unmodified. An existing file that cannot be
    /// read or deserialized is fatal; it is never silently refetched.
    pub fn get(
        &self,
        code: &SeriesCode,
        provider: &dyn SeriesProvider,
    ) -> Result<PriceTable, MarketDataError> {
        let path = self.path_for(code);

        if path.exists() {
            let file = File::open(&path).map_err(|source| MarketDataError::CacheIo {
                path: path.clone(),
                source,
            })?;
            let table: PriceTable = serde_json::from_reader(BufReader::new(file)).map_err(
                |source| MarketDataError::CacheFormat {
                    path: path.clone(),
                    source,
                },
            )?;
            info!("Loaded {} from cache at {}", code, path.display());
            return Ok(table.replace_zeros());
        }

        info!("Downloading {} from {}", code, provider.id());
        let table = provider.fetch_series(code)?.replace_zeros();

        let file = File::create(&path).map_err(|source| MarketDataError::CacheIo {
            path: path.clone(),
            source,
        })?;
        serde_json::to_writer(BufWriter::new(file), &table).map_err(|source| {
            MarketDataError::CacheFormat {
                path: path.clone(),
                source,
            }
        })?;
        info!("Cached {} at {}", code, path.display());

        Ok(table)
    }
}
