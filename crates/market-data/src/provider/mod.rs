//! Price series providers.
//!
//! This module contains:
//! - The `SeriesProvider` trait that all providers implement
//! - Concrete provider implementations (Nasdaq Data Link, Poloniex)
//!
//! Providers are interchangeable behind the trait and are pure with respect
//! to caching: check-then-fetch-then-store lives in the cache module.

mod traits;

pub mod datalink;
pub mod poloniex;

pub use traits::SeriesProvider;
