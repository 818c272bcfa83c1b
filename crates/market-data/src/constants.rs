//! Series catalog constants.

/// Data source identifiers
pub const DATA_SOURCE_DATA_LINK: &str = "NASDAQ_DATA_LINK";
pub const DATA_SOURCE_POLONIEX: &str = "POLONIEX";

/// Exchanges with USD bitcoin histories on the Data Link BCHARTS database.
pub const EXCHANGES: &[&str] = &[
    "BITFINEX", "BITSTAMP", "COINBASE", "ITBIT", "KRAKEN", "OKCOIN",
];

/// Altcoins with BTC trading pairs on Poloniex.
pub const ALTCOINS: &[&str] = &[
    "ETH", "LTC", "XRP", "ETC", "STR", "DASH", "SC", "XMR", "XEM",
];

/// Database prefix for BCHARTS exchange series, e.g. `BCHARTS/KRAKENUSD`.
pub const DATALINK_BCHARTS_PREFIX: &str = "BCHARTS";

/// Column carrying the volume-weighted daily price in BCHARTS series.
pub const WEIGHTED_PRICE_COLUMN: &str = "Weighted Price";
