//! Poloniex chart-data provider implementation.
//!
//! Generic JSON-over-HTTP reader for the public `returnChartData` endpoint.
//! The request URL is built from a currency pair plus a configured sampling
//! window (start, end, candle period); the JSON candle array is re-indexed
//! so the `date` field becomes the primary index.

use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use serde::Deserialize;

use crate::config::MarketDataConfig;
use crate::errors::MarketDataError;
use crate::models::{PriceTable, SeriesCode};
use crate::provider::SeriesProvider;

const BASE_URL: &str = "https://poloniex.com/public";
const PROVIDER_ID: &str = "POLONIEX";

/// Candle sampling periods accepted by `returnChartData`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandlePeriod {
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    TwoHours,
    FourHours,
    Daily,
}

impl CandlePeriod {
    /// The period in seconds, as the endpoint expects it.
    pub fn as_secs(self) -> u32 {
        match self {
            Self::FiveMinutes => 300,
            Self::FifteenMinutes => 900,
            Self::ThirtyMinutes => 1800,
            Self::TwoHours => 7200,
            Self::FourHours => 14400,
            Self::Daily => 86400,
        }
    }
}

/// The time range and sampling period for chart-data requests.
#[derive(Clone, Copy, Debug)]
pub struct ChartDataWindow {
    /// Start of the range (inclusive).
    pub start: DateTime<Utc>,
    /// End of the range (inclusive).
    pub end: DateTime<Utc>,
    /// Candle width.
    pub period: CandlePeriod,
}

/// Poloniex public chart-data provider.
///
/// One provider instance covers one sampling window; the series code names
/// the currency pair, e.g. `BTC_ETH`.
pub struct ChartDataProvider {
    client: reqwest::blocking::Client,
    window: ChartDataWindow,
}

/// One candle from the `returnChartData` response.
#[derive(Debug, Deserialize)]
struct ChartCandle {
    date: i64,
    high: f64,
    low: f64,
    open: f64,
    close: f64,
    volume: f64,
    #[serde(rename = "quoteVolume")]
    quote_volume: f64,
    #[serde(rename = "weightedAverage")]
    weighted_average: f64,
}

impl ChartDataProvider {
    /// Create a provider for the given sampling window.
    pub fn new(config: &MarketDataConfig, window: ChartDataWindow) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self { client, window }
    }

    /// Build the request URL for a currency pair.
    fn request_url(&self, pair: &str) -> String {
        format!(
            "{}?command=returnChartData&currencyPair={}&start={}&end={}&period={}",
            BASE_URL,
            pair,
            self.window.start.timestamp(),
            self.window.end.timestamp(),
            self.window.period.as_secs()
        )
    }

    /// Parse a candle array into a table indexed by candle date.
    fn parse_response(text: &str) -> Result<PriceTable, MarketDataError> {
        // A failed request answers with {"error": "..."} instead of an array.
        #[derive(Debug, Deserialize)]
        struct ErrorBody {
            error: String,
        }
        if let Ok(body) = serde_json::from_str::<ErrorBody>(text) {
            return Err(MarketDataError::Provider {
                provider: PROVIDER_ID.to_string(),
                message: body.error,
            });
        }

        let candles: Vec<ChartCandle> =
            serde_json::from_str(text).map_err(|e| MarketDataError::Parse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse response: {}", e),
            })?;

        let mut builder = PriceTable::builder();
        for name in ["open", "high", "low", "close", "volume", "quoteVolume", "weightedAverage"] {
            builder.column(name);
        }

        for candle in candles {
            let date = Utc
                .timestamp_opt(candle.date, 0)
                .single()
                .ok_or_else(|| MarketDataError::Parse {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Out-of-range candle date: {}", candle.date),
                })?;

            builder
                .cell(date, "open", candle.open)
                .cell(date, "high", candle.high)
                .cell(date, "low", candle.low)
                .cell(date, "close", candle.close)
                .cell(date, "volume", candle.volume)
                .cell(date, "quoteVolume", candle.quote_volume)
                .cell(date, "weightedAverage", candle.weighted_average);
        }

        Ok(builder.build())
    }
}

impl SeriesProvider for ChartDataProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn fetch_series(&self, code: &SeriesCode) -> Result<PriceTable, MarketDataError> {
        let url = self.request_url(code.as_str());
        debug!("Chart data request: {}", url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Provider {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        Self::parse_response(&response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> ChartDataWindow {
        ChartDataWindow {
            start: Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2017, 12, 31, 0, 0, 0).unwrap(),
            period: CandlePeriod::Daily,
        }
    }

    #[test]
    fn test_provider_id() {
        let provider = ChartDataProvider::new(&MarketDataConfig::new("unused"), window());
        assert_eq!(provider.id(), crate::constants::DATA_SOURCE_POLONIEX);
    }

    #[test]
    fn test_period_seconds() {
        assert_eq!(CandlePeriod::FiveMinutes.as_secs(), 300);
        assert_eq!(CandlePeriod::FifteenMinutes.as_secs(), 900);
        assert_eq!(CandlePeriod::ThirtyMinutes.as_secs(), 1800);
        assert_eq!(CandlePeriod::TwoHours.as_secs(), 7200);
        assert_eq!(CandlePeriod::FourHours.as_secs(), 14400);
        assert_eq!(CandlePeriod::Daily.as_secs(), 86400);
    }

    #[test]
    fn test_request_url_interpolation() {
        let provider = ChartDataProvider::new(&MarketDataConfig::new("unused"), window());
        let url = provider.request_url("BTC_ETH");
        assert_eq!(
            url,
            "https://poloniex.com/public?command=returnChartData&currencyPair=BTC_ETH\
             &start=1420070400&end=1514678400&period=86400"
        );
    }

    #[test]
    fn test_parse_response_reindexes_on_date() {
        let text = r#"[
            {"date": 1424304000, "high": 0.0048, "low": 0.0041, "open": 0.0042,
             "close": 0.0045, "volume": 273.6, "quoteVolume": 61260.0,
             "weightedAverage": 0.00446},
            {"date": 1424217600, "high": 0.0043, "low": 0.0040, "open": 0.0041,
             "close": 0.0042, "volume": 154.2, "quoteVolume": 37120.5,
             "weightedAverage": 0.00415}
        ]"#;
        let table = ChartDataProvider::parse_response(text).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.column_names(),
            vec!["open", "high", "low", "close", "volume", "quoteVolume", "weightedAverage"]
        );
        let first = Utc.timestamp_opt(1424217600, 0).unwrap();
        assert_eq!(table.timestamps()[0], first);
        assert_eq!(table.cell(&first, "close"), Some(0.0042));
    }

    #[test]
    fn test_parse_response_error_body() {
        let err = ChartDataProvider::parse_response(r#"{"error": "Invalid currency pair."}"#)
            .unwrap_err();
        match err {
            MarketDataError::Provider { provider, message } => {
                assert_eq!(provider, "POLONIEX");
                assert_eq!(message, "Invalid currency pair.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_response_malformed_is_fatal() {
        assert!(matches!(
            ChartDataProvider::parse_response("<html>bad gateway</html>"),
            Err(MarketDataError::Parse { .. })
        ));
    }
}
