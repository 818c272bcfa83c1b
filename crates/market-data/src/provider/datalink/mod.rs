//! Nasdaq Data Link (formerly Quandl) provider implementation.
//!
//! Fetches full dataset histories via the `datasets/{code}/data.json`
//! endpoint, e.g. the BCHARTS bitcoin exchange series. Requires an API key;
//! see [`MarketDataConfig`](crate::config::MarketDataConfig).

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use log::debug;
use serde::Deserialize;

use crate::config::MarketDataConfig;
use crate::errors::MarketDataError;
use crate::models::{PriceTable, SeriesCode};
use crate::provider::SeriesProvider;

const BASE_URL: &str = "https://data.nasdaq.com/api/v3/datasets";
const PROVIDER_ID: &str = "NASDAQ_DATA_LINK";

/// Nasdaq Data Link dataset provider.
///
/// Returns the complete history of a dataset code such as
/// `BCHARTS/BITSTAMPUSD`, indexed by date.
pub struct DataLinkProvider {
    client: reqwest::blocking::Client,
    api_key: String,
}

// ============================================================================
// Response structures for the Data Link API
// ============================================================================

#[derive(Debug, Deserialize)]
struct DatasetDataResponse {
    dataset_data: Option<DatasetData>,
    quandl_error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct DatasetData {
    column_names: Vec<String>,
    data: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    message: String,
}

// ============================================================================
// DataLinkProvider implementation
// ============================================================================

impl DataLinkProvider {
    /// Create a provider using the configured API key and timeout.
    pub fn new(config: &MarketDataConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self {
            client,
            api_key: config.api_key.clone(),
        }
    }

    /// Make a request to the Data Link API and return the response body.
    fn fetch(&self, code: &SeriesCode) -> Result<String, MarketDataError> {
        let endpoint = format!("{}/{}/data.json", BASE_URL, code.as_str());
        let url = reqwest::Url::parse_with_params(&endpoint, &[("api_key", self.api_key.as_str())])
            .map_err(|e| MarketDataError::Provider {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build URL: {}", e),
            })?;

        debug!(
            "Data Link request: {}",
            url.as_str().replace(&self.api_key, "***")
        );

        let response = self.client.get(url).send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            // Error statuses usually still carry a structured quandl_error.
            if let Some(error) = serde_json::from_str::<DatasetDataResponse>(&text)
                .ok()
                .and_then(|r| r.quandl_error)
            {
                return Err(MarketDataError::Provider {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("{}: {}", error.code, error.message),
                });
            }
            return Err(MarketDataError::Provider {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        Ok(text)
    }

    /// Parse a `dataset_data` payload into a table indexed by date.
    fn parse_response(code: &SeriesCode, text: &str) -> Result<PriceTable, MarketDataError> {
        let response: DatasetDataResponse =
            serde_json::from_str(text).map_err(|e| MarketDataError::Parse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse response: {}", e),
            })?;

        if let Some(error) = response.quandl_error {
            return Err(MarketDataError::Provider {
                provider: PROVIDER_ID.to_string(),
                message: format!("{}: {}", error.code, error.message),
            });
        }

        let dataset = response.dataset_data.ok_or_else(|| MarketDataError::Parse {
            provider: PROVIDER_ID.to_string(),
            message: format!("No dataset_data for code: {}", code),
        })?;

        if dataset.column_names.is_empty() {
            return Err(MarketDataError::Parse {
                provider: PROVIDER_ID.to_string(),
                message: "Empty column_names".to_string(),
            });
        }

        // First column is the date index; the rest become table columns.
        let fields = &dataset.column_names[1..];
        let mut builder = PriceTable::builder();
        for field in fields {
            builder.column(field);
        }

        for row in &dataset.data {
            let date = row
                .first()
                .and_then(|v| v.as_str())
                .and_then(Self::parse_date)
                .ok_or_else(|| MarketDataError::Parse {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Unparsable date in row: {:?}", row.first()),
                })?;

            for (field, value) in fields.iter().zip(row.iter().skip(1)) {
                if value.is_null() {
                    continue;
                }
                let number = value.as_f64().ok_or_else(|| MarketDataError::Parse {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Non-numeric cell in column {}: {}", field, value),
                })?;
                builder.cell(date, field, number);
            }
        }

        Ok(builder.build())
    }

    /// Parse a date string in YYYY-MM-DD format to DateTime<Utc>.
    fn parse_date(date_str: &str) -> Option<DateTime<Utc>> {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .and_then(|dt| Utc.from_local_datetime(&dt).single())
    }
}

impl SeriesProvider for DataLinkProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn fetch_series(&self, code: &SeriesCode) -> Result<PriceTable, MarketDataError> {
        let text = self.fetch(code)?;
        Self::parse_response(code, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "dataset_data": {
            "limit": null,
            "column_names": ["Date", "Open", "High", "Low", "Close", "Volume (BTC)", "Weighted Price"],
            "start_date": "2017-12-01",
            "end_date": "2017-12-03",
            "frequency": "daily",
            "data": [
                ["2017-12-03", 11150.0, 11888.0, 10910.0, 11250.3, 9988.12, 11410.63],
                ["2017-12-02", 10866.2, 11270.0, 10755.1, 11150.0, 7720.04, 11022.42],
                ["2017-12-01", 9837.5, 10898.0, 9380.0, 10866.2, 14923.32, 10216.05]
            ],
            "collapse": null,
            "order": null
        }
    }"#;

    #[test]
    fn test_parse_response_indexes_by_date() {
        let code = SeriesCode::new("BCHARTS/BITSTAMPUSD");
        let table = DataLinkProvider::parse_response(&code, SAMPLE).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.column_names(),
            vec!["Open", "High", "Low", "Close", "Volume (BTC)", "Weighted Price"]
        );
        // rows come back newest-first and are re-sorted ascending
        let first = table.timestamps()[0];
        assert_eq!(first, DataLinkProvider::parse_date("2017-12-01").unwrap());
        assert_eq!(table.cell(&first, "Weighted Price"), Some(10216.05));
    }

    #[test]
    fn test_parse_response_null_cell_is_missing() {
        let code = SeriesCode::new("BCHARTS/KRAKENUSD");
        let text = r#"{
            "dataset_data": {
                "column_names": ["Date", "Close"],
                "data": [["2018-01-05", null], ["2018-01-06", 17172.3]]
            }
        }"#;
        let table = DataLinkProvider::parse_response(&code, text).unwrap();
        assert_eq!(table.column("Close").unwrap(), &[None, Some(17172.3)]);
    }

    #[test]
    fn test_parse_response_api_error() {
        let code = SeriesCode::new("BCHARTS/NOSUCH");
        let text = r#"{
            "quandl_error": {
                "code": "QECx02",
                "message": "You have submitted an incorrect Dataset code."
            }
        }"#;
        let err = DataLinkProvider::parse_response(&code, text).unwrap_err();
        match err {
            MarketDataError::Provider { provider, message } => {
                assert_eq!(provider, "NASDAQ_DATA_LINK");
                assert!(message.starts_with("QECx02"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_response_unparsable_date() {
        let code = SeriesCode::new("BCHARTS/BITSTAMPUSD");
        let text = r#"{
            "dataset_data": {
                "column_names": ["Date", "Close"],
                "data": [["12/01/2017", 10866.2]]
            }
        }"#;
        let err = DataLinkProvider::parse_response(&code, text).unwrap_err();
        assert!(matches!(err, MarketDataError::Parse { .. }));
    }

    #[test]
    fn test_parse_date() {
        let date = DataLinkProvider::parse_date("2017-12-01");
        assert!(date.is_some());
        assert_eq!(date.unwrap().date_naive().to_string(), "2017-12-01");
        assert!(DataLinkProvider::parse_date("01-12-2017").is_none());
    }

    #[test]
    fn test_provider_id() {
        let provider = DataLinkProvider::new(&MarketDataConfig::new("test_key"));
        assert_eq!(provider.id(), crate::constants::DATA_SOURCE_DATA_LINK);
    }
}
