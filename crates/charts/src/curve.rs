//! Time-series curve charts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coinfolio_market_data::PriceTable;

use crate::errors::ChartError;
use crate::options::ChartOptions;

/// One labeled curve: the present cells of a table column, in index order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveSeries {
    /// Series label, shown in the legend.
    pub label: String,
    /// Plotted points. Missing cells are skipped, not drawn as zero.
    pub points: Vec<(DateTime<Utc>, f64)>,
}

impl CurveSeries {
    fn from_column(table: &PriceTable, column: &str) -> Option<Self> {
        let values = table.column(column)?;
        let points = table
            .timestamps()
            .iter()
            .zip(values.iter())
            .filter_map(|(ts, value)| value.map(|v| (*ts, v)))
            .collect();
        Some(Self {
            label: column.to_string(),
            points,
        })
    }
}

/// A renderable time-series chart: one or more curves plus options.
///
/// This is an opaque artifact for a rendering backend; building one has no
/// side effects and the options are passed through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveChart {
    /// The curves, in source-column order.
    pub series: Vec<CurveSeries>,
    /// Pass-through rendering options.
    pub options: ChartOptions,
}

impl CurveChart {
    /// A single-curve chart from one named column.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::MissingColumn`] when the table has no such
    /// column.
    pub fn from_column(
        table: &PriceTable,
        column: &str,
        options: ChartOptions,
    ) -> Result<Self, ChartError> {
        let series = CurveSeries::from_column(table, column)
            .ok_or_else(|| ChartError::MissingColumn(column.to_string()))?;
        Ok(Self {
            series: vec![series],
            options,
        })
    }

    /// An overlay chart with one curve per table column.
    ///
    /// Typically fed with a merged table, one column per exchange.
    pub fn overlay(table: &PriceTable, options: ChartOptions) -> Self {
        let series = table
            .columns()
            .iter()
            .filter_map(|column| CurveSeries::from_column(table, &column.name))
            .collect();
        Self { series, options }
    }
}
