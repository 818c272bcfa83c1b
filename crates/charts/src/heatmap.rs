//! Correlation heatmap charts.

use serde::{Deserialize, Serialize};

use coinfolio_market_data::PriceTable;

use crate::correlation::correlation_matrix;
use crate::options::ChartOptions;

/// A renderable heatmap of a table's pairwise-correlation matrix.
///
/// Cells are row-major and aligned with `labels` on both axes; missing
/// coefficients stay missing rather than defaulting to zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeatmapChart {
    /// Axis labels (source column names), identical for rows and columns.
    pub labels: Vec<String>,
    /// Row-major coefficient grid.
    pub cells: Vec<Vec<Option<f64>>>,
    /// Fixed color-scale bounds; `None` lets the renderer fit the data.
    pub color_bounds: Option<(f64, f64)>,
    /// Pass-through rendering options.
    pub options: ChartOptions,
}

impl HeatmapChart {
    /// Build a heatmap from the Pearson correlation matrix of `table`.
    ///
    /// With `absolute_bounds` the color scale is pinned to [-1, 1] so charts
    /// of different tables stay comparable; otherwise the renderer scales to
    /// the observed coefficients.
    pub fn correlation(table: &PriceTable, options: ChartOptions, absolute_bounds: bool) -> Self {
        let matrix = correlation_matrix(table);
        Self {
            labels: matrix.labels().to_vec(),
            cells: matrix.rows().to_vec(),
            color_bounds: absolute_bounds.then_some((-1.0, 1.0)),
            options,
        }
    }
}
