//! Coinfolio Charts Crate
//!
//! Chart artifacts for cached price series: time-series curve overlays and
//! Pearson-correlation heatmaps. Artifacts are plain data: tables in, an
//! opaque renderable description out, with width, height, title, tick
//! rotation, and legend placement passed through to whatever backend draws
//! them.
//!
//! # Core Types
//!
//! - [`CurveChart`] - One or more labeled time-series curves
//! - [`HeatmapChart`] - Pairwise-correlation grid with optional fixed bounds
//! - [`CorrelationMatrix`] - The underlying Pearson coefficients
//! - [`ChartOptions`] - Pass-through rendering configuration

pub mod correlation;
pub mod curve;
pub mod errors;
pub mod heatmap;
pub mod options;

pub use correlation::{correlation_matrix, CorrelationMatrix};
pub use curve::{CurveChart, CurveSeries};
pub use errors::ChartError;
pub use heatmap::HeatmapChart;
pub use options::{ChartOptions, LegendPosition};
