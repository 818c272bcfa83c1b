//! Tabular price data indexed by timestamp.
//!
//! `PriceTable` is the exchange format between providers, the cache, the
//! merge step, and the charts crate. The index is unique and sorted
//! ascending; every column is aligned with it. Absent data is `None`, which
//! is deliberately distinct from a stored `0.0`: providers report zero cells
//! for days without trades, and those are converted to `None` on load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One named column of a [`PriceTable`], aligned with the table index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, e.g. `"Weighted Price"` or `"close"`.
    pub name: String,
    /// Cell values, one per index entry. `None` marks missing data.
    pub values: Vec<Option<f64>>,
}

/// A price series table: sorted unique timestamps plus aligned columns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    index: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
}

impl PriceTable {
    /// Assemble a table from pre-aligned parts.
    ///
    /// Callers must supply a sorted, duplicate-free index and columns whose
    /// value vectors match the index length. The builder and the merge step
    /// uphold this; it is debug-asserted rather than revalidated.
    pub(crate) fn from_parts(index: Vec<DateTime<Utc>>, columns: Vec<Column>) -> Self {
        debug_assert!(index.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(columns.iter().all(|c| c.values.len() == index.len()));
        Self { index, columns }
    }

    /// Start building a table row by row.
    pub fn builder() -> PriceTableBuilder {
        PriceTableBuilder::default()
    }

    /// The timestamp index, sorted ascending.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.index
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// All columns in insertion order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The values of a named column, aligned with [`timestamps`](Self::timestamps).
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// The cell at (timestamp, column), or `None` if either is absent.
    pub fn cell(&self, timestamp: &DateTime<Utc>, column: &str) -> Option<f64> {
        let row = self.index.binary_search(timestamp).ok()?;
        self.column(column)?.get(row).copied().flatten()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Replace every cell equal to zero with the missing-marker.
    ///
    /// Non-zero cells and already-missing cells are unchanged.
    pub fn replace_zeros(mut self) -> Self {
        for column in &mut self.columns {
            for value in &mut column.values {
                if *value == Some(0.0) {
                    *value = None;
                }
            }
        }
        self
    }
}

/// Row-oriented builder for [`PriceTable`].
///
/// Rows may arrive in any order; the built index is sorted and unique. When
/// the same (timestamp, field) cell is set twice, the later value wins.
#[derive(Debug, Default)]
pub struct PriceTableBuilder {
    names: Vec<String>,
    cells: BTreeMap<DateTime<Utc>, Vec<(usize, f64)>>,
}

impl PriceTableBuilder {
    /// Register a column even if no cell is ever set for it.
    pub fn column(&mut self, name: &str) -> &mut Self {
        self.column_position(name);
        self
    }

    /// Set one cell.
    pub fn cell(&mut self, timestamp: DateTime<Utc>, field: &str, value: f64) -> &mut Self {
        let position = self.column_position(field);
        self.cells.entry(timestamp).or_default().push((position, value));
        self
    }

    /// Build the table.
    pub fn build(self) -> PriceTable {
        let index: Vec<DateTime<Utc>> = self.cells.keys().copied().collect();
        let mut columns: Vec<Column> = self
            .names
            .into_iter()
            .map(|name| Column {
                name,
                values: vec![None; index.len()],
            })
            .collect();

        for (row, (_, cells)) in self.cells.iter().enumerate() {
            for &(position, value) in cells {
                columns[position].values[row] = Some(value);
            }
        }

        PriceTable::from_parts(index, columns)
    }

    fn column_position(&mut self, name: &str) -> usize {
        match self.names.iter().position(|n| n == name) {
            Some(position) => position,
            None => {
                self.names.push(name.to_string());
                self.names.len() - 1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 1, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_builder_sorts_and_dedupes_index() {
        let mut builder = PriceTable::builder();
        builder
            .cell(day(3), "close", 3.0)
            .cell(day(1), "close", 1.0)
            .cell(day(2), "close", 2.0)
            .cell(day(1), "close", 1.5);
        let table = builder.build();

        assert_eq!(table.timestamps(), &[day(1), day(2), day(3)]);
        // later write to the same cell wins
        assert_eq!(table.column("close").unwrap(), &[Some(1.5), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_builder_fills_missing_cells_with_none() {
        let mut builder = PriceTable::builder();
        builder
            .cell(day(1), "open", 10.0)
            .cell(day(2), "close", 11.0);
        let table = builder.build();

        assert_eq!(table.column("open").unwrap(), &[Some(10.0), None]);
        assert_eq!(table.column("close").unwrap(), &[None, Some(11.0)]);
    }

    #[test]
    fn test_registered_column_without_cells_is_all_missing() {
        let mut builder = PriceTable::builder();
        builder.column("volume").cell(day(1), "close", 5.0);
        let table = builder.build();

        assert_eq!(table.column_names(), vec!["volume", "close"]);
        assert_eq!(table.column("volume").unwrap(), &[None]);
    }

    #[test]
    fn test_replace_zeros_only_touches_zero_cells() {
        let mut builder = PriceTable::builder();
        builder
            .cell(day(1), "price", 0.0)
            .cell(day(2), "price", 42.5)
            .cell(day(3), "volume", 0.0);
        let table = builder.build().replace_zeros();

        assert_eq!(table.column("price").unwrap(), &[None, Some(42.5), None]);
        assert_eq!(table.column("volume").unwrap(), &[None, None, None]);
    }

    #[test]
    fn test_cell_lookup() {
        let mut builder = PriceTable::builder();
        builder.cell(day(1), "close", 7.0);
        let table = builder.build();

        assert_eq!(table.cell(&day(1), "close"), Some(7.0));
        assert_eq!(table.cell(&day(2), "close"), None);
        assert_eq!(table.cell(&day(1), "open"), None);
    }

    #[test]
    fn test_serde_round_trip_preserves_rows() {
        let mut builder = PriceTable::builder();
        builder
            .cell(day(1), "Weighted Price", 29374.15)
            .cell(day(2), "Weighted Price", 0.0);
        let table = builder.build();

        let json = serde_json::to_string(&table).unwrap();
        let restored: PriceTable = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, table);
    }
}
