//! Merging cached tables into combined wide tables.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::errors::MarketDataError;
use crate::models::{Column, PriceTable};

/// Merge one named column from each source table into a combined table.
///
/// Output columns are named by the supplied labels, in input order. The
/// output index is the sorted union of the source indexes (an outer join on
/// timestamp); cells with no matching source row are the missing-marker.
///
/// # Errors
///
/// Returns [`MarketDataError::MissingColumn`] when any source table lacks
/// `column`. No partial result is produced.
pub fn merge(
    tables: &[(String, PriceTable)],
    column: &str,
) -> Result<PriceTable, MarketDataError> {
    let mut union: BTreeSet<DateTime<Utc>> = BTreeSet::new();
    for (_, table) in tables {
        if table.column(column).is_none() {
            return Err(MarketDataError::MissingColumn(column.to_string()));
        }
        union.extend(table.timestamps().iter().copied());
    }

    let index: Vec<DateTime<Utc>> = union.into_iter().collect();
    let columns = tables
        .iter()
        .map(|(label, table)| Column {
            name: label.clone(),
            values: index.iter().map(|ts| table.cell(ts, column)).collect(),
        })
        .collect();

    Ok(PriceTable::from_parts(index, columns))
}
