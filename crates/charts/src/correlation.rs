//! Pairwise Pearson correlation over table columns.

use coinfolio_market_data::PriceTable;

/// Symmetric matrix of pairwise Pearson coefficients, one row and column
/// per source table column.
///
/// A cell is the missing-marker when the two columns share fewer than two
/// rows of data, or when either side is constant over the shared rows.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrelationMatrix {
    labels: Vec<String>,
    values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Column labels, in source order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The full matrix, row-major, aligned with [`labels`](Self::labels).
    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.values
    }

    /// The coefficient for a pair of labels.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        self.values[i][j]
    }
}

/// Compute the Pearson pairwise-correlation matrix of a table's columns.
///
/// Each pair is evaluated over the rows where both cells are present;
/// missing cells never contribute to the sums.
pub fn correlation_matrix(table: &PriceTable) -> CorrelationMatrix {
    let columns = table.columns();
    let labels: Vec<String> = columns.iter().map(|c| c.name.clone()).collect();

    let values = columns
        .iter()
        .map(|a| {
            columns
                .iter()
                .map(|b| pearson(&a.values, &b.values))
                .collect()
        })
        .collect();

    CorrelationMatrix { labels, values }
}

/// Pearson coefficient over pairwise-complete observations.
fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys.iter())
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return None;
    }
    Some(cov / denom)
}
