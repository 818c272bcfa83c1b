//! Error types for the charts crate.

use thiserror::Error;

/// Errors that can occur while building chart artifacts.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The requested column does not exist in the source table.
    #[error("Column not found: {0}")]
    MissingColumn(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ChartError::MissingColumn("Weighted Price".to_string());
        assert_eq!(format!("{}", error), "Column not found: Weighted Price");
    }
}
