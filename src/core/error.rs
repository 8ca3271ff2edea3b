use thiserror::Error;

/// Errors raised by the assignment engine
///
/// None of these are retried internally: the computation is deterministic,
/// so the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignError {
    #[error("invalid matrix shape: {rows} rows x {cols} columns")]
    ShapeError { rows: usize, cols: usize },

    #[error("solver exceeded {limit} potential adjustments while inserting row {row}")]
    NonConvergence { row: usize, limit: usize },

    #[error("non-finite value {value} at row {row}, column {col}")]
    InvalidValue { row: usize, col: usize, value: f64 },

    #[error("empty score range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
}
