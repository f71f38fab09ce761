// ─────────────────────────────────────────────────────────────────────
// Matrix Calculator — Cardano Kernel Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Rejection of a matrix before any polynomial work begins.
///
/// This is the only failure a solve can produce: once every cell parses
/// to a finite number, the rest of the pipeline is total.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A cell did not parse to a finite real number.
    #[error("Matrix must contain valid numbers (row {row}, column {col}: {value:?})")]
    NotANumber {
        row: usize,
        col: usize,
        value: String,
    },

    /// Input was not 3 rows of 3 cells.
    #[error("Matrix must be 3×3, got {rows} rows with column counts {cols:?}")]
    Shape { rows: usize, cols: Vec<usize> },
}

/// Root error type for all Cardano Kernel failures.
#[derive(Error, Debug)]
pub enum CardanoError {
    /// Matrix input was rejected.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

pub type CardanoResult<T> = Result<T, CardanoError>;
