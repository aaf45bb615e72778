//! Error types for sparmat

use thiserror::Error;

/// Result type alias using sparmat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sparmat operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Multiplication operands with incompatible shapes
    #[error(
        "dimension mismatch: cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}"
    )]
    DimensionMismatch {
        /// Rows of the left operand
        left_rows: usize,
        /// Columns of the left operand
        left_cols: usize,
        /// Rows of the right operand
        right_rows: usize,
        /// Columns of the right operand
        right_cols: usize,
    },

    /// Extraction format outside {coo, csr, csc}
    #[error("unsupported sparse format '{format}', expected 'coo', 'csr' or 'csc'")]
    UnsupportedFormat {
        /// The rejected format name
        format: String,
    },

    /// Elementwise operator invoked with the wrong operand shape
    #[error("invalid operand for operator '{op}': expected {expected}")]
    InvalidOperand {
        /// Primary name of the operator
        op: &'static str,
        /// Description of what the operator accepts
        expected: &'static str,
    },
}
