//! Error types for matrix construction, access, and solving.

use thiserror::Error;

/// Errors that can occur in matrix operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A constructor was asked for a matrix with no rows or no columns.
    #[error("matrix must have at least one row and one column, got {num_rows}x{num_cols}")]
    Empty {
        /// Requested row count
        num_rows: usize,
        /// Requested column count
        num_cols: usize,
    },

    /// An input row does not match the length of the first row.
    #[error("jagged input: row {row} has {len} entries, expected {expected}")]
    Jagged {
        /// Index of the offending row
        row: usize,
        /// Length of the offending row
        len: usize,
        /// Length of the first row
        expected: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    #[error("shape mismatch: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    ShapeMismatch {
        /// Shape of the left operand as (rows, cols)
        left: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        right: (usize, usize),
    },

    /// A row index is out of range.
    #[error("row index {index} out of range for {num_rows} rows")]
    RowOutOfBounds {
        /// The invalid index
        index: usize,
        /// Number of rows in the matrix
        num_rows: usize,
    },

    /// A column index is out of range.
    #[error("column index {index} out of range for {num_cols} columns")]
    ColOutOfBounds {
        /// The invalid index
        index: usize,
        /// Number of columns in the matrix
        num_cols: usize,
    },

    /// Elimination hit a zero pivot; the system has no unique solution.
    #[error("matrix is singular")]
    Singular,
}

/// A specialized `Result` type for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

impl MatrixError {
    /// Returns `true` if this error describes an invalid or mismatched shape.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            MatrixError::Empty { .. } | MatrixError::Jagged { .. } | MatrixError::ShapeMismatch { .. }
        )
    }

    /// Returns `true` if this error describes an out-of-range index.
    pub fn is_index_error(&self) -> bool {
        matches!(
            self,
            MatrixError::RowOutOfBounds { .. } | MatrixError::ColOutOfBounds { .. }
        )
    }
}
