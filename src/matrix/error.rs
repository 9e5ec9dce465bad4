use thiserror::Error;

/// Every failure the kernel can report. All of them are detected before or
/// during a single operation and returned to the immediate caller; nothing is
/// retried or swallowed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Construction with a zero row/column count, or flat data whose length
    /// does not match the requested shape.
    #[error("invalid matrix dimensions {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("incompatible dimensions {lhs_rows}x{lhs_cols} and {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },

    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix is singular")]
    SingularMatrix,
}
