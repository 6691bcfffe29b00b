use thiserror::Error;

/// Error type returned by all fallible matrix operations.
///
/// No operation mutates observable state before detecting an error it can
/// check in advance; every failure propagates to the caller.
#[derive(Error, Debug)]
pub enum MatrixError {
    /// Row data with non-uniform widths (construction or text parsing)
    #[error("matrix must have uniform width")]
    NonUniformWidth,
    /// Elementwise operands or view assignment with unlike dimensions
    #[error("operands must have like dimensions: {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        /// left operand size as (rows, cols)
        lhs: (usize, usize),
        /// right operand size as (rows, cols)
        rhs: (usize, usize),
    },
    /// Matrix multiplication operands disagree on the inner dimension
    #[error("right operand must have as many rows as the left has columns: {lhs:?} * {rhs:?}")]
    DimensionMismatch {
        /// left operand size as (rows, cols)
        lhs: (usize, usize),
        /// right operand size as (rows, cols)
        rhs: (usize, usize),
    },
    /// A requested view or placement extends outside the target's bounds
    #[error("the requested region extends outside the matrix itself")]
    OutOfRange,
    /// Element access at a coordinate that does not exist in the matrix
    #[error("no element at row {r}, column {c}")]
    BadIndex {
        /// requested row (1-indexed)
        r: usize,
        /// requested column (1-indexed)
        c: usize,
    },
    /// Determinant or inverse of a non-square matrix
    #[error("matrix must be square, but is {0}x{1}")]
    NotSquare(usize, usize),
    /// Inverse of a matrix whose determinant is zero
    #[error("matrix not invertible")]
    Singular,
    /// An address string whose selector character is not `R` or `C`
    #[error("address format incorrect: {0}")]
    BadAddress(String),
    /// An address string whose index part is not a number
    #[error("address index malformed")]
    BadAddressIndex(#[from] std::num::ParseIntError),
    /// Stream failure while reading a matrix from a reader
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
