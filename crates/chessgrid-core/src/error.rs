//! Error types for square lookups.

/// Errors from building a [`Square`](crate::square::Square) out of
/// caller-supplied coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// A linear index outside 0..64.
    #[error("square index {index} out of range, expected 0..64")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// A row or column outside 0..8.
    #[error("coordinates (row {row}, col {col}) out of range, expected 0..8")]
    CoordsOutOfRange {
        /// The rejected row.
        row: usize,
        /// The rejected column.
        col: usize,
    },
    /// A string that is not a file letter followed by a rank digit.
    #[error("invalid algebraic square: \"{found}\"")]
    InvalidAlgebraic {
        /// The rejected string.
        found: String,
    },
}
