//! Table manipulation errors (hard validation failures).

use super::error_code::{self, List2DErrorCode};
use super::ExpressionError;

/// Errors returned by the validating table operations.
/// Expression failures are folded in via `From`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ManipulationError {
    #[error("{operation} requires at least one row")]
    EmptyInput { operation: &'static str },

    #[error("Column {column} out of range for row {row} (width {width})")]
    ColumnOutOfRange {
        column: usize,
        row: usize,
        width: usize,
    },

    #[error("Invalid match rule {rule:?}: {message}")]
    InvalidMatchRule { rule: String, message: String },

    #[error("Row length bound {bound} exceeds the limit of {max}")]
    BoundTooLarge { bound: usize, max: usize },

    #[error("Expression error: {0}")]
    Expression(#[from] ExpressionError),
}

impl ManipulationError {
    /// Returns true for input validation failures (as opposed to expression failures).
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Expression(_))
    }
}

impl List2DErrorCode for ManipulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput { .. } => error_code::EMPTY_INPUT,
            Self::ColumnOutOfRange { .. } => error_code::COLUMN_OUT_OF_RANGE,
            Self::InvalidMatchRule { .. } => error_code::INVALID_MATCH_RULE,
            Self::BoundTooLarge { .. } => error_code::BOUND_TOO_LARGE,
            Self::Expression(e) => e.error_code(),
        }
    }
}
