//! Scalar normalization failures.

use super::error_code::{self, List2DErrorCode};

/// Why a scalar could not be normalized.
///
/// The soft normalizers (`value_to_unicode`, `value_to_int`) collapse all of
/// these into `None`; the `try_` variants hand them back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("Value is absent")]
    Absent,

    #[error("Expected text, got {kind}")]
    NotText { kind: &'static str },

    #[error("Value is blank after stripping")]
    Blank,

    #[error("Not a number: {0:?}")]
    NotNumeric(String),

    #[error("Number out of integer range: {0}")]
    OutOfRange(String),
}

impl List2DErrorCode for NormalizeError {
    fn error_code(&self) -> &'static str {
        error_code::NORMALIZE_ERROR
    }
}
