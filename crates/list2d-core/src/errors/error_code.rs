//! List2DErrorCode trait for structured error reporting.

/// Trait for attaching a stable error code to every list2d error.
/// Callers that surface errors across a boundary (logs, bindings, reports)
/// match on the code rather than on the message text.
pub trait List2DErrorCode {
    /// Returns the error code string (e.g., "COLUMN_OUT_OF_RANGE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const COLUMN_OUT_OF_RANGE: &str = "COLUMN_OUT_OF_RANGE";
pub const INVALID_MATCH_RULE: &str = "INVALID_MATCH_RULE";
pub const BOUND_TOO_LARGE: &str = "BOUND_TOO_LARGE";
pub const EXPRESSION_ERROR: &str = "EXPRESSION_ERROR";
pub const EXPRESSION_SYNTAX: &str = "EXPRESSION_SYNTAX";
pub const NORMALIZE_ERROR: &str = "NORMALIZE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
