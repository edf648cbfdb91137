//! Expression compilation and evaluation errors.

use super::error_code::{self, List2DErrorCode};

/// Errors raised by the replacement expression language.
///
/// `Syntax`, `UnknownFunction`, `Arity`, `TooLong` and `EmptyPrefix` are
/// raised while an expression is compiled; the rest only while it is evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpressionError {
    #[error("Syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("{function}() takes {expected} argument(s), got {found}")]
    Arity {
        function: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("Expression is {len} characters long, limit is {max}")]
    TooLong { len: usize, max: usize },

    #[error("Expression prefix must not be empty")]
    EmptyPrefix,

    #[error("Unsupported operand types for {op}: {lhs} and {rhs}")]
    TypeMismatch {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("{function}() cannot accept a {kind} value")]
    InvalidArgument {
        function: &'static str,
        kind: &'static str,
    },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Integer overflow in {op}")]
    Overflow { op: &'static str },

    #[error("Bad operand type for {op}: {kind}")]
    BadOperand { op: &'static str, kind: &'static str },

    #[error("Invalid literal for {function}(): {literal:?}")]
    InvalidLiteral {
        function: &'static str,
        literal: String,
    },
}

impl ExpressionError {
    /// Returns true for errors detected before any evaluation happens.
    pub fn is_compile_error(&self) -> bool {
        matches!(
            self,
            Self::Syntax { .. }
                | Self::UnknownFunction(_)
                | Self::Arity { .. }
                | Self::TooLong { .. }
                | Self::EmptyPrefix
        )
    }
}

impl List2DErrorCode for ExpressionError {
    fn error_code(&self) -> &'static str {
        if self.is_compile_error() {
            error_code::EXPRESSION_SYNTAX
        } else {
            error_code::EXPRESSION_ERROR
        }
    }
}
