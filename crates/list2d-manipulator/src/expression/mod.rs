//! Restricted formula language for replacement values.
//!
//! A replacement such as `=str(len('abc'))` is compiled once into an
//! [`Expression`] and evaluated every time it is applied. Only literals,
//! arithmetic and a fixed set of built-in functions are available.

pub mod ast;
mod eval;
mod lexer;
mod parser;

use std::fmt;

use list2d_core::{ExpressionError, Value};

pub use ast::{BinaryOp, Expr, Function, UnaryOp};

/// A compiled formula together with its source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Expr,
}

impl Expression {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Expr {
        &self.root
    }

    pub fn evaluate(&self) -> Result<Value, ExpressionError> {
        eval::evaluate(&self.root)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Compile `src` (without any prefix) into an expression.
///
/// Sources longer than `max_len` characters are rejected before tokenizing.
pub fn compile(src: &str, max_len: usize) -> Result<Expression, ExpressionError> {
    let len = src.chars().count();
    if len > max_len {
        return Err(ExpressionError::TooLong { len, max: max_len });
    }
    let tokens = lexer::tokenize(src)?;
    let root = parser::parse(&tokens, src.len())?;
    Ok(Expression {
        source: src.to_string(),
        root,
    })
}
