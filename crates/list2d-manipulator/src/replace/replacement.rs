//! Replacement values and the lookup map keyed by test-column values.

use list2d_core::constants::{DEFAULT_MAX_EXPRESSION_LEN, EXPRESSION_PREFIX};
use list2d_core::types::FxHashMap;
use list2d_core::{ExpressionError, Value};

use crate::expression::{self, Expression};

/// What a matching cell is overwritten with.
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    /// Stored as is.
    Literal(Value),
    /// Evaluated each time it is applied.
    Expression(Expression),
}

impl Replacement {
    /// Interpret `value`: text starting with `prefix` is compiled as an
    /// expression, anything else is a literal. An empty prefix is rejected.
    pub fn parse(value: Value, prefix: &str, max_len: usize) -> Result<Self, ExpressionError> {
        if prefix.is_empty() {
            return Err(ExpressionError::EmptyPrefix);
        }
        match &value {
            Value::Text(s) if s.starts_with(prefix) => {
                let src = &s[prefix.len()..];
                Ok(Self::Expression(expression::compile(src, max_len)?))
            }
            _ => Ok(Self::Literal(value)),
        }
    }

    /// The value to write into the set column.
    pub fn resolve(&self) -> Result<Value, ExpressionError> {
        match self {
            Self::Literal(v) => Ok(v.clone()),
            Self::Expression(e) => e.evaluate(),
        }
    }

    pub fn is_expression(&self) -> bool {
        matches!(self, Self::Expression(_))
    }
}

/// Replacements keyed by the test-column value they apply to.
#[derive(Debug, Clone, Default)]
pub struct ReplacementMap {
    entries: FxHashMap<Value, Replacement>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map with the default `=` prefix and length limit.
    pub fn compile<I, K, V>(pairs: I) -> Result<Self, ExpressionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Self::compile_with(pairs, EXPRESSION_PREFIX, DEFAULT_MAX_EXPRESSION_LEN)
    }

    /// Build a map, compiling every `prefix`-marked replacement up front.
    /// Later pairs with an equal key win.
    pub fn compile_with<I, K, V>(
        pairs: I,
        prefix: &str,
        max_len: usize,
    ) -> Result<Self, ExpressionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        if prefix.is_empty() {
            return Err(ExpressionError::EmptyPrefix);
        }
        let mut map = Self::new();
        for (key, value) in pairs {
            let replacement = Replacement::parse(value.into(), prefix, max_len)?;
            map.insert(key, replacement);
        }
        tracing::debug!(
            entries = map.len(),
            expressions = map.entries.values().filter(|r| r.is_expression()).count(),
            "replacement map compiled"
        );
        Ok(map)
    }

    pub fn insert(&mut self, key: impl Into<Value>, replacement: Replacement) -> Option<Replacement> {
        self.entries.insert(key.into(), replacement)
    }

    /// Insert a value that is never treated as an expression, even if it
    /// starts with the prefix.
    pub fn insert_literal(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Replacement> {
        self.insert(key, Replacement::Literal(value.into()))
    }

    pub fn get(&self, key: &Value) -> Option<&Replacement> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
