//! Row-length comparison rules such as `">2"` or `"<= 3"`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use list2d_core::ManipulationError;
use regex::Regex;
use serde::{Deserialize, Serialize};

static RULE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(<=|>=|==|!=|<|>|=)?\s*(\d+)\s*$").expect("valid length rule pattern")
});

/// Comparison operator of a [`LengthRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl Comparison {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            "=" | "==" => Some(Self::Eq),
            "!=" => Some(Self::Ne),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
        }
    }
}

/// A predicate over row lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LengthRule {
    pub op: Comparison,
    pub length: usize,
}

impl LengthRule {
    pub fn new(op: Comparison, length: usize) -> Self {
        Self { op, length }
    }

    pub fn matches(&self, len: usize) -> bool {
        match self.op {
            Comparison::Lt => len < self.length,
            Comparison::Le => len <= self.length,
            Comparison::Gt => len > self.length,
            Comparison::Ge => len >= self.length,
            Comparison::Eq => len == self.length,
            Comparison::Ne => len != self.length,
        }
    }
}

impl FromStr for LengthRule {
    type Err = ManipulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| ManipulationError::InvalidMatchRule {
            rule: s.to_string(),
            message: message.to_string(),
        };
        let caps = RULE_PATTERN
            .captures(s)
            .ok_or_else(|| invalid("expected an optional comparison followed by a length"))?;
        let op = match caps.get(1) {
            Some(m) => Comparison::from_symbol(m.as_str())
                .ok_or_else(|| invalid("unknown comparison operator"))?,
            None => Comparison::Eq,
        };
        let length = caps[2]
            .parse::<usize>()
            .map_err(|_| invalid("length does not fit in usize"))?;
        Ok(Self { op, length })
    }
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.symbol(), self.length)
    }
}
