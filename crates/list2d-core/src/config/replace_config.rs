//! Column replacement configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_EXPRESSION_LEN, EXPRESSION_PREFIX};

/// Configuration for conditional column replacement.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReplaceConfig {
    /// Prefix marking a replacement as an expression. Default: "=".
    pub expression_prefix: Option<String>,
    /// Longest accepted expression source, in characters. Default: 256.
    pub max_expression_len: Option<usize>,
}

impl ReplaceConfig {
    /// Returns the effective expression prefix.
    pub fn effective_expression_prefix(&self) -> &str {
        self.expression_prefix.as_deref().unwrap_or(EXPRESSION_PREFIX)
    }

    /// Returns the effective expression length limit.
    pub fn effective_max_expression_len(&self) -> usize {
        self.max_expression_len.unwrap_or(DEFAULT_MAX_EXPRESSION_LEN)
    }
}
