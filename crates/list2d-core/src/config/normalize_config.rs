//! Scalar normalization configuration.

use serde::{Deserialize, Serialize};

use crate::constants::STRIPPED_CHARS;

/// Configuration for `value_to_unicode` / `value_to_int`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Characters trimmed from both ends of text. Default: space, quotes, backslash, CR, LF, TAB.
    pub stripped_chars: Option<String>,
}

impl NormalizeConfig {
    /// Returns the effective strip set.
    pub fn effective_stripped_chars(&self) -> &str {
        self.stripped_chars.as_deref().unwrap_or(STRIPPED_CHARS)
    }
}
