//! Histogram configuration.

use serde::{Deserialize, Serialize};

use crate::constants::SKIP_VALUES_LABEL;

/// Configuration for the histogram operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HistogramConfig {
    /// Label of the aggregated skip bucket. Default: "**skip_values**".
    pub skip_label: Option<String>,
    /// Default upper bound for row-length histograms. Default: observed maximum.
    pub max_length: Option<usize>,
}

impl HistogramConfig {
    /// Returns the effective skip bucket label.
    pub fn effective_skip_label(&self) -> &str {
        self.skip_label.as_deref().unwrap_or(SKIP_VALUES_LABEL)
    }
}
