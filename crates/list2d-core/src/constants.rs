//! Shared constants for list2d.

/// list2d version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Label of the bucket that aggregates skipped values in a column histogram.
pub const SKIP_VALUES_LABEL: &str = "**skip_values**";

/// Characters stripped from both ends of text by `value_to_unicode`.
pub const STRIPPED_CHARS: &str = " '\\\"\r\n\t";

/// Prefix marking a replacement value as an expression.
pub const EXPRESSION_PREFIX: &str = "=";

/// Default limit on expression source length, in characters.
pub const DEFAULT_MAX_EXPRESSION_LEN: usize = 256;

/// Largest `max_length` accepted by the row-length histogram.
pub const MAX_ROW_LENGTH_BOUND: usize = 1 << 20;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "list2d.toml";

