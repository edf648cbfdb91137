//! Structured field names shared by list2d tracing events and spans.
//!
//! Keeping the names in one place lets log queries filter on the same
//! field across every operation.

/// Number of input rows an operation received.
pub const ROWS: &str = "rows";

/// Number of buckets in a produced histogram.
pub const BUCKETS: &str = "buckets";

/// Rows excluded from a bounded row-length histogram.
pub const OVERFLOW: &str = "overflow";

/// Number of cells overwritten by a column replacement.
pub const REPLACED: &str = "replaced";

/// Number of keys in a dict of lists.
pub const KEYS: &str = "keys";
