//! Column-value and row-length histograms.

pub mod columns;
pub mod match_rule;
pub mod rows_length;
pub mod types;

pub use columns::histogram_unicates_in_col;
pub use match_rule::{Comparison, LengthRule};
pub use rows_length::{histogram_rows_length, histogram_rows_length_matching};
pub use types::{Bucket, ColumnBucket, Histogram, RowLengthHistogram, RowLengthMatches};
