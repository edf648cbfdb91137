//! list2d-manipulator: helpers over list-of-lists tables.
//!
//! - Histograms: distinct values of a column, row lengths, length rules
//! - Conversions: dict of lists to rows and back
//! - Normalization: soft text / integer coercion of single cells
//! - Replacement: overwrite one column keyed by another, with `=` formulas
//!
//! Every operation is a pure function over borrowed input. The
//! [`List2DManipulator`] facade applies a [`ManipulatorConfig`](list2d_core::ManipulatorConfig).

pub mod convert;
pub mod expression;
pub mod histogram;
pub mod manipulator;
pub mod normalize;
pub mod replace;

pub use convert::{
    dict_with_lists_to_list_2d, dict_with_lists_to_list_2d_only_values,
    two_columns_to_dict_of_list,
};
pub use expression::{compile, Expression};
pub use histogram::{
    histogram_rows_length, histogram_rows_length_matching, histogram_unicates_in_col, Bucket,
    ColumnBucket, Comparison, Histogram, LengthRule, RowLengthHistogram, RowLengthMatches,
};
pub use manipulator::List2DManipulator;
pub use normalize::{try_value_to_int, try_value_to_unicode, value_to_int, value_to_unicode};
pub use replace::{replace_values_in_col_by_dict_values_in_other_col, Replacement, ReplacementMap};
