//! Conversions between dicts of lists and 2D lists.

mod columns_to_dict;
mod dict_to_rows;

pub use columns_to_dict::two_columns_to_dict_of_list;
pub use dict_to_rows::{dict_with_lists_to_list_2d, dict_with_lists_to_list_2d_only_values};
