//! Replace values in one column based on the value in another.

mod columns;
mod replacement;

pub(crate) use columns::replace_counting;
pub use columns::replace_values_in_col_by_dict_values_in_other_col;
pub use replacement::{Replacement, ReplacementMap};
