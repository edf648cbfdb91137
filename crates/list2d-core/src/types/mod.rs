//! Cell values and the containers built from them.
//! `Value` scalars, `Row` / `List2D` tables, insertion-ordered `DictOfLists`.

pub mod collections;
pub mod dict_of_lists;
pub mod value;

pub use collections::{FxHashMap, FxHashSet};
pub use dict_of_lists::DictOfLists;
pub use value::{List2D, Row, Value};
