//! 2D list → dict of lists.

use list2d_core::{DictOfLists, ManipulationError, Row};

/// Group the `value_col` cells under their `key_col` cells.
///
/// Keys keep first-seen order and each list keeps row order. An empty table
/// yields an empty dict; a row missing either column is an error.
pub fn two_columns_to_dict_of_list(
    rows: &[Row],
    key_col: usize,
    value_col: usize,
) -> Result<DictOfLists, ManipulationError> {
    let needed = key_col.max(value_col);
    let mut dict = DictOfLists::new();
    for (index, row) in rows.iter().enumerate() {
        if needed >= row.len() {
            return Err(ManipulationError::ColumnOutOfRange {
                column: needed,
                row: index,
                width: row.len(),
            });
        }
        dict.push(row[key_col].clone(), row[value_col].clone());
    }
    tracing::debug!(rows = rows.len(), keys = dict.len(), "columns grouped");
    Ok(dict)
}
