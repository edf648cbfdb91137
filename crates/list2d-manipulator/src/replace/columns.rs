//! Conditional column replacement.

use list2d_core::{List2D, ManipulationError, Row};

use super::replacement::ReplacementMap;

/// Copy `rows`, overwriting the `col_set` cell of every row whose `col_test`
/// cell is a key of `replacements`.
///
/// Rows too short to have a `col_test` cell never match. A matching row too
/// short for `col_set` is an error, as is any failing expression.
pub fn replace_values_in_col_by_dict_values_in_other_col(
    rows: &[Row],
    col_set: usize,
    col_test: usize,
    replacements: &ReplacementMap,
) -> Result<List2D, ManipulationError> {
    replace_counting(rows, col_set, col_test, replacements).map(|(rows, _)| rows)
}

/// Same as the public operation, also returning how many cells were replaced.
pub(crate) fn replace_counting(
    rows: &[Row],
    col_set: usize,
    col_test: usize,
    replacements: &ReplacementMap,
) -> Result<(List2D, usize), ManipulationError> {
    let mut out = List2D::with_capacity(rows.len());
    let mut replaced = 0usize;

    for (index, row) in rows.iter().enumerate() {
        let mut new_row = row.clone();
        if let Some(replacement) = row.get(col_test).and_then(|key| replacements.get(key)) {
            let width = row.len();
            let cell = new_row
                .get_mut(col_set)
                .ok_or(ManipulationError::ColumnOutOfRange {
                    column: col_set,
                    row: index,
                    width,
                })?;
            *cell = replacement.resolve()?;
            replaced += 1;
        }
        out.push(new_row);
    }

    tracing::debug!(rows = rows.len(), replaced, "column replacement applied");
    Ok((out, replaced))
}
