//! Column value histogram.

use list2d_core::types::{FxHashMap, FxHashSet};
use list2d_core::{ManipulationError, Row, Value};

use super::types::{Bucket, ColumnBucket, Histogram};

/// Count the distinct values of column `col`, in order of first occurrence.
///
/// Values listed in `skip_values` are merged into a single
/// [`ColumnBucket::Skipped`] bucket placed where the first skipped value was
/// seen. Fails on an empty table and when any row is too short for `col`.
pub fn histogram_unicates_in_col(
    rows: &[Row],
    col: usize,
    skip_values: &[Value],
) -> Result<Histogram<ColumnBucket>, ManipulationError> {
    if rows.is_empty() {
        return Err(ManipulationError::EmptyInput {
            operation: "histogram_unicates_in_col",
        });
    }
    if let Some((row, width)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, width)| col >= width)
    {
        return Err(ManipulationError::ColumnOutOfRange {
            column: col,
            row,
            width,
        });
    }

    let skip: FxHashSet<&Value> = skip_values.iter().collect();
    let mut positions: FxHashMap<&Value, usize> = FxHashMap::default();
    let mut skip_position: Option<usize> = None;
    let mut buckets: Vec<Bucket<ColumnBucket>> = Vec::new();

    for row in rows {
        let value = &row[col];
        let slot = if skip.contains(value) {
            *skip_position.get_or_insert_with(|| {
                buckets.push(Bucket {
                    label: ColumnBucket::Skipped,
                    count: 0,
                });
                buckets.len() - 1
            })
        } else {
            *positions.entry(value).or_insert_with(|| {
                buckets.push(Bucket {
                    label: ColumnBucket::Value(value.clone()),
                    count: 0,
                });
                buckets.len() - 1
            })
        };
        buckets[slot].count += 1;
    }

    tracing::debug!(
        rows = rows.len(),
        buckets = buckets.len(),
        col,
        "column histogram built"
    );
    Ok(Histogram::from_buckets(buckets))
}
