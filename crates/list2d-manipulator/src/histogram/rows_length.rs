//! Row-length histograms.

use list2d_core::constants::MAX_ROW_LENGTH_BOUND;
use list2d_core::{ManipulationError, Row};

use super::match_rule::LengthRule;
use super::types::{Bucket, Histogram, RowLengthHistogram, RowLengthMatches};

/// Count rows by length.
///
/// Bucket `i` holds the number of rows with exactly `i` cells. Without a
/// bound the buckets span `0..=longest row`; with `max_length = Some(n)` there
/// are exactly `n + 1` buckets and longer rows are reported as overflow.
/// An empty table yields the single bucket `[0, 0]`.
///
/// An explicit bound above [`MAX_ROW_LENGTH_BOUND`] is `BoundTooLarge`.
pub fn histogram_rows_length(
    rows: &[Row],
    max_length: Option<usize>,
) -> Result<RowLengthHistogram, ManipulationError> {
    let bound = match max_length {
        Some(bound) if bound > MAX_ROW_LENGTH_BOUND => {
            return Err(ManipulationError::BoundTooLarge {
                bound,
                max: MAX_ROW_LENGTH_BOUND,
            });
        }
        Some(bound) => bound,
        // The longest row is already in memory, so its length fits a bucket vector.
        None => rows.iter().map(Vec::len).max().unwrap_or(0),
    };

    let mut counts = vec![0usize; bound + 1];
    let mut overflow = 0usize;
    for row in rows {
        match counts.get_mut(row.len()) {
            Some(count) => *count += 1,
            None => overflow += 1,
        }
    }

    let buckets = counts
        .into_iter()
        .enumerate()
        .map(|(label, count)| Bucket { label, count })
        .collect::<Vec<_>>();

    tracing::debug!(
        rows = rows.len(),
        buckets = buckets.len(),
        overflow,
        "row length histogram built"
    );
    Ok(RowLengthHistogram {
        histogram: Histogram::from_buckets(buckets),
        overflow,
    })
}

/// Row-length histogram plus the rows whose length satisfies `rule`.
///
/// The histogram always covers every row; the matching rows are cloned in
/// input order.
pub fn histogram_rows_length_matching(
    rows: &[Row],
    max_length: Option<usize>,
    rule: &LengthRule,
) -> Result<RowLengthMatches, ManipulationError> {
    let histogram = histogram_rows_length(rows, max_length)?;
    let matched: Vec<Row> = rows
        .iter()
        .filter(|row| rule.matches(row.len()))
        .cloned()
        .collect();

    tracing::debug!(rule = %rule, matched = matched.len(), "length rule applied");
    Ok(RowLengthMatches {
        histogram,
        rows: matched,
    })
}
