//! Histogram result types.

use list2d_core::constants::SKIP_VALUES_LABEL;
use list2d_core::{List2D, Row, Value};
use serde::Serialize;

/// One `[label, count]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket<L> {
    pub label: L,
    pub count: usize,
}

/// Ordered buckets; order depends on the histogram kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram<L> {
    buckets: Vec<Bucket<L>>,
}

impl<L> Histogram<L> {
    pub(crate) fn from_buckets(buckets: Vec<Bucket<L>>) -> Self {
        Self { buckets }
    }

    pub fn buckets(&self) -> &[Bucket<L>] {
        &self.buckets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bucket<L>> {
        self.buckets.iter()
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of all bucket counts.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

impl<L: PartialEq> Histogram<L> {
    pub fn count_of(&self, label: &L) -> Option<usize> {
        self.buckets
            .iter()
            .find(|b| &b.label == label)
            .map(|b| b.count)
    }
}

impl<'a, L> IntoIterator for &'a Histogram<L> {
    type Item = &'a Bucket<L>;
    type IntoIter = std::slice::Iter<'a, Bucket<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Label of a column-value bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ColumnBucket {
    /// A distinct column value.
    Value(Value),
    /// All occurrences of the requested skip values.
    Skipped,
}

impl Histogram<ColumnBucket> {
    /// Count for a distinct (non-skipped) value.
    pub fn count_of_value(&self, value: &Value) -> Option<usize> {
        self.buckets.iter().find_map(|b| match &b.label {
            ColumnBucket::Value(v) if v == value => Some(b.count),
            _ => None,
        })
    }

    /// Count of the aggregated skip bucket, if any skip value occurred.
    pub fn skipped(&self) -> Option<usize> {
        self.count_of(&ColumnBucket::Skipped)
    }

    /// Render as `[value, count]` rows, the skip bucket labelled `**skip_values**`.
    pub fn to_list_2d(&self) -> List2D {
        self.to_list_2d_with_skip_label(SKIP_VALUES_LABEL)
    }

    pub fn to_list_2d_with_skip_label(&self, skip_label: &str) -> List2D {
        self.buckets
            .iter()
            .map(|b| {
                let label = match &b.label {
                    ColumnBucket::Value(v) => v.clone(),
                    ColumnBucket::Skipped => Value::from(skip_label),
                };
                vec![label, Value::from_count(b.count)]
            })
            .collect()
    }
}

impl Histogram<usize> {
    /// Render as `[length, count]` rows.
    pub fn to_list_2d(&self) -> List2D {
        self.buckets
            .iter()
            .map(|b| vec![Value::from_count(b.label), Value::from_count(b.count)])
            .collect()
    }
}

/// Row-length histogram where bucket `i` counts rows of length `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowLengthHistogram {
    pub(crate) histogram: Histogram<usize>,
    pub(crate) overflow: usize,
}

impl RowLengthHistogram {
    pub fn histogram(&self) -> &Histogram<usize> {
        &self.histogram
    }

    /// Rows longer than the requested bound; they sit in no bucket.
    pub fn overflow(&self) -> usize {
        self.overflow
    }

    /// Number of rows with exactly `length` cells, `None` past the last bucket.
    pub fn count_for(&self, length: usize) -> Option<usize> {
        self.histogram.buckets.get(length).map(|b| b.count)
    }

    /// Number of buckets (largest covered length + 1).
    pub fn len(&self) -> usize {
        self.histogram.len()
    }

    /// Always false: even an empty table yields the `[0, 0]` bucket.
    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }

    pub fn to_list_2d(&self) -> List2D {
        self.histogram.to_list_2d()
    }
}

/// A row-length histogram plus the rows that satisfied a length rule.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLengthMatches {
    pub histogram: RowLengthHistogram,
    pub rows: Vec<Row>,
}
