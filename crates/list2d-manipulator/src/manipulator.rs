//! `List2DManipulator`: the table operations with a resolved configuration applied.

use std::path::Path;

use tracing::{field, instrument, Span};

use list2d_core::tracing::fields;
use list2d_core::{
    ConfigError, ConfigOverrides, DictOfLists, List2D, ManipulationError, ManipulatorConfig,
    NormalizeError, Row, Value,
};

use crate::convert;
use crate::histogram::{self, LengthRule, RowLengthHistogram, RowLengthMatches};
use crate::normalize;
use crate::replace::{self, ReplacementMap};

/// Runs the table operations using the skip label, length bound, strip set
/// and expression settings of a [`ManipulatorConfig`].
#[derive(Debug, Clone, Default)]
pub struct List2DManipulator {
    config: ManipulatorConfig,
}

impl List2DManipulator {
    pub fn new(config: ManipulatorConfig) -> Self {
        Self { config }
    }

    /// Compiled defaults only; no files or environment are read.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Resolve the layered configuration for `root` and build a manipulator from it.
    pub fn from_root(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        ManipulatorConfig::load(root, overrides).map(Self::new)
    }

    pub fn config(&self) -> &ManipulatorConfig {
        &self.config
    }

    /// Column histogram rendered as `[value, count]` rows, the skip bucket
    /// carrying the configured label.
    #[instrument(skip(self, rows, skip_values), fields(rows = field::Empty, buckets = field::Empty))]
    pub fn histogram_unicates_in_col(
        &self,
        rows: &[Row],
        col: usize,
        skip_values: &[Value],
    ) -> Result<List2D, ManipulationError> {
        let span = Span::current();
        span.record(fields::ROWS, rows.len());
        let hist = histogram::histogram_unicates_in_col(rows, col, skip_values)?;
        span.record(fields::BUCKETS, hist.len());
        Ok(hist.to_list_2d_with_skip_label(self.config.histogram.effective_skip_label()))
    }

    /// Row-length histogram bounded by `max_length`, or by the configured
    /// bound when `None`.
    #[instrument(skip_all, fields(rows = field::Empty, buckets = field::Empty, overflow = field::Empty))]
    pub fn histogram_rows_length(
        &self,
        rows: &[Row],
        max_length: Option<usize>,
    ) -> Result<RowLengthHistogram, ManipulationError> {
        let span = Span::current();
        span.record(fields::ROWS, rows.len());
        let bound = max_length.or(self.config.histogram.max_length);
        let hist = histogram::histogram_rows_length(rows, bound)?;
        span.record(fields::BUCKETS, hist.len());
        span.record(fields::OVERFLOW, hist.overflow());
        Ok(hist)
    }

    /// Row-length histogram plus the rows matching `rule` (e.g. `">2"`).
    #[instrument(skip(self, rows), fields(rows = field::Empty))]
    pub fn histogram_rows_length_matching(
        &self,
        rows: &[Row],
        rule: &str,
    ) -> Result<RowLengthMatches, ManipulationError> {
        Span::current().record(fields::ROWS, rows.len());
        let rule: LengthRule = rule.parse()?;
        histogram::histogram_rows_length_matching(rows, self.config.histogram.max_length, &rule)
    }

    /// Text normalization with the configured strip set.
    pub fn try_value_to_unicode(&self, value: &Value) -> Result<String, NormalizeError> {
        normalize::strip_value(value, self.config.normalize.effective_stripped_chars())
    }

    pub fn value_to_unicode(&self, value: &Value) -> Option<String> {
        self.try_value_to_unicode(value).ok()
    }

    pub fn value_to_int(&self, value: &Value) -> Option<i64> {
        normalize::value_to_int(value)
    }

    #[instrument(skip_all, fields(keys = field::Empty))]
    pub fn dict_with_lists_to_list_2d_only_values(&self, dict: &DictOfLists) -> List2D {
        Span::current().record(fields::KEYS, dict.len());
        convert::dict_with_lists_to_list_2d_only_values(dict)
    }

    #[instrument(skip_all, fields(keys = field::Empty))]
    pub fn dict_with_lists_to_list_2d(&self, dict: &DictOfLists) -> List2D {
        Span::current().record(fields::KEYS, dict.len());
        convert::dict_with_lists_to_list_2d(dict)
    }

    #[instrument(skip(self, rows), fields(rows = field::Empty, keys = field::Empty))]
    pub fn two_columns_to_dict_of_list(
        &self,
        rows: &[Row],
        key_col: usize,
        value_col: usize,
    ) -> Result<DictOfLists, ManipulationError> {
        let span = Span::current();
        span.record(fields::ROWS, rows.len());
        let dict = convert::two_columns_to_dict_of_list(rows, key_col, value_col)?;
        span.record(fields::KEYS, dict.len());
        Ok(dict)
    }

    /// Build a replacement map using the configured expression prefix and
    /// length limit.
    pub fn compile_replacements<I, K, V>(&self, pairs: I) -> Result<ReplacementMap, ManipulationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let replace = &self.config.replace;
        Ok(ReplacementMap::compile_with(
            pairs,
            replace.effective_expression_prefix(),
            replace.effective_max_expression_len(),
        )?)
    }

    #[instrument(skip(self, rows, replacements), fields(rows = field::Empty, replaced = field::Empty))]
    pub fn replace_values_in_col_by_dict_values_in_other_col(
        &self,
        rows: &[Row],
        col_set: usize,
        col_test: usize,
        replacements: &ReplacementMap,
    ) -> Result<List2D, ManipulationError> {
        let span = Span::current();
        span.record(fields::ROWS, rows.len());
        let (out, replaced) = replace::replace_counting(rows, col_set, col_test, replacements)?;
        span.record(fields::REPLACED, replaced);
        Ok(out)
    }
}
