//! Tests for the column-value and row-length histograms.

use list2d_core::constants::{MAX_ROW_LENGTH_BOUND, SKIP_VALUES_LABEL};
use list2d_core::errors::error_code::List2DErrorCode;
use list2d_core::{row, List2D, ManipulationError, Value};
use list2d_manipulator::histogram::*;

fn letters() -> List2D {
    vec![
        row!["a", "x", "1"],
        row!["b", "y", "2"],
        row!["a", "z", "3"],
        row!["c", "x", "4"],
        row!["a", "y", "5"],
    ]
}

fn colours() -> List2D {
    vec![
        row!["red", "apple"],
        row!["blue", "car"],
        row!["red", "flower"],
        row!["green", "grass"],
        row!["blue", "sky"],
        row!["red", "rose"],
    ]
}

fn varied() -> List2D {
    vec![row![1], row![1, 2], row![1, 2, 3], row![1, 2, 3, 4], row![9]]
}

// ---- histogram_unicates_in_col ----

#[test]
fn test_counts_first_column_in_first_occurrence_order() {
    let hist = histogram_unicates_in_col(&letters(), 0, &[]).unwrap();
    assert_eq!(
        hist.to_list_2d(),
        vec![row!["a", 3], row!["b", 1], row!["c", 1]]
    );
    assert_eq!(hist.total(), 5);
    assert_eq!(hist.skipped(), None);
}

#[test]
fn test_counts_middle_column() {
    let hist = histogram_unicates_in_col(&letters(), 1, &[]).unwrap();
    assert_eq!(hist.count_of_value(&Value::from("x")), Some(2));
    assert_eq!(hist.count_of_value(&Value::from("y")), Some(2));
    assert_eq!(hist.count_of_value(&Value::from("z")), Some(1));
    assert_eq!(hist.count_of_value(&Value::from("w")), None);
}

#[test]
fn test_skip_values_are_aggregated() {
    let hist = histogram_unicates_in_col(&colours(), 0, &[Value::from("red")]).unwrap();
    assert_eq!(
        hist.to_list_2d(),
        vec![
            row![SKIP_VALUES_LABEL, 3],
            row!["blue", 2],
            row!["green", 1],
        ]
    );
}

#[test]
fn test_skip_bucket_sits_at_first_skipped_occurrence() {
    let skip = [Value::from("green"), Value::from("blue")];
    let hist = histogram_unicates_in_col(&colours(), 0, &skip).unwrap();
    let labels: Vec<&ColumnBucket> = hist.iter().map(|b| &b.label).collect();
    assert_eq!(
        labels,
        vec![
            &ColumnBucket::Value(Value::from("red")),
            &ColumnBucket::Skipped,
        ]
    );
    assert_eq!(hist.skipped(), Some(3));
}

#[test]
fn test_unseen_skip_values_add_no_bucket() {
    let hist = histogram_unicates_in_col(&colours(), 0, &[Value::from("purple")]).unwrap();
    assert_eq!(hist.skipped(), None);
    assert_eq!(hist.len(), 3);
}

#[test]
fn test_custom_skip_label() {
    let hist = histogram_unicates_in_col(&colours(), 0, &[Value::from("red")]).unwrap();
    let rows = hist.to_list_2d_with_skip_label("(other)");
    assert_eq!(rows[0], row!["(other)", 3]);
}

#[test]
fn test_mixed_types_are_distinct() {
    let rows = vec![row![1], row!["1"], row![1.0], row![1], row![Value::Null]];
    let hist = histogram_unicates_in_col(&rows, 0, &[]).unwrap();
    assert_eq!(hist.len(), 4);
    assert_eq!(hist.count_of_value(&Value::Int(1)), Some(2));
    assert_eq!(hist.count_of_value(&Value::Null), Some(1));
}

#[test]
fn test_single_row() {
    let hist = histogram_unicates_in_col(&[row!["value1", "value2"]], 0, &[]).unwrap();
    assert_eq!(hist.to_list_2d(), vec![row!["value1", 1]]);
}

#[test]
fn test_out_of_range_column() {
    let err = histogram_unicates_in_col(&letters(), 10, &[]).unwrap_err();
    assert_eq!(
        err,
        ManipulationError::ColumnOutOfRange {
            column: 10,
            row: 0,
            width: 3,
        }
    );
    assert!(err.is_validation());
    assert_eq!(err.error_code(), "COLUMN_OUT_OF_RANGE");
}

#[test]
fn test_short_row_anywhere_is_rejected() {
    let rows = vec![row!["a", 1], row!["b"], row!["c", 3]];
    let err = histogram_unicates_in_col(&rows, 1, &[]).unwrap_err();
    assert_eq!(
        err,
        ManipulationError::ColumnOutOfRange {
            column: 1,
            row: 1,
            width: 1,
        }
    );
}

#[test]
fn test_empty_input() {
    let err = histogram_unicates_in_col(&[], 0, &[]).unwrap_err();
    assert!(matches!(err, ManipulationError::EmptyInput { .. }));
    assert_eq!(err.error_code(), "EMPTY_INPUT");
}

// ---- histogram_rows_length ----

#[test]
fn test_uniform_rows() {
    let rows = vec![row![1, 2, 3], row![4, 5, 6], row![7, 8, 9]];
    let hist = histogram_rows_length(&rows, None).unwrap();
    assert_eq!(
        hist.to_list_2d(),
        vec![row![0, 0], row![1, 0], row![2, 0], row![3, 3]]
    );
    assert_eq!(hist.overflow(), 0);
}

#[test]
fn test_varied_rows() {
    let hist = histogram_rows_length(&varied(), None).unwrap();
    assert_eq!(hist.len(), 5);
    assert_eq!(hist.count_for(1), Some(2));
    assert_eq!(hist.count_for(2), Some(1));
    assert_eq!(hist.count_for(3), Some(1));
    assert_eq!(hist.count_for(4), Some(1));
    assert_eq!(hist.count_for(5), None);
}

#[test]
fn test_bound_larger_than_longest_row() {
    let hist = histogram_rows_length(&varied(), Some(5)).unwrap();
    assert_eq!(hist.len(), 6);
    assert_eq!(hist.count_for(5), Some(0));
    assert_eq!(hist.overflow(), 0);
}

#[test]
fn test_bound_smaller_than_longest_row_overflows() {
    let hist = histogram_rows_length(&varied(), Some(2)).unwrap();
    assert_eq!(
        hist.to_list_2d(),
        vec![row![0, 0], row![1, 2], row![2, 1]]
    );
    assert_eq!(hist.overflow(), 2);
    assert_eq!(hist.histogram().total() + hist.overflow(), varied().len());
}

#[test]
fn test_empty_table() {
    let hist = histogram_rows_length(&[], None).unwrap();
    assert_eq!(hist.to_list_2d(), vec![row![0, 0]]);
    assert!(!hist.is_empty());
}

#[test]
fn test_empty_rows_land_in_bucket_zero() {
    let hist = histogram_rows_length(&[row![], row![], row![1]], None).unwrap();
    assert_eq!(hist.to_list_2d(), vec![row![0, 2], row![1, 1]]);
}

#[test]
fn test_single_element_rows() {
    let rows = vec![row![1], row![2], row![3], row![4]];
    assert_eq!(histogram_rows_length(&rows, None).unwrap().count_for(1), Some(4));
}

#[test]
fn test_huge_bound_is_rejected() {
    let rows = vec![row![1]];
    for bound in [usize::MAX, MAX_ROW_LENGTH_BOUND + 1] {
        let err = histogram_rows_length(&rows, Some(bound)).unwrap_err();
        assert_eq!(
            err,
            ManipulationError::BoundTooLarge {
                bound,
                max: MAX_ROW_LENGTH_BOUND,
            }
        );
        assert!(err.is_validation());
        assert_eq!(err.error_code(), "BOUND_TOO_LARGE");
    }

    let rule: LengthRule = ">0".parse().unwrap();
    assert!(histogram_rows_length_matching(&rows, Some(usize::MAX), &rule).is_err());
}

#[test]
fn test_bound_at_limit_is_accepted() {
    let hist = histogram_rows_length(&[row![1, 2]], Some(MAX_ROW_LENGTH_BOUND)).unwrap();
    assert_eq!(hist.len(), MAX_ROW_LENGTH_BOUND + 1);
    assert_eq!(hist.count_for(2), Some(1));
}

// ---- histogram_rows_length_matching ----

#[test]
fn test_matching_rows_longer_than_two() {
    let rule: LengthRule = ">2".parse().unwrap();
    let result = histogram_rows_length_matching(&varied(), None, &rule).unwrap();
    assert_eq!(result.rows, vec![row![1, 2, 3], row![1, 2, 3, 4]]);
    assert_eq!(result.histogram, histogram_rows_length(&varied(), None).unwrap());
}

#[test]
fn test_matching_with_bound_keeps_overflowing_rows() {
    let rule: LengthRule = ">=3".parse().unwrap();
    let result = histogram_rows_length_matching(&varied(), Some(1), &rule).unwrap();
    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.histogram.overflow(), 3);
}

#[test]
fn test_matching_nothing() {
    let rule = LengthRule::new(Comparison::Eq, 7);
    let result = histogram_rows_length_matching(&varied(), None, &rule).unwrap();
    assert!(result.rows.is_empty());
}

#[test]
fn test_invalid_rule_is_validation_error() {
    let err = "about 3".parse::<LengthRule>().unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.error_code(), "INVALID_MATCH_RULE");
}

#[test]
fn test_json_tables_in_and_out() {
    let rows: List2D = serde_json::from_str(r#"[["a", 1], ["b", null], ["a", 2.5]]"#).unwrap();
    let hist = histogram_unicates_in_col(&rows, 0, &[]).unwrap();
    assert_eq!(
        serde_json::to_value(hist.to_list_2d()).unwrap(),
        serde_json::json!([["a", 2], ["b", 1]])
    );

    let lengths = histogram_rows_length(&rows, Some(1)).unwrap();
    let json = serde_json::to_value(&lengths).unwrap();
    assert_eq!(json["overflow"], serde_json::json!(3));
}
