use list2d_core::{DictOfLists, List2D, Row, Value};
use list2d_manipulator::{
    dict_with_lists_to_list_2d, dict_with_lists_to_list_2d_only_values,
    histogram_rows_length, histogram_unicates_in_col, two_columns_to_dict_of_list, value_to_int,
    value_to_unicode, ColumnBucket,
};
use proptest::prelude::*;

/// Small value domain so that duplicates are common.
fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-3i64..3).prop_map(Value::Int),
        "[a-c]{0,2}".prop_map(Value::Text),
    ]
}

fn table(min_width: usize) -> impl Strategy<Value = List2D> {
    prop::collection::vec(prop::collection::vec(cell(), min_width..min_width + 3), 0..40)
}

fn ragged() -> impl Strategy<Value = List2D> {
    prop::collection::vec(prop::collection::vec(cell(), 0..8), 0..40)
}

fn dict() -> impl Strategy<Value = DictOfLists> {
    prop::collection::vec(("[a-e]", prop::collection::vec(cell(), 0..5)), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #[test]
    fn column_counts_sum_to_rows(rows in table(1)) {
        prop_assume!(!rows.is_empty());
        let hist = histogram_unicates_in_col(&rows, 0, &[]).unwrap();
        prop_assert_eq!(hist.total(), rows.len());
    }

    #[test]
    fn skip_bucket_collects_every_skipped_value(rows in table(1), skip in prop::collection::vec(cell(), 0..3)) {
        prop_assume!(!rows.is_empty());
        let hist = histogram_unicates_in_col(&rows, 0, &skip).unwrap();
        let expected = rows.iter().filter(|r| skip.contains(&r[0])).count();

        let skip_buckets = hist.iter().filter(|b| b.label == ColumnBucket::Skipped).count();
        prop_assert!(skip_buckets <= 1);
        prop_assert_eq!(hist.skipped().unwrap_or(0), expected);
        for bucket in &hist {
            if let ColumnBucket::Value(v) = &bucket.label {
                prop_assert!(!skip.contains(v));
            }
        }
    }

    #[test]
    fn column_labels_are_unique(rows in table(2)) {
        prop_assume!(!rows.is_empty());
        let hist = histogram_unicates_in_col(&rows, 1, &[]).unwrap();
        for (i, a) in hist.iter().enumerate() {
            for b in hist.iter().skip(i + 1) {
                prop_assert_ne!(&a.label, &b.label);
            }
        }
    }

    #[test]
    fn row_length_counts_plus_overflow_is_rows(rows in ragged(), bound in prop::option::of(0usize..10)) {
        let hist = histogram_rows_length(&rows, bound).unwrap();
        prop_assert_eq!(hist.histogram().total() + hist.overflow(), rows.len());
        if let Some(n) = bound {
            prop_assert_eq!(hist.len(), n + 1);
        } else {
            prop_assert_eq!(hist.overflow(), 0);
        }
        for (i, bucket) in hist.histogram().iter().enumerate() {
            prop_assert_eq!(bucket.label, i);
        }
    }

    #[test]
    fn values_only_preserves_shape(d in dict()) {
        let rows = dict_with_lists_to_list_2d_only_values(&d);
        prop_assert_eq!(rows.len(), d.len());
        for (row, (_, list)) in rows.iter().zip(d.iter()) {
            prop_assert_eq!(row.as_slice(), list);
        }
    }

    #[test]
    fn pairs_and_grouping_are_inverse(d in dict()) {
        let rows = dict_with_lists_to_list_2d(&d);
        prop_assert_eq!(rows.len(), d.value_count());
        let regrouped = two_columns_to_dict_of_list(&rows, 0, 1).unwrap();

        // Keys with empty lists produce no rows, so they cannot come back.
        let non_empty: DictOfLists = d
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(k, list)| (k.clone(), list.to_vec()))
            .collect();
        prop_assert_eq!(regrouped, non_empty);
    }

    #[test]
    fn unicode_never_has_strippable_edges(s in ".{0,20}") {
        if let Some(out) = value_to_unicode(&Value::Text(s)) {
            let strip = list2d_core::constants::STRIPPED_CHARS;
            prop_assert!(!out.is_empty());
            prop_assert!(!out.starts_with(|c: char| strip.contains(c)));
            prop_assert!(!out.ends_with(|c: char| strip.contains(c)));
        }
    }

    #[test]
    fn int_text_round_trips(n in any::<i64>(), pad in " {0,3}") {
        let text = format!("{pad}{n}{pad}");
        prop_assert_eq!(value_to_int(&Value::Text(text)), Some(n));
    }
}

#[test]
fn empty_row_table_has_single_zero_bucket() {
    let rows: Vec<Row> = Vec::new();
    assert_eq!(histogram_rows_length(&rows, None).unwrap().to_list_2d(), vec![vec![Value::Int(0), Value::Int(0)]]);
}
