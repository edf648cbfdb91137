//! Dict of lists → 2D list.

use list2d_core::{DictOfLists, List2D, Value};

/// One row per key holding a copy of that key's list; keys are dropped.
///
/// Rows follow the dict's insertion order. A key with an empty list still
/// yields an empty row.
pub fn dict_with_lists_to_list_2d_only_values(dict: &DictOfLists) -> List2D {
    let rows: List2D = dict.iter().map(|(_, values)| values.to_vec()).collect();
    tracing::debug!(keys = dict.len(), rows = rows.len(), "dict flattened to value rows");
    rows
}

/// One `[key, value]` row per value, keys in dict order, values in list order.
///
/// Keys with empty lists contribute no rows.
pub fn dict_with_lists_to_list_2d(dict: &DictOfLists) -> List2D {
    let mut rows = List2D::with_capacity(dict.value_count());
    rows.extend(pairs(dict).map(|(key, value)| vec![key.clone(), value.clone()]));
    tracing::debug!(keys = dict.len(), rows = rows.len(), "dict flattened to pairs");
    rows
}

/// Borrowed `(key, value)` pairs in dict order.
fn pairs(dict: &DictOfLists) -> impl Iterator<Item = (&Value, &Value)> {
    dict.iter()
        .flat_map(|(key, values)| values.iter().map(move |v| (key, v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use list2d_core::row;

    #[test]
    fn test_pairs_follow_insertion_order() {
        let dict = DictOfLists::from([
            ("b", row![1, 2]),
            ("a", row![]),
            ("c", row![3]),
        ]);
        let collected: Vec<(Value, Value)> = pairs(&dict)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        assert_eq!(
            collected,
            vec![
                (Value::from("b"), Value::from(1)),
                (Value::from("b"), Value::from(2)),
                (Value::from("c"), Value::from(3)),
            ]
        );
    }
}
