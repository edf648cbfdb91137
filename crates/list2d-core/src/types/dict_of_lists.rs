//! Insertion-ordered mapping from a key to a list of values.

use super::collections::FxHashMap;
use super::value::Value;

/// Mapping from unique keys to ordered value lists.
///
/// Keys iterate in first-insertion order. Equality ignores key order, the
/// same way two dicts with equal contents compare equal.
#[derive(Debug, Clone, Default)]
pub struct DictOfLists {
    /// Key/list pairs in insertion order.
    entries: Vec<(Value, Vec<Value>)>,
    /// Key -> position in `entries`.
    index: FxHashMap<Value, usize>,
}

impl DictOfLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Set the list for `key`, returning the previous list if there was one.
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<Value>, values: Vec<Value>) -> Option<Vec<Value>> {
        let key = key.into();
        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, values));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, values));
        None
    }

    /// Append `value` to the list for `key`, creating the list on first use.
    pub fn push(&mut self, key: impl Into<Value>, value: impl Into<Value>) {
        let key = key.into();
        let pos = match self.index.get(&key) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.index.insert(key.clone(), pos);
                self.entries.push((key, Vec::new()));
                pos
            }
        };
        self.entries[pos].1.push(value.into());
    }

    pub fn get(&self, key: &Value) -> Option<&[Value]> {
        self.index.get(key).map(|&pos| self.entries[pos].1.as_slice())
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.index.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of values across all lists.
    pub fn value_count(&self) -> usize {
        self.entries.iter().map(|(_, list)| list.len()).sum()
    }

    /// Key/list pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &[Value])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl PartialEq for DictOfLists {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, list)| other.get(key).is_some_and(|o| o == list))
    }
}

impl Eq for DictOfLists {}

impl<K: Into<Value>> FromIterator<(K, Vec<Value>)> for DictOfLists {
    fn from_iter<I: IntoIterator<Item = (K, Vec<Value>)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (key, values) in iter {
            dict.insert(key, values);
        }
        dict
    }
}

impl<K: Into<Value>, const N: usize> From<[(K, Vec<Value>); N]> for DictOfLists {
    fn from(pairs: [(K, Vec<Value>); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for DictOfLists {
    type Item = (Value, Vec<Value>);
    type IntoIter = std::vec::IntoIter<(Value, Vec<Value>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
