use std::sync::Arc;

use super::value::{PlainMap, Value};
use crate::capability::{EntryPredicate, RichMapping};
use crate::ops::to_plain_deep;

/// Immutable, structurally shared map implementing [`RichMapping`]
///
/// Every "mutation" returns a new map; clones share the entry table until
/// one of them is changed.
///
/// # Example
/// ```
/// use objutil_core::model::{FrozenMap, Value};
///
/// let a = FrozenMap::new().insert("name", "Ada");
/// let b = a.insert("name", "Grace");
///
/// assert_eq!(a.get("name").and_then(Value::as_str), Some("Ada"));
/// assert_eq!(b.get("name").and_then(Value::as_str), Some("Grace"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrozenMap {
    entries: Arc<PlainMap>,
}

impl FrozenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// New map with `key` set to `value`
    ///
    /// An existing key keeps its position.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut entries = self.entries.as_ref().clone();
        entries.insert(key.into(), value.into());
        Self {
            entries: Arc::new(entries),
        }
    }

    /// New map without `key`; the order of the remaining entries is kept
    pub fn remove(&self, key: &str) -> Self {
        if !self.entries.contains_key(key) {
            return self.clone();
        }
        let mut entries = self.entries.as_ref().clone();
        entries.shift_remove(key);
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when both maps share one entry table
    pub fn shares_entries_with(&self, other: &FrozenMap) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl PartialEq for FrozenMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FrozenMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: Arc::new(
                iter.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl From<PlainMap> for FrozenMap {
    fn from(entries: PlainMap) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl RichMapping for FrozenMap {
    fn get_property(&self, name: &str) -> Option<Value> {
        self.entries.get(name).cloned()
    }

    fn to_plain(&self) -> PlainMap {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), to_plain_deep(v)))
            .collect()
    }

    fn own_keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn filter_entries(&self, predicate: &EntryPredicate<'_>) -> Arc<dyn RichMapping> {
        let kept: PlainMap = self
            .entries
            .iter()
            .filter(|(k, v)| predicate(k.as_str(), v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Arc::new(FrozenMap::from(kept))
    }

    fn shallow_clone(&self) -> Arc<dyn RichMapping> {
        Arc::new(self.clone())
    }
}
