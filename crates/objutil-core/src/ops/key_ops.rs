use std::collections::HashSet;

use crate::model::{Mapping, PlainMap, Value};

/// Options for [`keys`] and [`rest`]
///
/// # Example
/// ```
/// use objutil_core::ops::KeyOptions;
///
/// let opts = KeyOptions::not(["onClick", "children"]);
/// assert!(opts.excludes("onClick"));
/// assert!(!opts.excludes("title"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOptions {
    /// Names to leave out
    pub not: Vec<String>,
}

impl KeyOptions {
    /// Options excluding the given names
    pub fn not<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            not: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn excludes(&self, key: &str) -> bool {
        self.not.iter().any(|n| n == key)
    }
}

/// Values of all own properties, in enumeration order
///
/// Callers must not rely on the order across mapping implementations.
pub fn values(obj: &Mapping) -> Vec<Value> {
    match obj {
        Mapping::Plain(map) => map.values().cloned().collect(),
        Mapping::Rich(rich) => rich
            .own_keys()
            .iter()
            .filter_map(|k| rich.get_property(k))
            .collect(),
    }
}

/// Own property names minus those listed in `options.not`
///
/// Relative order of the remaining names is preserved.
pub fn keys(obj: &Mapping, options: &KeyOptions) -> Vec<String> {
    let keys = obj.own_keys();
    if options.not.is_empty() {
        return keys;
    }
    let excluded: HashSet<&str> = options.not.iter().map(String::as_str).collect();
    keys.into_iter()
        .filter(|k| !excluded.contains(k.as_str()))
        .collect()
}

/// New plain map holding every property [`keys`] keeps
///
/// # Example
/// ```
/// use objutil_core::model::Mapping;
/// use objutil_core::ops::{rest, KeyOptions};
/// use serde_json::json;
///
/// let props = Mapping::try_from(json!({"a": "a", "b": "b", "c": "c"})).unwrap();
/// let clean = rest(&props, &KeyOptions::not(["b", "c"]));
///
/// assert_eq!(clean.keys().collect::<Vec<_>>(), vec!["a"]);
/// ```
pub fn rest(obj: &Mapping, options: &KeyOptions) -> PlainMap {
    keys(obj, options)
        .into_iter()
        .filter_map(|k| obj.get_property(&k).map(|v| (k, v)))
        .collect()
}
