//! Capability traits for rich mappings and key-set collaborators
//!
//! `RichMapping` is the capability set a mapping type must supply to be
//! handled on the rich branch of the object utilities. `KeySetFactory` is the
//! collaborator `pick` needs to filter a rich mapping by key; it is injected
//! into [`crate::ops::ObjUtil`] rather than held in a global.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::model::{PlainMap, Value};

/// Predicate passed to [`RichMapping::filter_entries`]
pub type EntryPredicate<'a> = dyn Fn(&str, &Value) -> bool + 'a;

/// A mapping that carries its own accessors and conversions
///
/// Implementations must be immutable from the caller's point of view:
/// `filter_entries` and `shallow_clone` return new mappings and leave `self`
/// untouched.
pub trait RichMapping: fmt::Debug + Send + Sync {
    /// Read one property; `None` when the property does not exist
    fn get_property(&self, name: &str) -> Option<Value>;

    /// Convert into a plain map, nested rich values included
    fn to_plain(&self) -> PlainMap;

    /// Own property names in enumeration order
    ///
    /// Defaults to the keys of [`RichMapping::to_plain`].
    fn own_keys(&self) -> Vec<String> {
        self.to_plain().keys().cloned().collect()
    }

    /// New rich mapping holding the entries the predicate keeps
    fn filter_entries(&self, predicate: &EntryPredicate<'_>) -> Arc<dyn RichMapping>;

    /// New rich mapping holding the same entries (merge with nothing)
    fn shallow_clone(&self) -> Arc<dyn RichMapping>;
}

/// Set of property names answering membership queries
pub trait KeySet {
    fn has(&self, key: &str) -> bool;
}

/// Collaborator that builds a [`KeySet`] from a list of keys
///
/// Closures of the shape `Fn(&[&str]) -> Box<dyn KeySet>` implement this
/// trait, so a host can register an ad-hoc factory without a new type.
pub trait KeySetFactory: Send + Sync {
    fn key_set(&self, keys: &[&str]) -> Box<dyn KeySet>;
}

impl<F> KeySetFactory for F
where
    F: Fn(&[&str]) -> Box<dyn KeySet> + Send + Sync,
{
    fn key_set(&self, keys: &[&str]) -> Box<dyn KeySet> {
        self(keys)
    }
}

/// Hash-backed key set
#[derive(Debug, Clone, Default)]
pub struct HashKeySet {
    keys: HashSet<String>,
}

impl HashKeySet {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl KeySet for HashKeySet {
    fn has(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

/// Default factory producing [`HashKeySet`]s
///
/// # Example
/// ```
/// use objutil_core::capability::{HashKeySetFactory, KeySetFactory};
///
/// let set = HashKeySetFactory.key_set(&["a", "b"]);
/// assert!(set.has("a"));
/// assert!(!set.has("c"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HashKeySetFactory;

impl KeySetFactory for HashKeySetFactory {
    fn key_set(&self, keys: &[&str]) -> Box<dyn KeySet> {
        Box::new(HashKeySet::new(keys.iter().copied()))
    }
}
