use indexmap::IndexSet;
use std::collections::HashSet;

use crate::model::{Mapping, Value};

/// Property names `diff` should compare
#[derive(Debug, Clone)]
pub enum PropertyNames {
    /// Explicit names, compared in this order
    List(Vec<String>),
    /// The own keys of a mapping, in its enumeration order
    KeysOf(Mapping),
}

impl PropertyNames {
    /// Flatten into the ordered list of names to compare
    pub fn resolve(&self) -> Vec<String> {
        match self {
            PropertyNames::List(names) => names.clone(),
            PropertyNames::KeysOf(mapping) => mapping.own_keys(),
        }
    }
}

impl From<Vec<String>> for PropertyNames {
    fn from(names: Vec<String>) -> Self {
        PropertyNames::List(names)
    }
}

impl From<&[&str]> for PropertyNames {
    fn from(names: &[&str]) -> Self {
        PropertyNames::List(names.iter().map(|n| (*n).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PropertyNames {
    fn from(names: [&str; N]) -> Self {
        PropertyNames::from(&names[..])
    }
}

impl From<Mapping> for PropertyNames {
    fn from(mapping: Mapping) -> Self {
        PropertyNames::KeysOf(mapping)
    }
}

/// Outcome of [`diff`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diff {
    /// Nothing differs, or both sides are absent (`null`)
    Same,
    /// Exactly one side is absent (`true`)
    ///
    /// Kept apart from `Changed` because no property list exists to report.
    Presence,
    /// Names of the differing properties, first-seen order, no duplicates
    Changed(Vec<String>),
}

impl Diff {
    /// Whether a consumer should treat the inputs as different
    pub fn is_changed(&self) -> bool {
        !matches!(self, Diff::Same)
    }

    pub fn names(&self) -> Option<&[String]> {
        match self {
            Diff::Changed(names) => Some(names.as_slice()),
            Diff::Same | Diff::Presence => None,
        }
    }

    /// Render as the loosely-typed result: `null`, `true`, or a name list
    pub fn to_value(&self) -> Value {
        match self {
            Diff::Same => Value::Null,
            Diff::Presence => Value::Bool(true),
            Diff::Changed(names) => {
                Value::array(names.iter().cloned().map(Value::String).collect())
            }
        }
    }
}

/// Shallow-compare two mappings property by property
///
/// Values are read with [`Mapping::get_property`] and compared with
/// [`Value::strict_eq`]; a missing property only equals another missing
/// property. Without `names`, the keys of `a` are compared first, then the
/// keys of `b` that `a` does not have.
///
/// # Returns
/// * `Diff::Presence` - exactly one of `a` / `b` is absent
/// * `Diff::Same` - both absent, or no compared property differs
/// * `Diff::Changed(names)` - the differing names
///
/// # Example
/// ```
/// use objutil_core::model::Mapping;
/// use objutil_core::ops::{diff, Diff};
/// use serde_json::json;
///
/// let a = Mapping::try_from(json!({"foo": "a", "bar": "b"})).unwrap();
/// let b = Mapping::try_from(json!({"foo": "b", "bar": "b"})).unwrap();
///
/// assert_eq!(diff(Some(&a), Some(&b), None), Diff::Changed(vec!["foo".into()]));
/// assert_eq!(diff(Some(&a), Some(&b), Some(["bar"].into())), Diff::Same);
/// ```
pub fn diff(a: Option<&Mapping>, b: Option<&Mapping>, names: Option<PropertyNames>) -> Diff {
    let names = names.map(|n| n.resolve());

    let (a, b) = match (a, b) {
        (None, Some(_)) | (Some(_), None) => {
            tracing::debug!(op = "diff", "one side absent");
            return Diff::Presence;
        }
        (None, None) => return Diff::Same,
        (Some(a), Some(b)) => (a, b),
    };

    let names = names.unwrap_or_else(|| union_keys(a, b));

    let mut changed: IndexSet<String> = IndexSet::new();
    for name in &names {
        if changed.contains(name) {
            continue;
        }
        let left = a.get_property(name);
        let right = b.get_property(name);
        if !strictly_equal(left.as_ref(), right.as_ref()) {
            changed.insert(name.clone());
        }
    }

    tracing::debug!(
        op = "diff",
        name_count = names.len(),
        changed_count = changed.len(),
    );

    if changed.is_empty() {
        Diff::Same
    } else {
        Diff::Changed(changed.into_iter().collect())
    }
}

/// Keys of `a`, then keys of `b` that `a` lacks
fn union_keys(a: &Mapping, b: &Mapping) -> Vec<String> {
    let mut names = a.own_keys();
    let seen: HashSet<String> = names.iter().cloned().collect();
    names.extend(b.own_keys().into_iter().filter(|k| !seen.contains(k)));
    names
}

fn strictly_equal(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(l), Some(r)) => l.strict_eq(r),
        _ => false,
    }
}
