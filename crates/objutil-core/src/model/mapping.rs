use std::sync::Arc;

use super::value::{PlainMap, Value};
use crate::capability::RichMapping;
use crate::errors::{ExError, ExErrorKind};

/// A key-value mapping accepted by the object utilities
///
/// Every operation dispatches on the variant explicitly; nothing probes a
/// value for methods at runtime.
#[derive(Debug, Clone)]
pub enum Mapping {
    /// Ordinary insertion-ordered map
    Plain(Arc<PlainMap>),
    /// Capability-bearing map (see [`RichMapping`])
    Rich(Arc<dyn RichMapping>),
}

impl Mapping {
    pub fn plain(map: PlainMap) -> Self {
        Mapping::Plain(Arc::new(map))
    }

    pub fn rich<R: RichMapping + 'static>(rich: R) -> Self {
        Mapping::Rich(Arc::new(rich))
    }

    pub fn is_rich(&self) -> bool {
        matches!(self, Mapping::Rich(_))
    }

    /// "plain" or "rich"
    pub fn kind(&self) -> &'static str {
        match self {
            Mapping::Plain(_) => "plain",
            Mapping::Rich(_) => "rich",
        }
    }

    /// Read one property
    ///
    /// `None` means the property does not exist, which is distinct from a
    /// property holding `Value::Null`.
    pub fn get_property(&self, name: &str) -> Option<Value> {
        match self {
            Mapping::Plain(map) => map.get(name).cloned(),
            Mapping::Rich(rich) => rich.get_property(name),
        }
    }

    /// Own enumerable property names in enumeration order
    pub fn own_keys(&self) -> Vec<String> {
        match self {
            Mapping::Plain(map) => map.keys().cloned().collect(),
            Mapping::Rich(rich) => rich.own_keys(),
        }
    }

    /// Plain view of the mapping
    ///
    /// Rich mappings convert themselves (deeply); plain mappings are copied
    /// field-wise, nested handles shared.
    pub fn to_plain(&self) -> PlainMap {
        match self {
            Mapping::Plain(map) => map.as_ref().clone(),
            Mapping::Rich(rich) => rich.to_plain(),
        }
    }

    pub fn as_plain(&self) -> Option<&PlainMap> {
        match self {
            Mapping::Plain(map) => Some(map.as_ref()),
            Mapping::Rich(_) => None,
        }
    }

    pub fn as_rich(&self) -> Option<&Arc<dyn RichMapping>> {
        match self {
            Mapping::Plain(_) => None,
            Mapping::Rich(rich) => Some(rich),
        }
    }

    /// Handle identity, the mapping-level counterpart of [`Value::strict_eq`]
    pub fn ptr_eq(&self, other: &Mapping) -> bool {
        match (self, other) {
            (Mapping::Plain(a), Mapping::Plain(b)) => Arc::ptr_eq(a, b),
            (Mapping::Rich(a), Mapping::Rich(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Mapping::Plain(a), Mapping::Plain(b)) => a == b,
            (Mapping::Rich(a), Mapping::Rich(b)) => a.to_plain() == b.to_plain(),
            _ => false,
        }
    }
}

impl From<PlainMap> for Mapping {
    fn from(map: PlainMap) -> Self {
        Mapping::plain(map)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        match mapping {
            Mapping::Plain(map) => Value::Object(map),
            Mapping::Rich(rich) => Value::Rich(rich),
        }
    }
}

/// Only `Object` and `Rich` values are mappings; the handle is kept
impl TryFrom<Value> for Mapping {
    type Error = ExError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Mapping::Plain(map)),
            Value::Rich(rich) => Ok(Mapping::Rich(rich)),
            other => Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("mapping_from_value")
                .with_message(format!("expected an object, got {}", other.kind()))),
        }
    }
}

impl TryFrom<serde_json::Value> for Mapping {
    type Error = ExError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Mapping::try_from(Value::from(json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_property_is_distinct_from_null() {
        let m = Mapping::try_from(json!({"a": null})).unwrap();
        assert_eq!(m.get_property("a"), Some(Value::Null));
        assert_eq!(m.get_property("b"), None);
    }

    #[test]
    fn test_try_from_rejects_non_objects() {
        let err = Mapping::try_from(json!([1, 2])).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(err.message().contains("array"));
    }

    #[test]
    fn test_value_round_trip_keeps_handle() {
        let m = Mapping::try_from(json!({"a": 1})).unwrap();
        let back = Mapping::try_from(Value::from(m.clone())).unwrap();
        assert!(m.ptr_eq(&back));
    }

    #[test]
    fn test_to_plain_copies_plain_map() {
        let m = Mapping::try_from(json!({"a": 1, "b": {"c": 2}})).unwrap();
        let copy = m.to_plain();
        assert_eq!(Some(&copy), m.as_plain());
        assert!(copy["b"].strict_eq(&m.get_property("b").unwrap()));
    }
}
