use crate::model::Value;

/// Deeply convert a possibly-rich value into plain data
///
/// - `Null` and scalars come back unchanged.
/// - A rich value becomes `Object(to_plain())`. The converted map is trusted
///   to be plain already and is not walked again.
/// - Arrays and objects are rebuilt with every element converted, so the
///   result shares no container handle with the input.
///
/// There is no cycle detection.
pub fn to_plain_deep(value: &Value) -> Value {
    match value {
        Value::Rich(rich) => Value::object(rich.to_plain()),
        Value::Array(items) => Value::array(items.iter().map(to_plain_deep).collect()),
        Value::Object(map) => Value::object(
            map.iter()
                .map(|(k, v)| (k.clone(), to_plain_deep(v)))
                .collect(),
        ),
        primitive => primitive.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{EntryPredicate, RichMapping};
    use crate::model::{FrozenMap, PlainMap};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_primitives_unchanged() {
        for v in [
            Value::Null,
            Value::from(true),
            Value::from(4.5),
            Value::from("text"),
        ] {
            assert_eq!(to_plain_deep(&v), v);
        }
    }

    #[test]
    fn test_plain_structure_copied_without_shared_handles() {
        let input = Value::from(json!({"a": {"b": [1, {"c": 2}]}}));
        let output = to_plain_deep(&input);

        assert_eq!(output, input);
        assert!(!output.strict_eq(&input));

        let in_a = &input.as_object().unwrap()["a"];
        let out_a = &output.as_object().unwrap()["a"];
        assert!(!out_a.strict_eq(in_a));

        let in_list = &in_a.as_object().unwrap()["b"];
        let out_list = &out_a.as_object().unwrap()["b"];
        assert!(!out_list.strict_eq(in_list));
    }

    #[test]
    fn test_rich_value_becomes_object() {
        let rich = FrozenMap::new().insert("k", "v");
        let output = to_plain_deep(&Value::rich(rich.clone()));
        assert_eq!(output.as_object(), Some(&rich.to_plain()));
    }

    #[test]
    fn test_rich_inside_array_and_object() {
        let rich = Value::rich(FrozenMap::new().insert("k", 1));
        let wrapped = Value::object([("r".to_string(), rich.clone())].into_iter().collect());
        let input = Value::array(vec![rich, wrapped]);

        let output = to_plain_deep(&input);
        assert_eq!(output, Value::from(json!([{"k": 1}, {"r": {"k": 1}}])));
    }

    /// Rich mapping whose plain form still carries a rich value
    #[derive(Debug)]
    struct LazyRich;

    impl RichMapping for LazyRich {
        fn get_property(&self, _name: &str) -> Option<Value> {
            None
        }

        fn to_plain(&self) -> PlainMap {
            [("inner".to_string(), Value::rich(FrozenMap::new()))]
                .into_iter()
                .collect()
        }

        fn filter_entries(&self, _predicate: &EntryPredicate<'_>) -> Arc<dyn RichMapping> {
            Arc::new(LazyRich)
        }

        fn shallow_clone(&self) -> Arc<dyn RichMapping> {
            Arc::new(LazyRich)
        }
    }

    #[test]
    fn test_rich_output_not_walked_again() {
        let output = to_plain_deep(&Value::rich(LazyRich));
        let map = output.as_object().unwrap();
        assert_eq!(map["inner"].kind(), "rich");
    }
}
