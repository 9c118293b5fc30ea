use objutil_core::{FrozenMap, Mapping, Value};

/// Plain mapping from a JSON object literal
#[allow(dead_code)]
pub fn obj(json: serde_json::Value) -> Mapping {
    Mapping::try_from(json).expect("fixture must be a JSON object")
}

/// Rich mapping holding the entries of a JSON object literal
#[allow(dead_code)]
pub fn rich(json: serde_json::Value) -> Mapping {
    let plain = obj(json).to_plain();
    Mapping::rich(FrozenMap::from(plain))
}

/// Owned name list for comparisons
#[allow(dead_code)]
pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|n| n.to_string()).collect()
}

#[allow(dead_code)]
pub fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}
