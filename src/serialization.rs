use crate::json::JsonValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// A plain, serializable view of a parsed document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

pub(crate) fn to_value(parsed: &JsonValue) -> Value {
    match parsed {
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Number(n) => Value::Number(*n),
        JsonValue::Boolean(b) => Value::Boolean(*b),
        JsonValue::Null => Value::Null,
        JsonValue::Array(items) => Value::Array(items.iter().map(to_value).collect()),
        JsonValue::Object(members) => {
            let mut map = BTreeMap::new();
            for (key, value) in members {
                map.insert(key.clone(), to_value(value));
            }
            Value::Object(map)
        }
    }
}
