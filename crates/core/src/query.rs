//! Encoding of an inbound JSON payload as URL query parameters.
//!
//! GET destinations receive the payload in the query string instead of a
//! body. Only top-level object keys become parameters:
//!
//! | JSON value          | Parameter value(s)                       |
//! |---------------------|------------------------------------------|
//! | string              | the string itself                        |
//! | number              | its JSON text (`1`, `2.5`)               |
//! | `true` / `false`    | `true` / `false`                         |
//! | `null`              | empty string                             |
//! | array               | one pair per element, same key           |
//! | nested object       | compact JSON text                        |
//!
//! Any payload that is not an object produces no parameters.

use serde_json::Value;

/// Flatten a payload into ordered `(key, value)` query pairs.
pub fn payload_query_pairs(payload: &Value) -> Vec<(String, String)> {
    let Value::Object(map) = payload else {
        return Vec::new();
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                pairs.extend(items.iter().map(|item| (key.clone(), scalar_text(item))));
            }
            other => pairs.push((key.clone(), scalar_text(other))),
        }
    }
    pairs
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}
