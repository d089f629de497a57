//! JSON interop: the boundary definition documents cross as JSON.
//!
//! Definitions arrive from clients and tooling as JSON; the catalog hands
//! them to this core as [`Document`]s. Note that JSON objects carry no
//! field-order guarantee; a document built from JSON has whatever order
//! the parsed map iterates in.

use super::{Document, Value};

/// Convert a parsed JSON value into a document [`Value`].
pub fn json_to_value(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(0.0))
            }
        }
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(arr) => {
            Value::Array(arr.iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(map) => {
            Value::Document(Box::new(json_to_document(map)))
        }
    }
}

/// Convert a JSON object into a [`Document`].
pub fn json_to_document(map: &serde_json::Map<String, serde_json::Value>) -> Document {
    map.iter().map(|(k, v)| (k.clone(), json_to_value(v))).collect()
}

/// Convert a document [`Value`] back into JSON.
pub fn value_to_json(v: &Value) -> serde_json::Value {
    match v {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::json!(*i),
        Value::Float(f) => serde_json::json!(*f),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Bytes(_) => serde_json::Value::Null,
        Value::Array(arr) => {
            serde_json::Value::Array(arr.iter().map(value_to_json).collect())
        }
        Value::Document(d) => serde_json::Value::Object(document_to_json(d)),
        Value::DateTime(dt) => serde_json::Value::String(dt.to_rfc3339()),
    }
}

/// Convert a [`Document`] into a JSON object.
pub fn document_to_json(doc: &Document) -> serde_json::Map<String, serde_json::Value> {
    let mut map = serde_json::Map::new();
    for (name, value) in doc.iter() {
        map.insert(name.to_owned(), value_to_json(value));
    }
    map
}
