//! Lenient deserialization for hand-maintained record files.
//!
//! One mistyped field must not fail the whole file: free-text fields accept
//! any JSON value and rule fields keep the raw value so the owning pipeline
//! can reject that single record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A field that either has the expected type or keeps its raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue<T> {
    Valid(T),
    Invalid(Value),
}

impl<T> From<T> for FieldValue<T> {
    fn from(value: T) -> Self {
        Self::Valid(value)
    }
}

/// Renders a JSON value as text. `null` has no text.
pub fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// Free-text field: strings are kept, other values are rendered as JSON text.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(value_text))
}

/// List of free-text items. `null` is empty and a lone value is one item.
pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Value::Array(items)) => items.into_iter().filter_map(value_text).collect(),
        Some(other) => value_text(other).into_iter().collect(),
    })
}
