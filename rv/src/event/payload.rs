//! Defensive accessors over loosely-typed JSON payloads
//!
//! Producers of the event stream are not under our control, so every lookup
//! here returns a default on a missing key or a type mismatch instead of
//! failing.

use std::borrow::Cow;

use serde_json::Value;

static NULL: Value = Value::Null;

/// Whether a value counts as "present": not null, false, zero, or empty
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Render any value as display text
///
/// Strings come back verbatim; everything else is compact JSON.
pub fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Name of a value's JSON type, for error messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Optional-field access over a JSON value treated as a key-value map
pub trait Payload {
    /// The value under `key`, or `null` when absent or when `self` is not an object
    fn field(&self, key: &str) -> &Value;

    /// Whether `key` exists, even if its value is `null`
    fn has(&self, key: &str) -> bool;

    /// Stringified value under `key` if it is truthy
    fn non_empty(&self, key: &str) -> Option<String> {
        let value = self.field(key);
        is_truthy(value).then(|| stringify(value).into_owned())
    }

    /// Stringified value under `key`, or `default` when absent or null
    fn text_or(&self, key: &str, default: &str) -> String {
        match self.field(key) {
            Value::Null => default.to_string(),
            value => stringify(value).into_owned(),
        }
    }

    /// Numeric value under `key`; strings and other types yield `None`
    fn number(&self, key: &str) -> Option<f64> {
        self.field(key).as_f64()
    }
}

impl Payload for Value {
    fn field(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }

    fn has(&self, key: &str) -> bool {
        self.as_object().is_some_and(|map| map.contains_key(key))
    }
}
