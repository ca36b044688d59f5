//! Helpers for reading loosely-typed JSON values.

use serde_json::Value;
use std::borrow::Cow;

/// Truthiness of a JSON value as a style flag.
///
/// `false`, `0`, `""` and `null` are falsy; everything else is truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read an optional flag field of `object`.
pub(crate) fn flag(object: &Value, key: &str) -> bool {
    object.get(key).is_some_and(is_truthy)
}

/// Read an optional string field of `object`.
pub(crate) fn string_field(object: &Value, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Name of the JSON kind, for log and error messages.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Text of a spreadsheet cell value, passed through without reformatting.
///
/// Strings are returned verbatim, numbers in their JSON representation and
/// booleans as `true`/`false`. `null` becomes the empty string. Nested arrays
/// are joined with `,` and objects are written as compact JSON.
pub fn cell_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(s) => Cow::Borrowed(s),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(cell_text)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Owned(value.to_string()),
    }
}
