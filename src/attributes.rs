use ahash::AHashMap;
use serde_json::Value;

/// The current attribute values of a block instance, keyed by field id.
///
/// Values are dynamically typed: primitives, arrays, or `{ value, label }`
/// option objects produced by select-style controls.
pub type Attributes = AHashMap<String, Value>;

/// Unwraps `{ value, ... }` shaped option objects to their inner value.
///
/// Select-style controls store the full chosen option, but conditions and
/// defaults compare against the option's `value` member.
pub fn unwrap_option_value(value: &Value) -> &Value {
    match value {
        Value::Object(map) => map.get("value").unwrap_or(value),
        _ => value,
    }
}

/// Truthiness as the authoring environment understands it.
///
/// `null`, `false`, `0` and the empty string are falsy; arrays and objects
/// are truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
