//! Pairwise comparison helpers for condition operators.
//!
//! All helpers operate on already-unwrapped JSON values. Anything that
//! cannot be compared meaningfully returns a [`ConditionError`], which the
//! evaluator absorbs as "visible".

use crate::error::ConditionError;
use serde_json::Value;

/// Loose equality between a check value and an authored condition value.
///
/// Numbers compare numerically even when one side was authored as a string,
/// since attribute values round-trip through form inputs.
pub fn values_equal(check: &Value, expected: &Value) -> bool {
    match (check, expected) {
        (Value::Number(a), Value::Number(b)) => as_f64(a) == as_f64(b),
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            s.trim().parse::<f64>().map(|p| p == as_f64(n)).unwrap_or(false)
        }
        (a, b) => a == b,
    }
}

/// Integer parsing for the ordered comparison operators.
pub fn parse_int(operator: &str, value: &Value) -> Result<i64, ConditionError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| s.trim().parse::<f64>().ok().map(|f| f as i64)),
        _ => None,
    };
    parsed.ok_or_else(|| ConditionError::NotAnInteger {
        operator: operator.to_string(),
        found: value.to_string(),
    })
}

/// Emptiness as the authoring environment understands it: absent, `false`,
/// `0`, empty string, empty array, empty object.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => as_f64(n) == 0.0,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Membership test for `includes`/`!includes`.
///
/// The check value must be array-like: an array of values, or a string
/// (substring containment). Anything else is a condition error.
pub fn value_includes(
    operator: &str,
    check: &Value,
    needle: &Value,
) -> Result<bool, ConditionError> {
    match check {
        Value::Array(items) => Ok(items.iter().any(|item| values_equal(item, needle))),
        Value::String(haystack) => {
            let needle = match needle {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Ok(haystack.contains(&needle))
        }
        other => Err(ConditionError::NotAnArray {
            operator: operator.to_string(),
            found: other.to_string(),
        }),
    }
}

fn as_f64(n: &serde_json::Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}
