//! Numeric and currency coercion for dynamically shaped input.
//!
//! Form payloads arrive as deserialized JSON, so the functions here take
//! [`serde_json::Value`] and do the shape check at the boundary: numbers
//! pass through, numeric strings are parsed, anything else is rejected.

use serde_json::Value;

/// Coerce a JSON value to a finite `f64`.
///
/// Accepts JSON numbers and strings that parse as a finite number after
/// trimming. Booleans, null, arrays, and objects are rejected — implicit
/// truthiness coercion is exactly the kind of behavior this boundary
/// exists to stop.
#[must_use]
pub fn coerce_number(raw: &Value) -> Option<f64> {
    let n = match raw {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => return None,
    };
    n.is_finite().then_some(n)
}

/// Coerce a JSON value to a finite number, clamped to `[min, max]`.
///
/// Non-finite or non-numeric input yields `None`; callers must block the
/// write. Bounds are applied independently, so either side may be open.
#[must_use]
pub fn sanitize_number(raw: &Value, min: Option<f64>, max: Option<f64>) -> Option<f64> {
    let mut n = coerce_number(raw)?;
    if let Some(lo) = min {
        n = n.max(lo);
    }
    if let Some(hi) = max {
        n = n.min(hi);
    }
    Some(n)
}

/// Coerce a JSON value to a non-negative currency amount in whole cents
/// precision.
///
/// Delegates to [`sanitize_number`] with a zero floor, then rounds to two
/// decimals half-away-from-zero. Unlike the plain number validator this
/// never rejects: currency always has a safe `0.0` default.
#[must_use]
pub fn sanitize_currency(raw: &Value) -> f64 {
    sanitize_number(raw, Some(0.0), None)
        .map_or(0.0, |n| (n * 100.0).round() / 100.0)
}
