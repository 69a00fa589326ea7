//! Safe coercion of loosely-typed source values.
//!
//! The Divine-Pride API enforces no schema: any field may be absent, null,
//! a number, or a numeric string. Every mapping in this crate funnels raw
//! values through these helpers so that a malformed field can never abort
//! a record.

use serde_json::Value;

/// Hard floor used by [`resolve_numeric`] when both the observed value and
/// the per-field fallback coerce to zero. The target engine treats zero in
/// these fields as undefined.
pub const HARD_NUMERIC_DEFAULT: i64 = 350;

fn int_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| u.min(i64::MAX as u64) as i64))
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

/// Parses `value` as an integer and returns its absolute value, or 0 when
/// the value is absent, null, or unparseable. Never fails.
pub fn to_positive_int(value: Option<&Value>) -> i64 {
    value
        .and_then(int_from_value)
        .map(i64::saturating_abs)
        .unwrap_or(0)
}

/// Parses `value` as a signed integer, returning `default` on any parse
/// failure or absent/null input.
pub fn to_int(value: Option<&Value>, default: i64) -> i64 {
    value.and_then(int_from_value).unwrap_or(default)
}

/// Returns the trimmed string form of `value`, or "" when the value is
/// absent, null, or a container.
pub fn to_trimmed_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Truthiness of a JSON value: null, 0, "", and empty containers are falsy;
/// `default` applies when the key is absent entirely.
pub fn json_truthy(value: Option<&Value>, default: bool) -> bool {
    match value {
        None => default,
        Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Chained positive-or-fallback resolution for numeric attributes that must
/// never end up zero in the target schema:
///
/// 1. `to_positive_int(primary)` when greater than zero,
/// 2. else `to_positive_int(fallback)` when greater than zero,
/// 3. else [`HARD_NUMERIC_DEFAULT`].
///
/// A fallback that itself coerces to zero intentionally falls through to the
/// hard default.
pub fn resolve_numeric(primary: Option<&Value>, fallback: i64) -> i64 {
    let observed = to_positive_int(primary);
    if observed > 0 {
        return observed;
    }
    let secondary = fallback.saturating_abs();
    if secondary > 0 {
        return secondary;
    }
    HARD_NUMERIC_DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_positive_int_numbers() {
        assert_eq!(to_positive_int(Some(&json!(10))), 10);
        assert_eq!(to_positive_int(Some(&json!(-5))), 5);
        assert_eq!(to_positive_int(Some(&json!(3.7))), 3);
        assert_eq!(to_positive_int(Some(&json!(0))), 0);
    }

    #[test]
    fn test_to_positive_int_strings() {
        assert_eq!(to_positive_int(Some(&json!("10"))), 10);
        assert_eq!(to_positive_int(Some(&json!(" -42 "))), 42);
        assert_eq!(to_positive_int(Some(&json!("abc"))), 0);
        assert_eq!(to_positive_int(Some(&json!("10.5"))), 0);
    }

    #[test]
    fn test_to_positive_int_absent_and_null() {
        assert_eq!(to_positive_int(None), 0);
        assert_eq!(to_positive_int(Some(&Value::Null)), 0);
        assert_eq!(to_positive_int(Some(&json!([1, 2]))), 0);
    }

    #[test]
    fn test_to_int_defaults() {
        assert_eq!(to_int(Some(&json!("2000")), 0), 2000);
        assert_eq!(to_int(Some(&json!(-7)), 0), -7);
        assert_eq!(to_int(None, 100), 100);
        assert_eq!(to_int(Some(&Value::Null), 100), 100);
        assert_eq!(to_int(Some(&json!("oops")), 1), 1);
    }

    #[test]
    fn test_to_trimmed_string() {
        assert_eq!(to_trimmed_string(Some(&json!("  MINOROUS  "))), "MINOROUS");
        assert_eq!(to_trimmed_string(Some(&json!(21))), "21");
        assert_eq!(to_trimmed_string(None), "");
        assert_eq!(to_trimmed_string(Some(&Value::Null)), "");
        assert_eq!(to_trimmed_string(Some(&json!({"a": 1}))), "");
    }

    #[test]
    fn test_json_truthy() {
        assert!(json_truthy(Some(&json!(true)), false));
        assert!(json_truthy(Some(&json!("no")), false));
        assert!(!json_truthy(Some(&json!(0)), true));
        assert!(!json_truthy(Some(&json!("")), true));
        assert!(!json_truthy(Some(&Value::Null), true));
        assert!(json_truthy(None, true));
        assert!(!json_truthy(None, false));
    }

    #[test]
    fn test_resolve_numeric_prefers_observed() {
        assert_eq!(resolve_numeric(Some(&json!("20")), 100), 20);
        assert_eq!(resolve_numeric(Some(&json!(-20)), 100), 20);
    }

    #[test]
    fn test_resolve_numeric_falls_back() {
        assert_eq!(resolve_numeric(None, 40), 40);
        assert_eq!(resolve_numeric(Some(&json!(0)), 40), 40);
        assert_eq!(resolve_numeric(Some(&json!("abc")), 40), 40);
    }

    #[test]
    fn test_resolve_numeric_hard_default() {
        assert_eq!(resolve_numeric(Some(&json!("abc")), 0), HARD_NUMERIC_DEFAULT);
        assert_eq!(resolve_numeric(None, 0), HARD_NUMERIC_DEFAULT);
        assert_eq!(resolve_numeric(Some(&Value::Null), 0), 350);
    }
}
