//! Field extraction and integer coercion for raw inventory entries.
//!
//! Inventory documents are hand-written, so numeric fields show up as YAML
//! integers, floats, quoted strings or even booleans. Coercion accepts:
//! - integers that fit in an i64
//! - finite floats, truncated toward zero
//! - booleans, as 1 / 0
//! - strings holding an optionally signed run of digits, with single `_`
//!   separators allowed between digits (`" 4_096 "` -> 4096)

use regex::Regex;
use serde_json::{Number, Value};
use std::sync::LazyLock;

/// 2^63, the first float past i64::MAX (which is not representable as f64).
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

static INTEGER_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]+(?:_[0-9]+)*$").expect("integer text pattern compiles")
});

/// A field that could not be read as an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct CoerceError {
    pub field: &'static str,
    pub reason: CoerceReason,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoerceReason {
    #[error("value is missing")]
    Missing,
    #[error("expected an integer, found {0}")]
    WrongType(&'static str),
    #[error("{0:?} is not an integer")]
    NotAnInteger(String),
    #[error("{0} does not fit in a 64-bit integer")]
    OutOfRange(String),
}

/// Coerce `value` (the raw contents of `field`) to an integer.
pub fn coerce_int(field: &'static str, value: Option<&Value>) -> Result<i64, CoerceError> {
    let coerced = match value {
        None | Some(Value::Null) => Err(CoerceReason::Missing),
        Some(Value::Bool(b)) => Ok(i64::from(*b)),
        Some(Value::Number(n)) => number_to_int(n),
        Some(Value::String(s)) => text_to_int(s),
        Some(Value::Array(_)) => Err(CoerceReason::WrongType("a sequence")),
        Some(Value::Object(_)) => Err(CoerceReason::WrongType("a mapping")),
    };
    coerced.map_err(|reason| CoerceError { field, reason })
}

fn number_to_int(n: &Number) -> Result<i64, CoerceReason> {
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    if n.is_u64() {
        return Err(CoerceReason::OutOfRange(n.to_string()));
    }

    let f = n
        .as_f64()
        .ok_or_else(|| CoerceReason::NotAnInteger(n.to_string()))?;
    let truncated = f.trunc();
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= I64_UPPER {
        return Err(CoerceReason::OutOfRange(n.to_string()));
    }
    Ok(truncated as i64)
}

fn text_to_int(raw: &str) -> Result<i64, CoerceReason> {
    let text = raw.trim();
    if !INTEGER_TEXT.is_match(text) {
        return Err(CoerceReason::NotAnInteger(raw.to_string()));
    }

    let digits: String = text.chars().filter(|c| *c != '_').collect();
    digits
        .parse::<i64>()
        .map_err(|_| CoerceReason::OutOfRange(text.to_string()))
}

/// Trimmed text form of a scalar field.
///
/// Missing and null fields read as the empty string; numbers and booleans use
/// their canonical text. Returns `None` for sequences and mappings.
pub fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => Some(String::new()),
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Array(_) | Value::Object(_)) => None,
    }
}

/// Trimmed pool label, if the field is a string with visible content.
pub fn pool_label(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => {
            let label = s.trim();
            (!label.is_empty()).then(|| label.to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn coerce(value: Value) -> Result<i64, CoerceReason> {
        coerce_int("cpu", Some(&value)).map_err(|e| e.reason)
    }

    #[test]
    fn integers_pass_through() {
        assert_eq!(coerce(json!(4)), Ok(4));
        assert_eq!(coerce(json!(-3)), Ok(-3));
        assert_eq!(coerce(json!(0)), Ok(0));
    }

    #[test]
    fn floats_truncate_toward_zero() {
        assert_eq!(coerce(json!(2.9)), Ok(2));
        assert_eq!(coerce(json!(-2.9)), Ok(-2));
        assert_eq!(coerce(json!(4096.0)), Ok(4096));
    }

    #[test]
    fn booleans_coerce_to_one_and_zero() {
        assert_eq!(coerce(json!(true)), Ok(1));
        assert_eq!(coerce(json!(false)), Ok(0));
    }

    #[test]
    fn numeric_strings_are_parsed() {
        assert_eq!(coerce(json!("8")), Ok(8));
        assert_eq!(coerce(json!("  16\n")), Ok(16));
        assert_eq!(coerce(json!("+2")), Ok(2));
        assert_eq!(coerce(json!("-1")), Ok(-1));
        assert_eq!(coerce(json!("4_096")), Ok(4096));
    }

    #[test]
    fn malformed_strings_are_rejected() {
        for text in ["", "abc", "2.5", "1__0", "_1", "1_", "0x10", "٣"] {
            assert_eq!(
                coerce(json!(text)),
                Err(CoerceReason::NotAnInteger(text.to_string())),
                "input {text:?}"
            );
        }
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            coerce(json!(u64::MAX)),
            Err(CoerceReason::OutOfRange(_))
        ));
        assert!(matches!(
            coerce(json!(1e300)),
            Err(CoerceReason::OutOfRange(_))
        ));
        assert!(matches!(
            coerce(json!("99999999999999999999")),
            Err(CoerceReason::OutOfRange(_))
        ));
    }

    #[test]
    fn missing_and_compound_values_are_rejected() {
        assert_eq!(
            coerce_int("memory_mb", None),
            Err(CoerceError {
                field: "memory_mb",
                reason: CoerceReason::Missing
            })
        );
        assert_eq!(coerce(Value::Null), Err(CoerceReason::Missing));
        assert_eq!(coerce(json!([1])), Err(CoerceReason::WrongType("a sequence")));
        assert_eq!(coerce(json!({"n": 1})), Err(CoerceReason::WrongType("a mapping")));
    }

    #[test]
    fn coerce_error_names_the_field() {
        let err = coerce_int("memory_mb", Some(&json!("lots"))).unwrap_err();
        assert_eq!(err.to_string(), r#"memory_mb: "lots" is not an integer"#);
    }

    #[test]
    fn scalar_text_trims_and_stringifies() {
        assert_eq!(scalar_text(Some(&json!("  node-1 "))), Some("node-1".into()));
        assert_eq!(scalar_text(Some(&json!(42))), Some("42".into()));
        assert_eq!(scalar_text(Some(&json!(true))), Some("true".into()));
        assert_eq!(scalar_text(Some(&Value::Null)), Some(String::new()));
        assert_eq!(scalar_text(None), Some(String::new()));
        assert_eq!(scalar_text(Some(&json!(["a"]))), None);
        assert_eq!(scalar_text(Some(&json!({"a": 1}))), None);
    }

    #[test]
    fn pool_label_requires_visible_string() {
        assert_eq!(pool_label(Some(&json!(" blue "))), Some("blue".into()));
        assert_eq!(pool_label(Some(&json!("   "))), None);
        assert_eq!(pool_label(Some(&json!(7))), None);
        assert_eq!(pool_label(None), None);
    }
}
