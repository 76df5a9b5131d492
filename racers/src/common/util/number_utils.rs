use crate::common::Value;
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_INTEGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?[0-9]+)").expect("leading integer pattern is valid")
});

/// Parses the leading integer of a string, the way form input is read.
///
/// Leading whitespace and an optional sign are accepted, parsing stops at the
/// first non-digit, and a string with no leading ASCII digits yields `0`.
/// Values out of `i64` range saturate.
///
/// ```rust
/// use racers::common::parse_leading_int;
///
/// assert_eq!(parse_leading_int("120"), 120);
/// assert_eq!(parse_leading_int("  -7 laps"), -7);
/// assert_eq!(parse_leading_int("12.9"), 12);
/// assert_eq!(parse_leading_int("abc"), 0);
/// ```
pub fn parse_leading_int(text: &str) -> i64 {
    let Some(captures) = LEADING_INTEGER.captures(text) else {
        return 0;
    };

    let digits = &captures[1];
    match digits.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            log::debug!("Integer {} is out of range, saturating", digits);
            if digits.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            }
        }
    }
}

/// Best-effort conversion of any [Value] to an integer.
///
/// Integers pass through, floats truncate toward zero, strings are read with
/// [parse_leading_int], booleans map to `1`/`0` and every other value is `0`.
/// This never fails.
pub fn lenient_int(value: &Value) -> i64 {
    match value {
        Value::I64(v) => *v,
        Value::F64(v) if v.is_finite() => v.trunc() as i64,
        Value::String(s) => parse_leading_int(s),
        Value::Bool(true) => 1,
        _ => 0,
    }
}
