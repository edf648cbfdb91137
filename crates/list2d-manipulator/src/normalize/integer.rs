//! Integer normalization.

use std::num::IntErrorKind;

use list2d_core::{NormalizeError, Value};

/// Coerce a value to `i64`.
///
/// Integers pass through, booleans become 0/1, finite floats truncate toward
/// zero, and text is parsed after trimming whitespace (a leading `+`/`-` is
/// allowed).
pub fn try_value_to_int(value: &Value) -> Result<i64, NormalizeError> {
    match value {
        Value::Null => Err(NormalizeError::Absent),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Int(i) => Ok(*i),
        Value::Float(f) => float_to_int(f.trunc()),
        Value::Text(s) => parse_int_text(s),
    }
}

/// Like [`try_value_to_int`], reporting every failure as `None`.
pub fn value_to_int(value: &Value) -> Option<i64> {
    try_value_to_int(value).ok()
}

fn parse_int_text(s: &str) -> Result<i64, NormalizeError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::Blank);
    }
    trimmed.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            NormalizeError::OutOfRange(trimmed.to_string())
        }
        _ => NormalizeError::NotNumeric(s.to_string()),
    })
}

/// Convert an integral float to `i64`, rejecting NaN, infinities and
/// anything outside the `i64` range.
pub(crate) fn float_to_int(f: f64) -> Result<i64, NormalizeError> {
    if f.is_nan() {
        return Err(NormalizeError::NotNumeric(f.to_string()));
    }
    // i64::MIN is exactly representable; i64::MAX rounds up to 2^63.
    if f >= -9_223_372_036_854_775_808.0 && f < 9_223_372_036_854_775_808.0 {
        Ok(f as i64)
    } else {
        Err(NormalizeError::OutOfRange(f.to_string()))
    }
}
