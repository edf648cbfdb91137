//! Text normalization.

use list2d_core::constants::STRIPPED_CHARS;
use list2d_core::{NormalizeError, Value};

/// Strip `chars` from both ends of a text value.
///
/// Null is `Absent`, any non-text value is `NotText`, and text that strips
/// down to nothing is `Blank`.
pub fn strip_value(value: &Value, chars: &str) -> Result<String, NormalizeError> {
    match value {
        Value::Null => Err(NormalizeError::Absent),
        Value::Text(s) => {
            let stripped = s.trim_matches(|c: char| chars.contains(c));
            if stripped.is_empty() {
                Err(NormalizeError::Blank)
            } else {
                Ok(stripped.to_string())
            }
        }
        other => Err(NormalizeError::NotText { kind: other.kind() }),
    }
}

/// Normalize a value to trimmed text using the default strip set
/// (space, `'`, `\`, `"`, CR, LF, TAB).
pub fn try_value_to_unicode(value: &Value) -> Result<String, NormalizeError> {
    strip_value(value, STRIPPED_CHARS)
}

/// Like [`try_value_to_unicode`], reporting every failure as `None`.
pub fn value_to_unicode(value: &Value) -> Option<String> {
    try_value_to_unicode(value).ok()
}
