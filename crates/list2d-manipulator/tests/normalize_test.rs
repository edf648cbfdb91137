//! Tests for soft text and integer normalization.

use list2d_core::{NormalizeError, Value};
use list2d_manipulator::normalize::*;

// ---- value_to_unicode ----

#[test]
fn test_plain_text() {
    assert_eq!(
        value_to_unicode(&Value::from("hello world")),
        Some("hello world".to_string())
    );
}

#[test]
fn test_strips_whitespace_and_quotes() {
    let cases = [
        ("  test  ", "test"),
        ("'quoted'", "quoted"),
        ("\"double quoted\"", "double quoted"),
        ("\t\nvalue\r\n", "value"),
        ("\\escaped\\", "escaped"),
        ("  text123  ", "text123"),
    ];
    for (input, expected) in cases {
        assert_eq!(
            value_to_unicode(&Value::from(input)).as_deref(),
            Some(expected),
            "input {input:?}"
        );
    }
}

#[test]
fn test_inner_characters_are_kept() {
    assert_eq!(
        value_to_unicode(&Value::from(" it's \"fine\" ")).as_deref(),
        Some("it's \"fine")
    );
}

#[test]
fn test_unicode_text() {
    for s in ["příliš žluťoučký kůň", "中文字符"] {
        assert_eq!(value_to_unicode(&Value::from(s)).as_deref(), Some(s));
    }
}

#[test]
fn test_absent_results() {
    for v in [
        Value::from(""),
        Value::from("   "),
        Value::from("''"),
        Value::Null,
        Value::Int(123),
        Value::Bool(true),
        Value::Float(1.5),
    ] {
        assert_eq!(value_to_unicode(&v), None, "value {v:?}");
    }
}

#[test]
fn test_unicode_failure_reasons() {
    assert_eq!(try_value_to_unicode(&Value::Null), Err(NormalizeError::Absent));
    assert_eq!(try_value_to_unicode(&Value::from(" \t")), Err(NormalizeError::Blank));
    assert_eq!(
        try_value_to_unicode(&Value::Int(1)),
        Err(NormalizeError::NotText { kind: "int" })
    );
}

#[test]
fn test_strip_value_custom_set() {
    assert_eq!(strip_value(&Value::from("--x--"), "-"), Ok("x".to_string()));
    assert_eq!(strip_value(&Value::from(" x "), "-"), Ok(" x ".to_string()));
}

// ---- value_to_int ----

#[test]
fn test_valid_integers() {
    assert_eq!(value_to_int(&Value::from("42")), Some(42));
    assert_eq!(value_to_int(&Value::Int(10)), Some(10));
    assert_eq!(value_to_int(&Value::from("-5")), Some(-5));
    assert_eq!(value_to_int(&Value::from("+8")), Some(8));
    assert_eq!(value_to_int(&Value::from(" 7 ")), Some(7));
}

#[test]
fn test_invalid_integers() {
    for v in [
        Value::from("abc"),
        Value::Null,
        Value::from(""),
        Value::from("4.2"),
        Value::from("1 2"),
    ] {
        assert_eq!(value_to_int(&v), None, "value {v:?}");
    }
}

#[test]
fn test_bool_and_float_coercion() {
    assert_eq!(value_to_int(&Value::Bool(true)), Some(1));
    assert_eq!(value_to_int(&Value::Bool(false)), Some(0));
    assert_eq!(value_to_int(&Value::Float(3.9)), Some(3));
    assert_eq!(value_to_int(&Value::Float(-3.9)), Some(-3));
    assert_eq!(value_to_int(&Value::Float(f64::NAN)), None);
    assert_eq!(value_to_int(&Value::Float(1e30)), None);
}

#[test]
fn test_int_failure_reasons() {
    assert_eq!(try_value_to_int(&Value::Null), Err(NormalizeError::Absent));
    assert_eq!(try_value_to_int(&Value::from("  ")), Err(NormalizeError::Blank));
    assert_eq!(
        try_value_to_int(&Value::from("abc")),
        Err(NormalizeError::NotNumeric("abc".to_string()))
    );
    assert!(matches!(
        try_value_to_int(&Value::from("99999999999999999999")),
        Err(NormalizeError::OutOfRange(_))
    ));
    assert_eq!(
        try_value_to_int(&Value::from("-9223372036854775808")),
        Ok(i64::MIN)
    );
}
