use parsec_core::json::{json_value, JsonValue};
use parsec_core::seq::Seq;
use std::collections::BTreeMap;

fn number(n: f64) -> JsonValue {
    JsonValue::Number(n)
}

#[test]
fn test_object_with_nested_array() {
    let pair = json_value().run_str(r#"{"a": 1, "b": [2, 3]}"#).get();

    let mut expected = BTreeMap::new();
    expected.insert("a".to_string(), number(1.0));
    expected.insert(
        "b".to_string(),
        JsonValue::Array([number(2.0), number(3.0)].into_iter().collect()),
    );

    assert_eq!(pair.first, JsonValue::Object(expected));
    // Every delimiter and every space is consumed; nothing is left over.
    assert!(pair.second.is_empty());
}

#[test]
fn test_whitespace_everywhere() {
    let source = "  {  \"key\"  :  [ 1 ,\n\t2 ]  }  ";
    let pair = json_value().run_str(source).get();

    let mut expected = BTreeMap::new();
    expected.insert(
        "key".to_string(),
        JsonValue::Array([number(1.0), number(2.0)].into_iter().collect()),
    );
    assert_eq!(pair.first, JsonValue::Object(expected));
    assert!(pair.second.is_empty());
}

#[test]
fn test_deeply_nested_structure() {
    let source = r#"{"outer": {"inner": {"leaf": [true, false, null]}}}"#;
    let pair = json_value().run_str(source).get();

    let leaf: Seq<JsonValue> = [
        JsonValue::Boolean(true),
        JsonValue::Boolean(false),
        JsonValue::Null,
    ]
    .into_iter()
    .collect();

    let mut innermost = BTreeMap::new();
    innermost.insert("leaf".to_string(), JsonValue::Array(leaf));
    let mut inner = BTreeMap::new();
    inner.insert("inner".to_string(), JsonValue::Object(innermost));
    let mut outer = BTreeMap::new();
    outer.insert("outer".to_string(), JsonValue::Object(inner));

    assert_eq!(pair.first, JsonValue::Object(outer));
    assert!(pair.second.is_empty());
}

#[test]
fn test_array_of_mixed_values() {
    let pair = json_value()
        .run_str(r#"[null, true, 1.5, "text", []]"#)
        .get();

    let expected: Seq<JsonValue> = [
        JsonValue::Null,
        JsonValue::Boolean(true),
        number(1.5),
        JsonValue::String("text".to_string()),
        JsonValue::Array(Seq::new()),
    ]
    .into_iter()
    .collect();

    assert_eq!(pair.first, JsonValue::Array(expected));
    assert!(pair.second.is_empty());
}

#[test]
fn test_unterminated_object_fails() {
    assert!(json_value().run_str(r#"{"a": 1"#).is_failure());
}

#[test]
fn test_bare_separator_fails() {
    assert!(json_value().run_str(",").is_failure());
}

#[test]
fn test_parsing_twice_gives_equal_results() {
    let source = r#"{"a": [1, {"b": null}]}"#;
    assert_eq!(json_value().run_str(source), json_value().run_str(source));
}
