//! A JSON-like grammar assembled purely from the core combinators.
//!
//! This module consumes the public combinator surface the same way any
//! downstream grammar would; it exercises every composition primitive the
//! engine offers, which is exactly why it lives in-tree.

use crate::combinator::{
    double_number, expect_char, expect_string, many, padded, string_literal_body,
};
use crate::pair::Pair;
use crate::parser::Parser;
use crate::seq::Seq;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Seq<JsonValue>),
    Object(BTreeMap<String, JsonValue>),
}

pub fn json_null() -> Parser<JsonValue> {
    padded(&expect_string("null")).map(|_| JsonValue::Null)
}

pub fn json_boolean() -> Parser<JsonValue> {
    let literal = expect_string("true").or(|| expect_string("false"));
    padded(&literal).map(|text| JsonValue::Boolean(text == "true"))
}

pub fn json_number() -> Parser<JsonValue> {
    padded(&double_number()).map(JsonValue::Number)
}

/// A quote-delimited string. Escape sequences are not supported; the body
/// is the restricted literal character class of the core.
fn quoted_string() -> Parser<String> {
    let quote = expect_char('"');
    padded(&quote.then(&string_literal_body()).skip(&quote))
}

pub fn json_string() -> Parser<JsonValue> {
    quoted_string().map(JsonValue::String)
}

/// Element and member separators: zero or more commas, each padded.
fn commas() -> Parser<Seq<char>> {
    many(&padded(&expect_char(',')))
}

/// One `"key": value` member, with its trailing separator consumed.
fn member() -> Parser<Pair<String, JsonValue>> {
    let colon = padded(&expect_char(':'));
    quoted_string().skip(&colon).and(json_value).skip(&commas())
}

pub fn json_object() -> Parser<JsonValue> {
    let open = padded(&expect_char('{'));
    let close = padded(&expect_char('}'));
    let body = many(&member()).map(|members| {
        let map = members.fold_left(BTreeMap::new(), |mut map, pair| {
            map.insert(pair.first.clone(), pair.second.clone());
            map
        });
        JsonValue::Object(map)
    });
    open.then(&body).skip(&close)
}

pub fn json_array() -> Parser<JsonValue> {
    let open = padded(&expect_char('['));
    let close = padded(&expect_char(']'));
    let elements = many(&Parser::lazy(json_value).skip(&commas()));
    open.then(&elements).skip(&close).map(JsonValue::Array)
}

/// Any JSON value, by ordered choice. Recursive references (arrays and
/// objects containing values) flow through lazy thunks so construction
/// terminates.
pub fn json_value() -> Parser<JsonValue> {
    json_null()
        .or(json_boolean)
        .or(json_number)
        .or(json_string)
        .or(json_array)
        .or(json_object)
}
