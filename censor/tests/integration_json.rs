//! Integration tests for censoring `serde_json` payloads in place.

#![cfg(feature = "json")]

use censor::{censor, censor_with, CensorError, Kind, Rule, Schema, Value, WILDCARD};
use serde_json::json;

#[test]
fn test_zeroing_parsed_object() {
    let mut payload: serde_json::Value =
        serde_json::from_str(r#"{"A":"secret","E":"keep"}"#).unwrap();
    censor(&mut payload, &[Rule::zero("A")]).unwrap();
    assert_eq!(payload, json!({"A": "", "E": "keep"}));
}

#[test]
fn test_contextual_wildcard_over_json() {
    let mut payload = json!({"A": "secret", "B": 42, "C": {"D": "deep"}});
    censor_with(&mut payload, |path, old| match old {
        Value::String(_) => Value::from(path),
        Value::Int(_) | Value::UInt(_) | Value::Float(_) => Value::Int(9999),
        _ => Value::Null,
    })
    .unwrap();
    assert_eq!(payload, json!({"A": "A", "B": 9999, "C": {"D": "C/D"}}));
}

#[test]
fn test_json_object_map_root() {
    let mut object = serde_json::Map::new();
    object.insert("password".into(), json!("hunter2"));
    object.insert("user".into(), json!("ada"));
    censor(&mut object, &[Rule::literal("password", "***")]).unwrap();
    assert_eq!(object["password"], json!("***"));
    assert_eq!(object["user"], json!("ada"));
}

#[test]
fn test_json_arrays_are_leaves() {
    let mut payload = json!({"tags": ["a", "b"], "nested": [{"secret": 1}]});
    censor(&mut payload, &[Rule::zero("nested/secret"), Rule::zero("tags")]).unwrap();
    assert_eq!(payload["tags"], json!([]));
    assert_eq!(payload["nested"], json!([{"secret": 1}]));
}

#[test]
fn test_json_scalar_root_is_rejected() {
    let mut payload = json!(12);
    let err = censor(&mut payload, &[Rule::zero(WILDCARD)]).unwrap_err();
    assert_eq!(err, CensorError::NotCensorable { found: Kind::Int });
    assert_eq!(payload, json!(12));
}

#[test]
fn test_schema_on_request_body() {
    let schema = Schema::new()
        .with(Rule::zero("card/number"))
        .with(Rule::literal("card/cvv", 0_i64));
    let mut body = json!({
        "card": {"number": "4111111111111111", "cvv": 123},
        "amount": 10.5,
    });
    schema.apply(&mut body).unwrap();
    assert_eq!(body, json!({"card": {"number": "", "cvv": 0}, "amount": 10.5}));
}

#[test]
fn test_value_round_trips_through_serde() {
    let value: Value = serde_json::from_value(json!({"A": [1, "x", null]})).unwrap();
    let back = serde_json::to_value(&value).unwrap();
    assert_eq!(back, json!({"A": [1, "x", null]}));
}
