//! `serde_json` integration.
//!
//! A `serde_json::Value` object is a mapping, every other JSON value is a
//! dynamically-typed leaf. This lets payloads parsed from JSON be censored
//! in place without first converting them into [`Value`].

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::{
    shape::{Censorable, Entry, Leaf, Mapping, Shape},
    value::{Kind, Map, Value},
};

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(flag) => Value::Bool(flag),
            JsonValue::Number(number) => from_number(&number),
            JsonValue::String(text) => Value::String(text),
            JsonValue::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            JsonValue::Object(object) => Value::Map(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Map>(),
            ),
        }
    }
}

fn from_number(number: &Number) -> Value {
    if let Some(signed) = number.as_i64() {
        Value::Int(signed)
    } else if let Some(unsigned) = number.as_u64() {
        Value::UInt(unsigned)
    } else {
        number.as_f64().map_or(Value::Null, Value::Float)
    }
}

/// Non-finite floats have no JSON representation and become `null`.
impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(flag) => JsonValue::Bool(flag),
            Value::Int(number) => JsonValue::Number(number.into()),
            Value::UInt(number) => JsonValue::Number(number.into()),
            Value::Float(number) => {
                Number::from_f64(number).map_or(JsonValue::Null, JsonValue::Number)
            }
            Value::Char(ch) => JsonValue::String(ch.to_string()),
            Value::String(text) => JsonValue::String(text),
            Value::List(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            Value::Map(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, JsonValue::from(value)))
                    .collect::<JsonMap<String, JsonValue>>(),
            ),
        }
    }
}

impl Leaf for JsonValue {
    fn declared(&self) -> Kind {
        Kind::Any
    }

    fn get(&self) -> Value {
        Value::from(self.clone())
    }

    fn put(&mut self, value: Value) -> bool {
        *self = JsonValue::from(value);
        true
    }

    fn clear(&mut self) {
        *self = JsonValue::Null;
    }
}

impl Censorable for JsonValue {
    fn shape(&mut self) -> Shape<'_> {
        match self {
            JsonValue::Object(object) => Shape::Mapping(object),
            other => Shape::Leaf(other),
        }
    }

    fn is_dynamic() -> bool {
        true
    }
}

impl Mapping for JsonMap<String, JsonValue> {
    fn entries(&mut self) -> Vec<Entry<'_>> {
        self.iter_mut()
            .map(|(key, value)| Entry {
                key: key.as_str(),
                value,
            })
            .collect()
    }

    fn dynamic(&self) -> bool {
        true
    }
}

impl Censorable for JsonMap<String, JsonValue> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Mapping(self)
    }
}
