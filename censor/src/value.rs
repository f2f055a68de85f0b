//! Dynamically-typed values exchanged between the engine and placeholders.
//!
//! Every leaf the engine touches is read into a [`Value`] before a
//! placeholder is resolved, and every replacement is handed back as a
//! [`Value`]. The [`Kind`] of a value is what substitution compares against a
//! slot's declared type.

use std::{collections::BTreeMap, fmt};

/// String-keyed mapping of dynamic values.
pub type Map = BTreeMap<String, Value>;

/// A dynamically-typed value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "json",
    serde(into = "serde_json::Value", from = "serde_json::Value")
)]
pub enum Value {
    /// Absence of a value. A `Null` replacement always zeroes the leaf.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    String(String),
    List(Vec<Value>),
    Map(Map),
}

/// The dynamic type of a [`Value`], or the declared type of a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    UInt,
    Float,
    Char,
    String,
    List,
    Map,
    /// Declared type of a dynamically-typed slot; admits any value.
    Any,
}

impl Kind {
    /// Returns the zero/empty value of this kind.
    #[must_use]
    pub fn zero(self) -> Value {
        match self {
            Kind::Null | Kind::Any => Value::Null,
            Kind::Bool => Value::Bool(false),
            Kind::Int => Value::Int(0),
            Kind::UInt => Value::UInt(0),
            Kind::Float => Value::Float(0.0),
            Kind::Char => Value::Char('\0'),
            Kind::String => Value::String(String::new()),
            Kind::List => Value::List(Vec::new()),
            Kind::Map => Value::Map(Map::new()),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::UInt => "uint",
            Kind::Float => "float",
            Kind::Char => "char",
            Kind::String => "string",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Any => "any",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Returns the dynamic kind of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::UInt(_) => Kind::UInt,
            Value::Float(_) => Kind::Float,
            Value::Char(_) => Kind::Char,
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Int(number) => Some(number),
            Value::UInt(number) => i64::try_from(number).ok(),
            _ => None,
        }
    }

    /// Converts this value into `kind` without losing information.
    ///
    /// Supported conversions: identity, anything into [`Kind::Any`],
    /// integers into floats, signed/unsigned integers into each other when
    /// in range, and chars into strings. `Null` never converts.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn convert(self, kind: Kind) -> Option<Value> {
        if self.is_null() {
            return None;
        }
        if kind == Kind::Any || self.kind() == kind {
            return Some(self);
        }
        match (self, kind) {
            (Value::Int(number), Kind::Float) => Some(Value::Float(number as f64)),
            (Value::UInt(number), Kind::Float) => Some(Value::Float(number as f64)),
            (Value::Int(number), Kind::UInt) => u64::try_from(number).ok().map(Value::UInt),
            (Value::UInt(number), Kind::Int) => i64::try_from(number).ok().map(Value::Int),
            (Value::Char(ch), Kind::String) => Some(Value::String(ch.to_string())),
            _ => None,
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::UInt(u64::from(value))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
