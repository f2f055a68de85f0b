//! `Leaf` implementations for std scalars, strings and simple wrappers.

use super::{Censorable, Leaf, Shape};
use crate::value::{Kind, Value};

macro_rules! impl_censorable_leaf {
    ($($ty:ty),*) => {
        $(
            impl Censorable for $ty {
                fn shape(&mut self) -> Shape<'_> {
                    Shape::Leaf(self)
                }
            }
        )*
    };
}

macro_rules! impl_leaf_signed {
    ($($ty:ty),*) => {
        $(
            impl Leaf for $ty {
                fn declared(&self) -> Kind {
                    Kind::Int
                }

                fn get(&self) -> Value {
                    Value::Int(i64::from(*self))
                }

                fn put(&mut self, value: Value) -> bool {
                    match value {
                        Value::Int(number) => <$ty>::try_from(number).map(|n| *self = n).is_ok(),
                        _ => false,
                    }
                }

                fn clear(&mut self) {
                    *self = 0;
                }
            }
        )*
    };
}

macro_rules! impl_leaf_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Leaf for $ty {
                fn declared(&self) -> Kind {
                    Kind::UInt
                }

                fn get(&self) -> Value {
                    Value::UInt(u64::from(*self))
                }

                fn put(&mut self, value: Value) -> bool {
                    match value {
                        Value::UInt(number) => <$ty>::try_from(number).map(|n| *self = n).is_ok(),
                        _ => false,
                    }
                }

                fn clear(&mut self) {
                    *self = 0;
                }
            }
        )*
    };
}

impl_leaf_signed!(i8, i16, i32, i64);
impl_leaf_unsigned!(u8, u16, u32, u64);

impl Leaf for isize {
    fn declared(&self) -> Kind {
        Kind::Int
    }

    fn get(&self) -> Value {
        // isize is at most 64 bits wide on every supported target.
        i64::try_from(*self).map_or(Value::Null, Value::Int)
    }

    fn put(&mut self, value: Value) -> bool {
        match value {
            Value::Int(number) => isize::try_from(number).map(|n| *self = n).is_ok(),
            _ => false,
        }
    }

    fn clear(&mut self) {
        *self = 0;
    }
}

impl Leaf for usize {
    fn declared(&self) -> Kind {
        Kind::UInt
    }

    fn get(&self) -> Value {
        u64::try_from(*self).map_or(Value::Null, Value::UInt)
    }

    fn put(&mut self, value: Value) -> bool {
        match value {
            Value::UInt(number) => usize::try_from(number).map(|n| *self = n).is_ok(),
            _ => false,
        }
    }

    fn clear(&mut self) {
        *self = 0;
    }
}

impl Leaf for f64 {
    fn declared(&self) -> Kind {
        Kind::Float
    }

    fn get(&self) -> Value {
        Value::Float(*self)
    }

    fn put(&mut self, value: Value) -> bool {
        match value {
            Value::Float(number) => {
                *self = number;
                true
            }
            _ => false,
        }
    }

    fn clear(&mut self) {
        *self = 0.0;
    }
}

impl Leaf for f32 {
    fn declared(&self) -> Kind {
        Kind::Float
    }

    fn get(&self) -> Value {
        Value::Float(f64::from(*self))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn put(&mut self, value: Value) -> bool {
        match value {
            Value::Float(number) => {
                *self = number as f32;
                true
            }
            _ => false,
        }
    }

    fn clear(&mut self) {
        *self = 0.0;
    }
}

impl Leaf for bool {
    fn declared(&self) -> Kind {
        Kind::Bool
    }

    fn get(&self) -> Value {
        Value::Bool(*self)
    }

    fn put(&mut self, value: Value) -> bool {
        match value {
            Value::Bool(flag) => {
                *self = flag;
                true
            }
            _ => false,
        }
    }

    fn clear(&mut self) {
        *self = false;
    }
}

impl Leaf for char {
    fn declared(&self) -> Kind {
        Kind::Char
    }

    fn get(&self) -> Value {
        Value::Char(*self)
    }

    fn put(&mut self, value: Value) -> bool {
        match value {
            Value::Char(ch) => {
                *self = ch;
                true
            }
            _ => false,
        }
    }

    fn clear(&mut self) {
        *self = '\0';
    }
}

impl Leaf for String {
    fn declared(&self) -> Kind {
        Kind::String
    }

    fn get(&self) -> Value {
        Value::String(self.clone())
    }

    fn put(&mut self, value: Value) -> bool {
        match value {
            Value::String(text) => {
                *self = text;
                true
            }
            _ => false,
        }
    }

    fn clear(&mut self) {
        self.clear();
    }
}

impl_censorable_leaf!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char, String
);

/// `None` is the zero value; a replacement of the inner kind becomes `Some`.
impl<T> Leaf for Option<T>
where
    T: Leaf + Default,
{
    fn declared(&self) -> Kind {
        self.as_ref()
            .map_or_else(|| T::default().declared(), Leaf::declared)
    }

    fn get(&self) -> Value {
        self.as_ref().map_or(Value::Null, Leaf::get)
    }

    fn put(&mut self, value: Value) -> bool {
        let mut inner = T::default();
        if inner.put(value) {
            *self = Some(inner);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        *self = None;
    }
}

impl<T> Censorable for Option<T>
where
    T: Leaf + Default,
{
    fn shape(&mut self) -> Shape<'_> {
        Shape::Leaf(self)
    }
}

/// A list is replaced as a whole; every element must fit `T`.
impl<T> Leaf for Vec<T>
where
    T: Leaf + Default,
{
    fn declared(&self) -> Kind {
        Kind::List
    }

    fn get(&self) -> Value {
        Value::List(self.iter().map(Leaf::get).collect())
    }

    fn put(&mut self, value: Value) -> bool {
        let Value::List(items) = value else {
            return false;
        };
        let mut replacement = Vec::with_capacity(items.len());
        for item in items {
            let mut element = T::default();
            if !element.put(item) {
                return false;
            }
            replacement.push(element);
        }
        *self = replacement;
        true
    }

    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> Censorable for Vec<T>
where
    T: Leaf + Default,
{
    fn shape(&mut self) -> Shape<'_> {
        Shape::Leaf(self)
    }
}

impl Leaf for Value {
    fn declared(&self) -> Kind {
        Kind::Any
    }

    fn get(&self) -> Value {
        self.clone()
    }

    fn put(&mut self, value: Value) -> bool {
        *self = value;
        true
    }

    fn clear(&mut self) {
        *self = Value::Null;
    }
}

impl Censorable for Value {
    fn shape(&mut self) -> Shape<'_> {
        match self {
            Value::Map(map) => Shape::Mapping(map),
            other => Shape::Leaf(other),
        }
    }

    fn is_dynamic() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{Censorable, Leaf, Shape};
    use crate::value::{Kind, Value};

    #[test]
    fn narrow_integer_rejects_overflow() {
        let mut slot: i8 = 5;
        assert!(!slot.put(Value::Int(1_000)));
        assert_eq!(slot, 5);
        assert!(slot.put(Value::Int(-7)));
        assert_eq!(slot, -7);
    }

    #[test]
    fn unsigned_slot_rejects_signed_value() {
        let mut slot: u32 = 1;
        assert!(!slot.put(Value::Int(2)));
        assert!(slot.put(Value::UInt(2)));
        assert_eq!(slot, 2);
    }

    #[test]
    fn string_clear_empties() {
        let mut slot = "secret".to_string();
        Leaf::clear(&mut slot);
        assert_eq!(slot, "");
    }

    #[test]
    fn option_declares_inner_kind_when_none() {
        let slot: Option<String> = None;
        assert_eq!(slot.declared(), Kind::String);
        assert_eq!(slot.get(), Value::Null);
    }

    #[test]
    fn option_put_wraps_in_some() {
        let mut slot: Option<u16> = None;
        assert!(slot.put(Value::UInt(8)));
        assert_eq!(slot, Some(8));
        Leaf::clear(&mut slot);
        assert_eq!(slot, None);
    }

    #[test]
    fn vec_put_requires_every_element_to_fit() {
        let mut slot = vec!["a".to_string()];
        assert!(!slot.put(Value::List(vec![Value::from("b"), Value::Int(1)])));
        assert_eq!(slot, vec!["a".to_string()]);
        assert!(slot.put(Value::from(vec!["b", "c"])));
        assert_eq!(slot, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn value_map_is_a_container() {
        let mut value = Value::Map(crate::value::Map::new());
        assert!(matches!(value.shape(), Shape::Mapping(_)));
        let mut value = Value::from("x");
        assert!(matches!(value.shape(), Shape::Leaf(_)));
    }

    #[test]
    fn list_value_is_a_leaf() {
        let mut value = Value::from(vec![1_i64, 2]);
        assert!(!value.shape().is_container());
    }
}
