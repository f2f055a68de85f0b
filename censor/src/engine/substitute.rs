//! Type-checked, infallible replacement of a single leaf.
//!
//! A replacement that does not fit the slot never raises: the slot is reset
//! to its zero value instead.

use crate::{
    shape::Leaf,
    value::{Kind, Value},
};

/// What happened to a leaf after a replacement was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Outcome {
    Replaced,
    Zeroed,
}

/// Applies `replacement` to a record field.
///
/// The replacement is stored only when it is non-null and its kind equals
/// the field's declared kind (any kind for dynamically-typed fields).
pub(crate) fn apply_field(leaf: &mut dyn Leaf, replacement: Value) -> Outcome {
    let declared = leaf.declared();
    let fits = !replacement.is_null() && (declared == Kind::Any || replacement.kind() == declared);
    if fits && leaf.put(replacement) {
        Outcome::Replaced
    } else {
        leaf.clear();
        Outcome::Zeroed
    }
}

/// Applies `replacement` to a mapping entry.
///
/// The replacement is stored when it matches (or converts to) the entry's
/// current kind, or converts to the mapping's declared value type. Otherwise
/// a typed entry is cleared to its declared zero (`None` for `Option`) and a
/// dynamic entry is reset to the zero value of its current kind.
pub(crate) fn apply_entry(leaf: &mut dyn Leaf, replacement: Value) -> Outcome {
    let current = leaf.get().kind();
    let declared = leaf.declared();
    let target = if current == Kind::Null { declared } else { current };

    let converted = replacement
        .clone()
        .convert(target)
        .or_else(|| replacement.convert(declared));
    if let Some(value) = converted {
        if leaf.put(value) {
            return Outcome::Replaced;
        }
    }

    if declared != Kind::Any || current == Kind::Null || !leaf.put(current.zero()) {
        leaf.clear();
    }
    Outcome::Zeroed
}

#[cfg(test)]
mod tests {
    use super::{apply_entry, apply_field, Outcome};
    use crate::value::Value;

    #[test]
    fn field_accepts_matching_kind() {
        let mut field = "secret".to_string();
        assert_eq!(apply_field(&mut field, Value::from("X")), Outcome::Replaced);
        assert_eq!(field, "X");
    }

    #[test]
    fn field_zeroes_on_kind_mismatch() {
        let mut field = 1234_i64;
        assert_eq!(apply_field(&mut field, Value::from("X")), Outcome::Zeroed);
        assert_eq!(field, 0);
    }

    #[test]
    fn field_zeroes_on_null() {
        let mut field = "secret".to_string();
        assert_eq!(apply_field(&mut field, Value::Null), Outcome::Zeroed);
        assert_eq!(field, "");
    }

    #[test]
    fn field_does_not_convert_between_kinds() {
        let mut field = 1.5_f64;
        assert_eq!(apply_field(&mut field, Value::Int(2)), Outcome::Zeroed);
        assert!(field.abs() < f64::EPSILON);
    }

    #[test]
    fn field_zeroes_on_overflow() {
        let mut field = 3_u8;
        assert_eq!(apply_field(&mut field, Value::UInt(300)), Outcome::Zeroed);
        assert_eq!(field, 0);
    }

    #[test]
    fn dynamic_field_accepts_any_kind() {
        let mut field = Value::from("secret");
        assert_eq!(apply_field(&mut field, Value::Int(7)), Outcome::Replaced);
        assert_eq!(field, Value::Int(7));
        assert_eq!(apply_field(&mut field, Value::Null), Outcome::Zeroed);
        assert_eq!(field, Value::Null);
    }

    #[test]
    fn entry_zeroes_to_current_kind() {
        let mut entry = Value::from("secret");
        assert_eq!(apply_entry(&mut entry, Value::Null), Outcome::Zeroed);
        assert_eq!(entry, Value::from(""));
    }

    #[test]
    fn entry_converts_to_current_kind() {
        let mut entry = Value::Float(1.5);
        assert_eq!(apply_entry(&mut entry, Value::Int(9999)), Outcome::Replaced);
        assert_eq!(entry, Value::Float(9999.0));
    }

    #[test]
    fn dynamic_entry_accepts_other_kinds() {
        let mut entry = Value::from("secret");
        assert_eq!(apply_entry(&mut entry, Value::Int(1)), Outcome::Replaced);
        assert_eq!(entry, Value::Int(1));
    }

    #[test]
    fn typed_entry_zeroes_on_unconvertible_kind() {
        let mut entry = "secret".to_string();
        assert_eq!(apply_entry(&mut entry, Value::Int(1)), Outcome::Zeroed);
        assert_eq!(entry, "");
    }

    #[test]
    fn typed_entry_accepts_char_as_string() {
        let mut entry = "secret".to_string();
        assert_eq!(apply_entry(&mut entry, Value::Char('x')), Outcome::Replaced);
        assert_eq!(entry, "x");
    }

    #[test]
    fn absent_optional_entry_stays_absent_when_zeroed() {
        let mut entry: Option<String> = None;
        assert_eq!(apply_entry(&mut entry, Value::Null), Outcome::Zeroed);
        assert_eq!(entry, None);
        assert_eq!(apply_entry(&mut entry, Value::from("X")), Outcome::Replaced);
        assert_eq!(entry.as_deref(), Some("X"));
    }

    #[test]
    fn present_optional_entry_clears_to_none() {
        let mut entry = Some("countess".to_string());
        assert_eq!(apply_entry(&mut entry, Value::Null), Outcome::Zeroed);
        assert_eq!(entry, None);
    }
}
