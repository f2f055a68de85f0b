//! Turns a matched placeholder into a concrete replacement.

use super::schema::Placeholder;
use crate::value::Value;

/// Resolves `placeholder` against the leaf at `path` holding `current`.
///
/// `None` means "no replacement": the leaf is left untouched. Resolution
/// never fails.
pub(crate) fn resolve(placeholder: &Placeholder, path: &str, current: &Value) -> Option<Value> {
    match placeholder {
        Placeholder::Literal(value) => Some(value.clone()),
        Placeholder::Pure(transform) => Some(transform(current)),
        Placeholder::Contextual(transform) => Some(transform(path, current)),
        Placeholder::Keep => None,
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::{engine::schema::Rule, value::Value};

    #[test]
    fn literal_ignores_current_value() {
        let rule = Rule::literal("A", "X");
        let resolved = resolve(&rule.placeholder, "A", &Value::from("secret"));
        assert_eq!(resolved, Some(Value::from("X")));
    }

    #[test]
    fn pure_transform_sees_only_value() {
        let rule = Rule::function("A", |value| match value {
            Value::String(text) => Value::String(text.replace("real", "fake")),
            other => other.clone(),
        });
        let resolved = resolve(&rule.placeholder, "A", &Value::from("real_value"));
        assert_eq!(resolved, Some(Value::from("fake_value")));
    }

    #[test]
    fn contextual_transform_sees_full_path() {
        let rule = Rule::contextual("*", |path, _| Value::from(path));
        let resolved = resolve(&rule.placeholder, "C/D", &Value::Int(1));
        assert_eq!(resolved, Some(Value::from("C/D")));
    }

    #[test]
    fn keep_resolves_to_nothing() {
        let rule = Rule::keep("A");
        assert_eq!(resolve(&rule.placeholder, "A", &Value::Int(1)), None);
    }
}
