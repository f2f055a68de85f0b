//! Depth-first walk over records and mappings.
//!
//! The walk builds one path per field or entry by joining ancestor names
//! with [`SEPARATOR`]. Containers are always descended into, whether or not
//! their own path appears in the index; only leaves are looked up. Nothing
//! that happens below the root aborts the walk.

use tracing::{debug, trace};

use super::{
    resolve::resolve,
    schema::{Rule, SchemaIndex, SEPARATOR, WILDCARD},
    substitute::{apply_entry, apply_field},
};
use crate::{
    error::{CensorError, Result},
    shape::{Censorable, Leaf, Mapping, Record, Shape},
    value::{Kind, Value},
};

/// Censors `target` in place according to `rules`.
///
/// Each leaf is matched by exact path first, then by the [`WILDCARD`] rule.
/// Unmatched leaves are left untouched; replacements that do not fit a leaf's
/// type reset it to its zero value.
///
/// # Errors
///
/// Returns [`CensorError::NotCensorable`] when the root is neither a record
/// nor a string-keyed mapping of dynamic values ([`Map`](crate::Map),
/// `serde_json::Map`). The target is not modified in that case.
pub fn censor<T>(target: &mut T, rules: &[Rule]) -> Result<()>
where
    T: Censorable + ?Sized,
{
    let index = SchemaIndex::compile(rules);
    censor_indexed(target, &index)
}

/// Censors every leaf of `target` with `transform(path, old_value)`.
///
/// Shorthand for [`censor`] with a single wildcard contextual rule.
pub fn censor_with<T, F>(target: &mut T, transform: F) -> Result<()>
where
    T: Censorable + ?Sized,
    F: Fn(&str, &Value) -> Value + Send + Sync + 'static,
{
    censor(target, &[Rule::contextual(WILDCARD, transform)])
}

/// Censors `target` with an already-compiled index.
pub fn censor_indexed<T>(target: &mut T, index: &SchemaIndex<'_>) -> Result<()>
where
    T: Censorable + ?Sized,
{
    let walker = Walker { index };
    match target.shape() {
        Shape::Record(record) => walker.record(record, ""),
        Shape::Mapping(mapping) => {
            if !mapping.dynamic() {
                debug!(found = %Kind::Map, "typed map root is not censorable");
                return Err(CensorError::NotCensorable { found: Kind::Map });
            }
            walker.mapping(mapping, "");
        }
        Shape::Leaf(leaf) => {
            let found = match leaf.declared() {
                Kind::Any => leaf.get().kind(),
                declared => declared,
            };
            debug!(%found, "root is not censorable");
            return Err(CensorError::NotCensorable { found });
        }
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Slot {
    Field,
    Entry,
}

struct Walker<'i, 'r> {
    index: &'i SchemaIndex<'r>,
}

impl Walker<'_, '_> {
    fn record(&self, record: &mut dyn Record, prefix: &str) {
        for field in record.fields() {
            self.visit(prefix, field.name, field.value, Slot::Field);
        }
    }

    fn mapping(&self, mapping: &mut dyn Mapping, prefix: &str) {
        for entry in mapping.entries() {
            self.visit(prefix, entry.key, entry.value, Slot::Entry);
        }
    }

    fn visit(&self, prefix: &str, name: &str, value: &mut dyn Censorable, slot: Slot) {
        let path = format!("{prefix}{name}");
        match value.shape() {
            Shape::Record(record) => self.record(record, &format!("{path}{SEPARATOR}")),
            Shape::Mapping(mapping) => self.mapping(mapping, &format!("{path}{SEPARATOR}")),
            Shape::Leaf(leaf) => self.leaf(leaf, &path, slot),
        }
    }

    fn leaf(&self, leaf: &mut dyn Leaf, path: &str, slot: Slot) {
        let Some(placeholder) = self.index.lookup(path) else {
            return;
        };
        let Some(replacement) = resolve(placeholder, path, &leaf.get()) else {
            trace!(path, "leaf kept");
            return;
        };
        let outcome = match slot {
            Slot::Field => apply_field(leaf, replacement),
            Slot::Entry => apply_entry(leaf, replacement),
        };
        trace!(path, ?outcome, "leaf censored");
    }
}

#[cfg(all(test, feature = "derive"))]
mod tests {
    use std::collections::HashMap;

    use super::{censor, censor_with};
    use crate::{
        engine::schema::{Rule, WILDCARD},
        error::CensorError,
        value::{Kind, Map, Value},
        Censor,
    };

    #[derive(Censor, Debug, Clone, PartialEq, Default)]
    #[allow(non_snake_case)]
    struct Deep {
        D: String,
    }

    #[derive(Censor, Debug, Clone, PartialEq, Default)]
    #[allow(non_snake_case)]
    struct Target {
        A: String,
        B: i64,
        C: Deep,
    }

    fn target() -> Target {
        Target {
            A: "secret".into(),
            B: 42,
            C: Deep { D: "deep".into() },
        }
    }

    #[test]
    fn exact_paths_replace_only_matched_leaves() {
        let mut value = target();
        censor(&mut value, &[Rule::literal("A", "X"), Rule::literal("C/D", "X")]).unwrap();
        assert_eq!(value.A, "X");
        assert_eq!(value.B, 42);
        assert_eq!(value.C.D, "X");
    }

    #[test]
    fn wildcard_contextual_sees_paths() {
        let mut value = target();
        censor_with(&mut value, |path, old| match old {
            Value::String(_) => Value::from(path),
            Value::Int(_) => Value::Int(9999),
            other => other.clone(),
        })
        .unwrap();
        assert_eq!(value.A, "A");
        assert_eq!(value.B, 9999);
        assert_eq!(value.C.D, "C/D");
    }

    #[test]
    fn container_path_is_never_replaced() {
        let mut value = target();
        censor(&mut value, &[Rule::zero("C")]).unwrap();
        assert_eq!(value, target());
    }

    #[test]
    fn exact_keep_exempts_leaf_from_wildcard() {
        let mut value = target();
        censor(&mut value, &[Rule::zero(WILDCARD), Rule::keep("B")]).unwrap();
        assert_eq!(value.A, "");
        assert_eq!(value.B, 42);
        assert_eq!(value.C.D, "");
    }

    #[test]
    fn scalar_root_is_rejected_untouched() {
        let mut value = 5_i64;
        let err = censor(&mut value, &[Rule::zero(WILDCARD)]).unwrap_err();
        assert_eq!(err, CensorError::NotCensorable { found: Kind::Int });
        assert_eq!(value, 5);
    }

    #[test]
    fn dynamic_scalar_root_reports_its_kind() {
        let mut value = Value::from("x");
        let err = censor(&mut value, &[]).unwrap_err();
        assert_eq!(err, CensorError::NotCensorable { found: Kind::String });
    }

    #[test]
    fn map_root_is_walked() {
        let mut value = Map::new();
        value.insert("A".into(), Value::from("secret"));
        value.insert("E".into(), Value::from("keep"));
        censor(&mut value, &[Rule::zero("A")]).unwrap();
        assert_eq!(value["A"], Value::from(""));
        assert_eq!(value["E"], Value::from("keep"));
    }

    #[test]
    fn nested_maps_build_paths() {
        let mut inner = Map::new();
        inner.insert("token".into(), Value::from("abc"));
        let mut outer = Map::new();
        outer.insert("auth".into(), Value::Map(inner));
        censor(&mut outer, &[Rule::literal("auth/token", "***")]).unwrap();
        let Value::Map(inner) = &outer["auth"] else {
            panic!("auth should stay a map");
        };
        assert_eq!(inner["token"], Value::from("***"));
    }

    #[test]
    fn typed_map_root_is_rejected_untouched() {
        let mut value = HashMap::new();
        value.insert("A".to_string(), "secret".to_string());
        let err = censor(&mut value, &[Rule::zero("A")]).unwrap_err();
        assert_eq!(err, CensorError::NotCensorable { found: Kind::Map });
        assert_eq!(value["A"], "secret");
    }

    #[test]
    fn typed_map_below_root_is_walked() {
        #[derive(Censor)]
        struct Request {
            headers: HashMap<String, String>,
        }

        let mut headers = HashMap::new();
        headers.insert("token".to_string(), "abc".to_string());
        let mut request = Request { headers };
        censor(&mut request, &[Rule::literal("headers/token", "***")]).unwrap();
        assert_eq!(request.headers["token"], "***");
    }
}
