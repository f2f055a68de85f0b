//! Censorship rules and the per-call path index built from them.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{error::Result, mask::Mask, shape::Censorable, value::Value};

/// Rule path that matches every leaf without an exact rule.
pub const WILDCARD: &str = "*";

/// Separator between ancestor names in a rule path, e.g. `"Outer/Inner"`.
///
/// Names are joined verbatim: a field or key that itself contains `/` yields
/// a path indistinguishable from a nested one.
pub const SEPARATOR: char = '/';

/// Transform computed from the current leaf value alone.
pub type PureFn = dyn Fn(&Value) -> Value + Send + Sync;

/// Transform computed from the full matched path and the current leaf value.
pub type ContextualFn = dyn Fn(&str, &Value) -> Value + Send + Sync;

/// What a matched leaf is replaced with.
#[derive(Clone)]
pub enum Placeholder {
    /// A fixed replacement. `Value::Null` zeroes the leaf.
    Literal(Value),
    /// Replacement derived from the old value.
    Pure(Arc<PureFn>),
    /// Replacement derived from the matched path and the old value.
    Contextual(Arc<ContextualFn>),
    /// No replacement: the leaf is left untouched.
    ///
    /// An exact-path `Keep` rule exempts a leaf from the wildcard rule.
    Keep,
}

impl fmt::Debug for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Placeholder::Pure(_) => f.write_str("Pure(<fn>)"),
            Placeholder::Contextual(_) => f.write_str("Contextual(<fn>)"),
            Placeholder::Keep => f.write_str("Keep"),
        }
    }
}

/// A path paired with its placeholder.
#[derive(Clone, Debug)]
pub struct Rule {
    pub path: String,
    pub placeholder: Placeholder,
}

impl Rule {
    pub fn new(path: impl Into<String>, placeholder: Placeholder) -> Self {
        Self {
            path: path.into(),
            placeholder,
        }
    }

    /// Resets the leaf at `path` to its zero value.
    pub fn zero(path: impl Into<String>) -> Self {
        Self::new(path, Placeholder::Literal(Value::Null))
    }

    /// Replaces the leaf at `path` with `value`.
    pub fn literal(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(path, Placeholder::Literal(value.into()))
    }

    /// Replaces the leaf at `path` with `transform(old_value)`.
    pub fn function<F>(path: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self::new(path, Placeholder::Pure(Arc::new(transform)))
    }

    /// Replaces the leaf at `path` with `transform(matched_path, old_value)`.
    pub fn contextual<F>(path: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&str, &Value) -> Value + Send + Sync + 'static,
    {
        Self::new(path, Placeholder::Contextual(Arc::new(transform)))
    }

    /// Leaves the leaf at `path` untouched.
    pub fn keep(path: impl Into<String>) -> Self {
        Self::new(path, Placeholder::Keep)
    }

    /// Masks the string leaf at `path`. Non-string leaves are zeroed.
    pub fn masked(path: impl Into<String>, mask: Mask) -> Self {
        Self::function(path, move |value| mask.transform(value))
    }
}

/// An ordered list of rules. Later rules win over earlier ones on the same path.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    rules: Vec<Rule>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule, builder style.
    #[must_use]
    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Censors `target` in place with this schema.
    pub fn apply<T>(&self, target: &mut T) -> Result<()>
    where
        T: Censorable + ?Sized,
    {
        super::censor(target, &self.rules)
    }
}

impl From<Vec<Rule>> for Schema {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<Rule> for Schema {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for Schema {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

/// Rules compiled into a path lookup.
///
/// Built fresh for every call and discarded afterwards.
#[derive(Debug)]
pub struct SchemaIndex<'r> {
    entries: HashMap<&'r str, &'r Placeholder>,
}

impl<'r> SchemaIndex<'r> {
    /// Indexes `rules` by path. On duplicate paths the last rule wins.
    pub fn compile(rules: &'r [Rule]) -> Self {
        let mut entries = HashMap::with_capacity(rules.len());
        for rule in rules {
            entries.insert(rule.path.as_str(), &rule.placeholder);
        }
        Self { entries }
    }

    /// Returns the placeholder registered for exactly `path`.
    pub fn exact(&self, path: &str) -> Option<&'r Placeholder> {
        self.entries.get(path).copied()
    }

    /// Returns the exact match for `path`, falling back to the wildcard rule.
    pub fn lookup(&self, path: &str) -> Option<&'r Placeholder> {
        self.exact(path).or_else(|| self.exact(WILDCARD))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
