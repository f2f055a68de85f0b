//! Capability traits that expose a value's shape to the traversal engine.
//!
//! The engine never inspects concrete types. Instead every type it can walk
//! implements [`Censorable`], which classifies the value as one of:
//!
//! - [`Shape::Record`]: declared fields, enumerated in declaration order
//!   (generated by `#[derive(Censor)]`)
//! - [`Shape::Mapping`]: string keys with dynamically-typed or uniformly-typed
//!   values (`HashMap<String, V>`, `BTreeMap<String, V>`, [`Value::Map`]).
//!   Only mappings of dynamic values are accepted as a root; typed maps are
//!   walked when nested inside one.
//! - [`Shape::Leaf`]: a single replaceable slot with a declared [`Kind`]
//!
//! Containers (records and mappings) are always walked, never replaced.
//! Lists are leaves: a `Vec<String>` is replaced as a whole.

mod leaf;
mod mapping;

use crate::value::{Kind, Value};

/// A value the engine can walk or replace.
///
/// Implemented for std scalars, strings, `Option`, `Vec`, `Box`, string-keyed
/// maps and [`Value`]. Structs and enums get an implementation from
/// `#[derive(Censor)]`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be censored",
    label = "this type does not implement `Censorable`",
    note = "use `#[derive(Censor)]` on the type definition",
    note = "or mark the field with `#[censor(skip)]` to leave it out of traversal"
)]
pub trait Censorable {
    /// Classifies this value for traversal.
    fn shape(&mut self) -> Shape<'_>;

    /// Whether a slot of this type holds values of any kind.
    fn is_dynamic() -> bool
    where
        Self: Sized,
    {
        false
    }
}

/// How the engine sees a [`Censorable`] value.
pub enum Shape<'a> {
    Record(&'a mut dyn Record),
    Mapping(&'a mut dyn Mapping),
    Leaf(&'a mut dyn Leaf),
}

impl Shape<'_> {
    #[must_use]
    pub fn is_container(&self) -> bool {
        !matches!(self, Shape::Leaf(_))
    }
}

/// A value with named fields.
pub trait Record {
    /// Returns the traversable fields in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// One named field of a [`Record`].
pub struct Field<'a> {
    pub name: &'static str,
    pub value: &'a mut dyn Censorable,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: &'a mut dyn Censorable) -> Self {
        Self { name, value }
    }
}

/// A string-keyed mapping.
pub trait Mapping {
    /// Returns every entry. Order is unspecified.
    fn entries(&mut self) -> Vec<Entry<'_>>;

    /// `true` when the values are dynamically typed, like [`crate::Map`].
    fn dynamic(&self) -> bool;
}

/// One entry of a [`Mapping`].
pub struct Entry<'a> {
    pub key: &'a str,
    pub value: &'a mut dyn Censorable,
}

/// A single replaceable slot.
///
/// `put` is only ever called with values the engine has already matched
/// against [`Leaf::declared`] (or the current value's kind for mapping
/// entries); it returns `false` when the value still does not fit, for
/// example an `Int` that overflows an `i8` slot.
pub trait Leaf {
    /// The slot's declared type. [`Kind::Any`] for dynamically-typed slots.
    fn declared(&self) -> Kind;
    /// Snapshot of the current value.
    fn get(&self) -> Value;
    /// Stores `value`, returning `false` if it does not fit the slot.
    fn put(&mut self, value: Value) -> bool;
    /// Resets the slot to the zero value of its declared type.
    fn clear(&mut self);
}

impl<T> Censorable for Box<T>
where
    T: Censorable + ?Sized,
{
    fn shape(&mut self) -> Shape<'_> {
        (**self).shape()
    }
}
