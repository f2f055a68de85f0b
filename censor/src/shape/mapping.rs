//! `Mapping` implementations for string-keyed std maps.
//!
//! Only the values are walked; keys are never censored. A map is dynamic
//! when its value type is, so `BTreeMap<String, Value>` can be a root and
//! `HashMap<String, String>` cannot.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use super::{Censorable, Entry, Mapping, Shape};

impl<V, S> Mapping for HashMap<String, V, S>
where
    V: Censorable,
{
    fn entries(&mut self) -> Vec<Entry<'_>> {
        self.iter_mut()
            .map(|(key, value)| Entry {
                key: key.as_str(),
                value,
            })
            .collect()
    }

    fn dynamic(&self) -> bool {
        V::is_dynamic()
    }
}

impl<V, S> Censorable for HashMap<String, V, S>
where
    V: Censorable,
    S: BuildHasher,
{
    fn shape(&mut self) -> Shape<'_> {
        Shape::Mapping(self)
    }
}

impl<V> Mapping for BTreeMap<String, V>
where
    V: Censorable,
{
    fn entries(&mut self) -> Vec<Entry<'_>> {
        self.iter_mut()
            .map(|(key, value)| Entry {
                key: key.as_str(),
                value,
            })
            .collect()
    }

    fn dynamic(&self) -> bool {
        V::is_dynamic()
    }
}

impl<V> Censorable for BTreeMap<String, V>
where
    V: Censorable,
{
    fn shape(&mut self) -> Shape<'_> {
        Shape::Mapping(self)
    }
}
