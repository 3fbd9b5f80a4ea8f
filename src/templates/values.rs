//! Substitution Values
//!
//! The lookup seam between a template and whatever supplies its field values.

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use rustc_hash::FxHashMap;

/// Default owned substitution map.
pub type SubstitutionMap = FxHashMap<String, String>;

/// Source of placeholder values for [`render`](crate::templates::render).
///
/// Implemented for hash maps (any hasher), ordered maps and pair slices so callers can pass
/// whatever they already hold. For pair lists the first matching name wins.
pub trait Values {
    /// Return the replacement for `name`, or `None` if the placeholder should stay verbatim.
    fn value(&self, name: &str) -> Option<&str>;

    /// Whether this source supplies no values at all.
    fn is_empty(&self) -> bool;
}

impl<K, V, S> Values for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }

    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<K, V> Values for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(AsRef::as_ref)
    }

    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<K, V> Values for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn value(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|(_, value)| value.as_ref())
    }

    fn is_empty(&self) -> bool {
        <[(K, V)]>::is_empty(self)
    }
}

impl<K, V, const N: usize> Values for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn value(&self, name: &str) -> Option<&str> {
        self.as_slice().value(name)
    }

    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<K, V> Values for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn value(&self, name: &str) -> Option<&str> {
        self.as_slice().value(name)
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}
