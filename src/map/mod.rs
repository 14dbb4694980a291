//! Map - A `HashMap` wrapper with key and value helpers
//!
//! This module provides two wrappers over `std::collections::HashMap`:
//!
//! * [`Map`] - a bare, unsynchronised wrapper. It derefs to the inner `HashMap`
//!   so every `HashMap` method stays available, and adds a few helpers for
//!   extracting keys and values and testing membership.
//! * [`SyncMap`] - the same helpers behind a `RwLock`, with `set`, `delete` and
//!   `get` operations. This can be shared between threads by reference or
//!   inside an `Arc`.
//!
//! The free functions in this module ([`keys`], [`values`], [`contains_key`]
//! and [`contains_value`]) perform the same operations on any `HashMap` without
//! needing to wrap it first.
//!
//! Iteration order of a `HashMap` is unspecified. The `Vec`s returned by
//! `keys()` and `values()` may be in any order, may differ between calls, and
//! are not aligned with each other. Compare them as sets.

#[cfg(feature = "asynch")]
pub mod asynch;

mod sync;

pub use self::sync::{MapReadGuard, SyncMap};

use crate::utils::DefaultHashBuilder;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

/// Collect every key of `map` into a `Vec`, in unspecified order.
pub fn keys<K, V, S>(map: &HashMap<K, V, S>) -> Vec<K>
where
    K: Clone,
{
    map.keys().cloned().collect()
}

/// Collect every value of `map` into a `Vec`, in unspecified order.
pub fn values<K, V, S>(map: &HashMap<K, V, S>) -> Vec<V>
where
    V: Clone,
{
    map.values().cloned().collect()
}

/// Returns `true` if `map` holds an entry for `key`.
pub fn contains_key<K, V, S, Q>(map: &HashMap<K, V, S>, key: &Q) -> bool
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    map.contains_key(key)
}

/// Returns `true` if any value of `map` is equal to `val`. This is a linear
/// scan of the map.
pub fn contains_value<K, V, S>(map: &HashMap<K, V, S>, val: &V) -> bool
where
    V: PartialEq,
{
    map.values().any(|v| v == val)
}

/// An unsynchronised `HashMap` wrapper.
///
/// `Map` offers no locking of any kind. It is only safe to mutate from one
/// place at a time, which the borrow checker enforces through `&mut self`.
/// For shared mutation use [`SyncMap`].
///
/// # Examples
/// ```
/// use xutils::map::Map;
///
/// let mut map: Map<&str, i32> = Map::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
///
/// assert!(map.contains_key("a"));
/// assert!(map.contains_value(&2));
/// assert!(!map.contains_value(&3));
///
/// let mut keys = map.keys();
/// keys.sort();
/// assert_eq!(keys, vec!["a", "b"]);
/// ```
#[derive(Clone, Debug)]
pub struct Map<K, V, S = DefaultHashBuilder>(HashMap<K, V, S>);

impl<K, V> Map<K, V, DefaultHashBuilder> {
    /// Create an empty `Map`.
    pub fn new() -> Self {
        Map(HashMap::with_hasher(DefaultHashBuilder::default()))
    }

    /// Create an empty `Map` with space for at least `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Map(HashMap::with_capacity_and_hasher(
            capacity,
            DefaultHashBuilder::default(),
        ))
    }
}

impl<K, V, S> Map<K, V, S> {
    /// Create an empty `Map` which will use the given hash builder.
    pub fn with_hasher(hash_builder: S) -> Self {
        Map(HashMap::with_hasher(hash_builder))
    }

    /// Create an empty `Map` with space for at least `capacity` entries, using
    /// the given hash builder.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Map(HashMap::with_capacity_and_hasher(capacity, hash_builder))
    }

    /// Unwrap into the inner `HashMap`.
    pub fn into_inner(self) -> HashMap<K, V, S> {
        self.0
    }
}

impl<K, V, S> Map<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// All keys of the map in unspecified order. An empty map yields an empty
    /// `Vec`.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        keys(&self.0)
    }

    /// All values of the map in unspecified order. The order is not aligned
    /// with the output of `keys()`.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        values(&self.0)
    }

    /// Returns `true` if the map holds an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        contains_key(&self.0, key)
    }

    /// Returns `true` if any value is equal to `val`. Worst case this visits
    /// every entry.
    pub fn contains_value(&self, val: &V) -> bool
    where
        V: PartialEq,
    {
        contains_value(&self.0, val)
    }
}

impl<K, V, S> Default for Map<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Map(HashMap::default())
    }
}

impl<K, V, S> Deref for Map<K, V, S> {
    type Target = HashMap<K, V, S>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K, V, S> DerefMut for Map<K, V, S> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K, V, S> PartialEq for Map<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K, V, S> Eq for Map<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> From<HashMap<K, V, S>> for Map<K, V, S> {
    fn from(map: HashMap<K, V, S>) -> Self {
        Map(map)
    }
}

impl<K, V, S> FromIterator<(K, V)> for Map<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Map(HashMap::from_iter(iter))
    }
}

impl<K, V, S> Extend<(K, V)> for Map<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<K, V, S> IntoIterator for Map<K, V, S> {
    type Item = (K, V);
    type IntoIter = std::collections::hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
