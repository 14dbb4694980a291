use super::Map;
use crate::utils::DefaultHashBuilder;

use parking_lot::{RwLock, RwLockReadGuard};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use tracing::trace;

/// A read-only view of the contents of a [`SyncMap`]. The shared lock is held
/// until this guard is dropped, so writers will block for its lifetime.
pub type MapReadGuard<'a, K, V, S = DefaultHashBuilder> = RwLockReadGuard<'a, Map<K, V, S>>;

/// A `HashMap` guarded by a reader-writer lock.
///
/// Every operation takes the lock for its full duration. Reads (`get`,
/// `keys`, `contains_value`, ...) take the shared lock and may proceed in
/// parallel. Writes (`set`, `delete`) take the exclusive lock and block all
/// other access until they complete. The lock does not poison, so a panic in
/// one caller does not prevent others from using the map.
///
/// # Examples
/// ```
/// use xutils::map::SyncMap;
///
/// let map: SyncMap<&str, i32> = SyncMap::new();
/// map.set("a", 1);
/// map.set("b", 2);
///
/// assert_eq!(map.get("a"), 1);
/// // Absent keys yield the default value.
/// assert_eq!(map.get("c"), 0);
/// assert_eq!(map.try_get("c"), None);
///
/// map.delete("a");
/// assert!(!map.contains_key("a"));
/// ```
#[derive(Debug)]
pub struct SyncMap<K, V, S = DefaultHashBuilder> {
    inner: RwLock<Map<K, V, S>>,
}

impl<K, V> SyncMap<K, V, DefaultHashBuilder> {
    /// Create an empty `SyncMap`.
    pub fn new() -> Self {
        SyncMap {
            inner: RwLock::new(Map::new()),
        }
    }

    /// Create an empty `SyncMap` with space for at least `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        SyncMap {
            inner: RwLock::new(Map::with_capacity(capacity)),
        }
    }
}

impl<K, V, S> SyncMap<K, V, S> {
    /// Create an empty `SyncMap` which will use the given hash builder.
    pub fn with_hasher(hash_builder: S) -> Self {
        SyncMap {
            inner: RwLock::new(Map::with_hasher(hash_builder)),
        }
    }

    /// Wrap an existing `HashMap`. The map is moved in, not copied.
    pub fn from_map(map: HashMap<K, V, S>) -> Self {
        trace!(len = map.len(), "wrapping existing map");
        SyncMap {
            inner: RwLock::new(Map::from(map)),
        }
    }

    /// Consume the `SyncMap`, returning the unsynchronised `Map`.
    pub fn into_inner(self) -> Map<K, V, S> {
        self.inner.into_inner()
    }

    /// Take the shared lock and return a read-only view of the map. The view
    /// is live: it is not a copy, and it holds the lock until dropped.
    ///
    /// Prefer [`SyncMap::as_map`] if the contents need to outlive a short read.
    pub fn read(&self) -> MapReadGuard<'_, K, V, S> {
        self.inner.read()
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<K, V, S> SyncMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Insert `val` for `key`, overwriting any previous value. Takes the
    /// exclusive lock.
    pub fn set(&self, key: K, val: V) {
        let mut guard = self.inner.write();
        let replaced = guard.insert(key, val).is_some();
        trace!(replaced, len = guard.len(), "set");
    }

    /// Remove the entry for `key` if it exists. Takes the exclusive lock.
    pub fn delete<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let mut guard = self.inner.write();
        if guard.remove(key).is_some() {
            trace!(len = guard.len(), "delete");
        }
    }

    /// The value for `key`, or `V::default()` if there is no such entry.
    ///
    /// A missing key and a key holding the default value look identical
    /// through this method. Use [`SyncMap::try_get`] or
    /// [`SyncMap::contains_key`] to tell them apart.
    pub fn get<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        V: Clone + Default,
    {
        self.try_get(key).unwrap_or_default()
    }

    /// The value for `key`, or `None` if there is no such entry.
    pub fn try_get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        V: Clone,
    {
        self.inner.read().get(key).cloned()
    }

    /// All keys of the map in unspecified order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.inner.read().keys()
    }

    /// All values of the map in unspecified order.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.inner.read().values()
    }

    /// Returns `true` if the map holds an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.read().contains_key(key)
    }

    /// Returns `true` if any value is equal to `val`.
    pub fn contains_value(&self, val: &V) -> bool
    where
        V: PartialEq,
    {
        self.inner.read().contains_value(val)
    }

    /// Copy the current contents out into an unsynchronised `Map`. The copy is
    /// taken under the shared lock and does not alias the guarded map, so it
    /// may be freely mutated afterwards.
    pub fn as_map(&self) -> Map<K, V, S>
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        let guard = self.inner.read();
        trace!(len = guard.len(), "map snapshot");
        (*guard).clone()
    }
}

impl<K, V, S> Default for SyncMap<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        SyncMap {
            inner: RwLock::new(Map::default()),
        }
    }
}

impl<K, V, S> Clone for SyncMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        SyncMap {
            inner: RwLock::new((*self.inner.read()).clone()),
        }
    }
}

impl<K, V, S> From<Map<K, V, S>> for SyncMap<K, V, S> {
    fn from(map: Map<K, V, S>) -> Self {
        SyncMap {
            inner: RwLock::new(map),
        }
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for SyncMap<K, V, S> {
    fn from(map: HashMap<K, V, S>) -> Self {
        Self::from_map(map)
    }
}

impl<K, V, S> FromIterator<(K, V)> for SyncMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        SyncMap {
            inner: RwLock::new(Map::from_iter(iter)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SyncMap;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread::scope;

    #[test]
    fn test_syncmap_set_get() {
        let _ = tracing_subscriber::fmt::try_init();
        let map: SyncMap<&str, i32> = SyncMap::new();
        assert!(map.is_empty());

        map.set("a", 1);
        map.set("b", 2);
        assert_eq!(map.len(), 2);

        let k: HashSet<_> = map.keys().into_iter().collect();
        assert_eq!(k, HashSet::from(["a", "b"]));
        let mut v = map.values();
        v.sort();
        assert_eq!(v, vec![1, 2]);

        assert!(map.contains_key("a"));
        assert_eq!(map.get("a"), 1);

        // Overwrite keeps the last value.
        map.set("a", 10);
        assert_eq!(map.get("a"), 10);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_syncmap_delete() {
        let map: SyncMap<String, u64> = SyncMap::with_capacity(8);
        map.set("k".to_string(), 5);
        map.delete("k");
        assert!(!map.contains_key("k"));
        assert_eq!(map.get("k"), 0);
        assert_eq!(map.try_get("k"), None);

        // Deleting a missing key is a no-op.
        map.delete("missing");
        assert!(map.is_empty());
    }

    #[test]
    fn test_syncmap_default_value_ambiguity() {
        let map: SyncMap<u8, u8> = SyncMap::default();
        map.set(1, 0);
        // Both read as zero, only contains_key / try_get tell them apart.
        assert_eq!(map.get(&1), map.get(&2));
        assert!(map.contains_key(&1));
        assert!(!map.contains_key(&2));
        assert_eq!(map.try_get(&1), Some(0));
        assert_eq!(map.try_get(&2), None);
    }

    #[test]
    fn test_syncmap_contains_value() {
        let map: SyncMap<u32, f64> = vec![(1, 0.5), (2, 1.5)].into_iter().collect();
        assert!(map.contains_value(&1.5));
        assert!(!map.contains_value(&2.5));
    }

    #[test]
    fn test_syncmap_as_map_is_a_copy() {
        let map: SyncMap<u32, u32> = SyncMap::new();
        map.set(1, 1);

        let mut snap = map.as_map();
        snap.insert(2, 2);
        map.set(3, 3);

        assert!(snap.contains_key(&2));
        assert!(!snap.contains_key(&3));
        assert!(!map.contains_key(&2));
        assert!(map.contains_key(&3));
    }

    #[test]
    fn test_syncmap_from_map() {
        let mut inner = HashMap::new();
        inner.insert("x", 1);
        inner.insert("y", 2);
        let map = SyncMap::from_map(inner);
        assert_eq!(map.get("y"), 2);

        {
            let view = map.read();
            assert_eq!(view.len(), 2);
            assert!(view.contains_value(&1));
        }

        let out = map.into_inner().into_inner();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_syncmap_clone_is_independent() {
        let a: SyncMap<u8, u8> = SyncMap::new();
        a.set(1, 1);
        let b = a.clone();
        b.set(2, 2);
        assert!(!a.contains_key(&2));
        assert!(b.contains_key(&1));
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn test_syncmap_multithread() {
        const MAX_TARGET: u64 = 2000;
        let map: SyncMap<u64, u64> = SyncMap::new();
        map.set(0, 0);
        let done = AtomicBool::new(false);

        scope(|scope| {
            let map_ref = &map;
            let done_ref = &done;

            let readers: Vec<_> = (0..6)
                .map(|_| {
                    scope.spawn(move || {
                        let mut last_len = 0;
                        while !done_ref.load(Ordering::Acquire) {
                            let view = map_ref.read();
                            // A write is either fully visible or not at all.
                            for (k, v) in view.iter() {
                                assert_eq!(k, v);
                            }
                            assert!(view.len() >= last_len);
                            last_len = view.len();
                        }
                    })
                })
                .collect();

            let writer = scope.spawn(move || {
                for i in 1..MAX_TARGET {
                    map_ref.set(i, i);
                }
                done_ref.store(true, Ordering::Release);
            });

            writer.join().unwrap();
            for h in readers.into_iter() {
                h.join().unwrap();
            }
        });

        assert_eq!(map.len() as u64, MAX_TARGET);
        // Every write is visible to a read that starts afterwards.
        assert_eq!(map.get(&(MAX_TARGET - 1)), MAX_TARGET - 1);
    }
}
