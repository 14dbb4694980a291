//! SyncMap - An async locked `HashMap` wrapper
//!
//! This has the same contract as [`crate::map::SyncMap`], but waiting for the
//! lock suspends the task rather than blocking the thread. For more, see
//! [`crate::map::SyncMap`].

use super::Map;
use crate::utils::DefaultHashBuilder;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::trace;

/// A read-only view of an async [`SyncMap`], holding the shared lock until
/// dropped.
pub type MapReadGuard<'a, K, V, S = DefaultHashBuilder> = RwLockReadGuard<'a, Map<K, V, S>>;

/// A `HashMap` guarded by an async reader-writer lock.
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

    /// Take the shared lock and return a live read-only view of the map.
    pub async fn read<'x>(&'x self) -> MapReadGuard<'x, K, V, S> {
        self.inner.read().await
    }

    /// Number of entries in the map.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Returns `true` if the map holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl<K, V, S> SyncMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Insert `val` for `key`, overwriting any previous value.
    pub async fn set(&self, key: K, val: V) {
        let mut guard = self.inner.write().await;
        let replaced = guard.insert(key, val).is_some();
        trace!(replaced, len = guard.len(), "set");
    }

    /// Remove the entry for `key` if it exists.
    pub async fn delete<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let mut guard = self.inner.write().await;
        if guard.remove(key).is_some() {
            trace!(len = guard.len(), "delete");
        }
    }

    /// The value for `key`, or `V::default()` if there is no such entry.
    pub async fn get<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        V: Clone + Default,
    {
        self.try_get(key).await.unwrap_or_default()
    }

    /// The value for `key`, or `None` if there is no such entry.
    pub async fn try_get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        V: Clone,
    {
        self.inner.read().await.get(key).cloned()
    }

    /// All keys of the map in unspecified order.
    pub async fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.inner.read().await.keys()
    }

    /// All values of the map in unspecified order.
    pub async fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.inner.read().await.values()
    }

    /// Returns `true` if the map holds an entry for `key`.
    pub async fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.read().await.contains_key(key)
    }

    /// Returns `true` if any value is equal to `val`.
    pub async fn contains_value(&self, val: &V) -> bool
    where
        V: PartialEq,
    {
        self.inner.read().await.contains_value(val)
    }

    /// Copy the current contents out into an unsynchronised `Map`.
    pub async fn as_map(&self) -> Map<K, V, S>
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        let guard = self.inner.read().await;
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

impl<K, V, S> SyncMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    /// Copy the current contents into a new, independent `SyncMap`.
    ///
    /// This stands in for `Clone`, which cannot wait on the async lock.
    pub async fn cloned(&self) -> Self {
        SyncMap {
            inner: RwLock::new((*self.inner.read().await).clone()),
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
    use std::sync::Arc;

    #[tokio::test]
    async fn test_syncmap_basic_write() {
        let map: SyncMap<usize, usize> = SyncMap::new();
        assert!(map.is_empty().await);

        map.set(10, 10).await;
        map.set(15, 15).await;

        assert!(map.contains_key(&10).await);
        assert!(map.contains_key(&15).await);
        assert!(!map.contains_key(&20).await);
        assert_eq!(map.get(&10).await, 10);

        map.set(10, 11).await;
        assert_eq!(map.get(&10).await, 11);

        map.delete(&10).await;
        assert!(!map.contains_key(&10).await);
        assert_eq!(map.get(&10).await, 0);
        assert_eq!(map.try_get(&10).await, None);
        assert_eq!(map.len().await, 1);
    }

    #[tokio::test]
    async fn test_syncmap_keys_values() {
        let map: SyncMap<&str, i32> = SyncMap::with_capacity(2);
        map.set("a", 1).await;
        map.set("b", 2).await;

        let k: HashSet<_> = map.keys().await.into_iter().collect();
        assert_eq!(k, HashSet::from(["a", "b"]));
        let mut v = map.values().await;
        v.sort();
        assert_eq!(v, vec![1, 2]);
        assert!(map.contains_value(&2).await);
        assert!(!map.contains_value(&3).await);
    }

    #[tokio::test]
    async fn test_syncmap_snapshot_and_view() {
        let map: SyncMap<usize, usize> = vec![(1, 1), (2, 2)].into_iter().collect();
        let mut snap = map.as_map().await;
        snap.insert(3, 3);
        assert!(!map.contains_key(&3).await);

        let view = map.read().await;
        assert_eq!(view.len(), 2);
    }

    #[tokio::test]
    async fn test_syncmap_from_hashmap_and_cloned() {
        let mut inner = HashMap::new();
        inner.insert("x", 1);
        let a: SyncMap<&str, i32, _> = SyncMap::from(inner);
        assert_eq!(a.get("x").await, 1);

        let b = a.cloned().await;
        b.set("y", 2).await;
        a.delete("x").await;

        assert!(!a.contains_key("y").await);
        assert_eq!(b.get("x").await, 1);
        assert_eq!(b.len().await, 2);
        assert!(a.is_empty().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_syncmap_concurrent_tasks() {
        let map: Arc<SyncMap<usize, usize>> = Arc::new(SyncMap::new());

        let writers: Vec<_> = (0..4)
            .map(|t| {
                let map = map.clone();
                tokio::spawn(async move {
                    for i in 0..250 {
                        map.set(t * 1000 + i, i).await;
                    }
                })
            })
            .collect();

        for w in writers {
            w.await.unwrap();
        }

        assert_eq!(map.len().await, 1000);
        assert_eq!(map.get(&3249).await, 249);
    }
}
