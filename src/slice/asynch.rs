//! SyncSlice - An async locked numeric `Vec` wrapper
//!
//! For more, see [`crate::slice::SyncSlice`]

use super::{index_map, Number, Slice};
use crate::map::Map;

use std::iter::FromIterator;
use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::trace;

/// A read-only view of an async [`SyncSlice`], holding the shared lock until
/// dropped.
pub type SliceReadGuard<'a, T> = RwLockReadGuard<'a, Slice<T>>;

/// A numeric `Vec` guarded by an async reader-writer lock.
#[derive(Debug, Default)]
pub struct SyncSlice<T> {
    inner: RwLock<Slice<T>>,
}

impl<T> SyncSlice<T> {
    /// Create an empty `SyncSlice`.
    pub fn new() -> Self {
        SyncSlice {
            inner: RwLock::new(Slice::new()),
        }
    }

    /// Create an empty `SyncSlice` with space for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        SyncSlice {
            inner: RwLock::new(Slice::with_capacity(capacity)),
        }
    }

    /// Wrap an existing `Vec`. The `Vec` is moved in, not copied.
    pub fn from_slice(v: Vec<T>) -> Self {
        trace!(len = v.len(), "wrapping existing slice");
        SyncSlice {
            inner: RwLock::new(Slice::from(v)),
        }
    }

    /// Consume the `SyncSlice`, returning the unsynchronised `Slice`.
    pub fn into_inner(self) -> Slice<T> {
        self.inner.into_inner()
    }

    /// Push `val` onto the end.
    pub async fn append(&self, val: T) {
        let mut guard = self.inner.write().await;
        guard.push(val);
        trace!(len = guard.len(), "append");
    }

    /// Take the shared lock and return a live read-only view of the contents.
    pub async fn read<'x>(&'x self) -> SliceReadGuard<'x, T> {
        self.inner.read().await
    }

    /// Number of elements.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Returns `true` if there are no elements.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Copy the current contents out into an unsynchronised `Slice`.
    pub async fn as_slice(&self) -> Slice<T>
    where
        T: Clone,
    {
        let guard = self.inner.read().await;
        trace!(len = guard.len(), "slice snapshot");
        (*guard).clone()
    }
}

impl<T: Number> SyncSlice<T> {
    /// The largest element, seeded from zero.
    pub async fn max(&self) -> T {
        self.inner.read().await.max()
    }

    /// The smallest element, seeded from zero.
    pub async fn min(&self) -> T {
        self.inner.read().await.min()
    }

    /// The largest element, or `None` if empty.
    pub async fn try_max(&self) -> Option<T> {
        self.inner.read().await.try_max()
    }

    /// The smallest element, or `None` if empty.
    pub async fn try_min(&self) -> Option<T> {
        self.inner.read().await.try_min()
    }

    /// The sum of all elements.
    pub async fn sum(&self) -> T {
        self.inner.read().await.sum()
    }

    /// Returns `true` if any element is equal to `n`.
    pub async fn contains(&self, n: &T) -> bool {
        self.inner.read().await.contains(n)
    }

    /// A new `Map` from 1-based position to element.
    pub async fn map(&self) -> Map<usize, T> {
        index_map(&self.inner.read().await)
    }
}

impl<T: Clone> SyncSlice<T> {
    /// Copy the current contents into a new, independent `SyncSlice`.
    ///
    /// This stands in for `Clone`, which cannot wait on the async lock.
    pub async fn cloned(&self) -> Self {
        SyncSlice {
            inner: RwLock::new((*self.inner.read().await).clone()),
        }
    }
}

impl<T> From<Vec<T>> for SyncSlice<T> {
    fn from(v: Vec<T>) -> Self {
        Self::from_slice(v)
    }
}

impl<T> From<Slice<T>> for SyncSlice<T> {
    fn from(s: Slice<T>) -> Self {
        SyncSlice {
            inner: RwLock::new(s),
        }
    }
}

impl<T> FromIterator<T> for SyncSlice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SyncSlice {
            inner: RwLock::new(Slice::from_iter(iter)),
        }
    }
}
