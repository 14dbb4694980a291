use super::{index_map, Number, Slice};
use crate::map::Map;

use parking_lot::{RwLock, RwLockReadGuard};
use std::iter::FromIterator;
use tracing::trace;

/// A read-only view of the contents of a [`SyncSlice`], holding the shared
/// lock until dropped.
pub type SliceReadGuard<'a, T> = RwLockReadGuard<'a, Slice<T>>;

/// A numeric `Vec` guarded by a reader-writer lock.
///
/// Reads (`max`, `sum`, `contains`, ...) take the shared lock for the whole
/// scan and may run in parallel. `append` takes the exclusive lock.
///
/// # Examples
/// ```
/// use xutils::slice::SyncSlice;
///
/// let s: SyncSlice<i32> = SyncSlice::new();
/// s.append(2);
/// s.append(-7);
/// s.append(4);
///
/// assert_eq!(s.sum(), -1);
/// assert_eq!(s.min(), -7);
/// assert_eq!(s.map().get(&2), Some(&-7));
/// ```
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

    /// Push `val` onto the end. Takes the exclusive lock.
    pub fn append(&self, val: T) {
        let mut guard = self.inner.write();
        guard.push(val);
        trace!(len = guard.len(), "append");
    }

    /// Take the shared lock and return a live read-only view of the contents.
    pub fn read(&self) -> SliceReadGuard<'_, T> {
        self.inner.read()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copy the current contents out into an unsynchronised `Slice`. The copy
    /// does not alias the guarded `Vec`.
    pub fn as_slice(&self) -> Slice<T>
    where
        T: Clone,
    {
        let guard = self.inner.read();
        trace!(len = guard.len(), "slice snapshot");
        (*guard).clone()
    }
}

impl<T: Number> SyncSlice<T> {
    /// The largest element, seeded from zero. See [`crate::slice::max`].
    pub fn max(&self) -> T {
        self.inner.read().max()
    }

    /// The smallest element, seeded from zero. See [`crate::slice::min`].
    pub fn min(&self) -> T {
        self.inner.read().min()
    }

    /// The largest element, or `None` if empty.
    pub fn try_max(&self) -> Option<T> {
        self.inner.read().try_max()
    }

    /// The smallest element, or `None` if empty.
    pub fn try_min(&self) -> Option<T> {
        self.inner.read().try_min()
    }

    /// The sum of all elements.
    pub fn sum(&self) -> T {
        self.inner.read().sum()
    }

    /// Returns `true` if any element is equal to `n`.
    pub fn contains(&self, n: &T) -> bool {
        self.inner.read().contains(n)
    }

    /// A new `Map` from 1-based position to element, built under the shared
    /// lock.
    pub fn map(&self) -> Map<usize, T> {
        index_map(&self.inner.read())
    }
}

impl<T: Clone> Clone for SyncSlice<T> {
    fn clone(&self) -> Self {
        SyncSlice {
            inner: RwLock::new((*self.inner.read()).clone()),
        }
    }
}

impl<T> From<Slice<T>> for SyncSlice<T> {
    fn from(s: Slice<T>) -> Self {
        SyncSlice {
            inner: RwLock::new(s),
        }
    }
}

impl<T> From<Vec<T>> for SyncSlice<T> {
    fn from(v: Vec<T>) -> Self {
        Self::from_slice(v)
    }
}

impl<T> FromIterator<T> for SyncSlice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SyncSlice {
            inner: RwLock::new(Slice::from_iter(iter)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SyncSlice;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread::scope;

    #[test]
    fn test_syncslice_append() {
        let _ = tracing_subscriber::fmt::try_init();
        let s: SyncSlice<u32> = SyncSlice::with_capacity(4);
        assert!(s.is_empty());

        s.append(3);
        s.append(8);
        s.append(1);

        assert_eq!(s.len(), 3);
        assert_eq!(s.max(), 8);
        assert_eq!(s.min(), 0);
        assert_eq!(s.try_min(), Some(1));
        assert_eq!(s.sum(), 12);
        assert!(s.contains(&8));
        assert!(!s.contains(&2));
    }

    #[test]
    fn test_syncslice_all_negative() {
        let s = SyncSlice::from_slice(vec![-4i64, -2, -8]);
        assert_eq!(s.max(), 0);
        assert_eq!(s.try_max(), Some(-2));
        assert_eq!(s.min(), -8);
    }

    #[test]
    fn test_syncslice_map() {
        let s: SyncSlice<f32> = vec![0.5, 1.5, 2.5].into_iter().collect();
        let m = s.map();
        assert_eq!(m.len(), 3);
        for (k, v) in m.iter() {
            assert_eq!(s.read()[*k - 1], *v);
        }
    }

    #[test]
    fn test_syncslice_as_slice_is_a_copy() {
        let s = SyncSlice::from(vec![1, 2]);
        let mut snap = s.as_slice();
        snap.push(3);
        s.append(4);

        assert_eq!(*snap, vec![1, 2, 3]);
        assert_eq!(*s.into_inner(), vec![1, 2, 4]);
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn test_syncslice_multithread() {
        const MAX_TARGET: u64 = 2000;
        let s: SyncSlice<u64> = SyncSlice::new();
        let done = AtomicBool::new(false);

        scope(|scope| {
            let s_ref = &s;
            let done_ref = &done;

            let readers: Vec<_> = (0..6)
                .map(|_| {
                    scope.spawn(move || {
                        let mut last_len = 0;
                        while !done_ref.load(Ordering::Acquire) {
                            let view = s_ref.read();
                            // Appends are sequential, so the contents are 0..len.
                            let n = view.len() as u64;
                            assert_eq!(view.sum(), n * n.saturating_sub(1) / 2);
                            assert!(view.len() >= last_len);
                            last_len = view.len();
                        }
                    })
                })
                .collect();

            let writer = scope.spawn(move || {
                for i in 0..MAX_TARGET {
                    s_ref.append(i);
                }
                done_ref.store(true, Ordering::Release);
            });

            writer.join().unwrap();
            for h in readers.into_iter() {
                h.join().unwrap();
            }
        });

        assert_eq!(s.len() as u64, MAX_TARGET);
        assert_eq!(s.max(), MAX_TARGET - 1);
    }
}
