//! Slice - A numeric `Vec` wrapper with aggregate helpers
//!
//! This module provides two wrappers over `Vec<T>` for any primitive numeric
//! `T` (see [`Number`]):
//!
//! * [`Slice`] - a bare, unsynchronised wrapper that derefs to the inner `Vec`.
//! * [`SyncSlice`] - the same helpers behind a `RwLock`, with an `append`
//!   operation.
//!
//! The free functions ([`max`], [`min`], [`sum`], [`contains`] and
//! [`make_range`]) work directly on any slice.
//!
//! # Zero seeded extrema
//!
//! [`max`] and [`min`] start from `T::ZERO` rather than from the first element.
//! An empty input yields zero, but so does an input where every element is
//! negative (for `max`) or every element is positive (for `min`):
//!
//! ```
//! use xutils::slice;
//!
//! assert_eq!(slice::max(&[-3, -1, -2]), 0);
//! assert_eq!(slice::min(&[3, 1, 2]), 0);
//! assert_eq!(slice::max(&[-3, 4, -2]), 4);
//! ```
//!
//! Use [`try_max`] and [`try_min`] for the true extremum.

#[cfg(feature = "asynch")]
pub mod asynch;

mod number;
mod sync;

pub use self::number::Number;
pub use self::sync::{SliceReadGuard, SyncSlice};

use crate::map::Map;

use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};

/// The largest element, seeded from `T::ZERO`. Returns zero for an empty
/// slice, and for a slice with no element above zero.
pub fn max<T: Number>(slice: &[T]) -> T {
    slice
        .iter()
        .fold(T::ZERO, |acc, &v| if v > acc { v } else { acc })
}

/// The smallest element, seeded from `T::ZERO`. Returns zero for an empty
/// slice, and for a slice with no element below zero.
pub fn min<T: Number>(slice: &[T]) -> T {
    slice
        .iter()
        .fold(T::ZERO, |acc, &v| if v < acc { v } else { acc })
}

/// The largest element, or `None` if the slice is empty.
pub fn try_max<T: Number>(slice: &[T]) -> Option<T> {
    slice
        .iter()
        .copied()
        .reduce(|acc, v| if v > acc { v } else { acc })
}

/// The smallest element, or `None` if the slice is empty.
pub fn try_min<T: Number>(slice: &[T]) -> Option<T> {
    slice
        .iter()
        .copied()
        .reduce(|acc, v| if v < acc { v } else { acc })
}

/// The sum of all elements. Zero for an empty slice.
///
/// Integer overflow behaves as `+` does: it panics in debug builds.
pub fn sum<T: Number>(slice: &[T]) -> T {
    slice.iter().fold(T::ZERO, |acc, &v| acc + v)
}

/// Returns `true` if any element is equal to `n`.
pub fn contains<T: PartialEq>(slice: &[T], n: &T) -> bool {
    slice.iter().any(|v| v == n)
}

/// Every value from `low` to `high` inclusive, ascending, stepping by one.
///
/// The result holds `high - low + 1` values (rounded down for floats). If
/// `high < low`, or either bound is NaN or infinite, the result is empty.
/// Element `i` is computed as `low + i`, so float ranges do not accumulate
/// rounding error. Above the exact integer range of a float type, adjacent
/// values may round to the same number.
///
/// # Panics
///
/// Panics if the range holds more values than can be allocated, for example
/// `make_range(0u64, u64::MAX - 1)` on a 64 bit target.
///
/// ```
/// use xutils::slice::make_range;
///
/// assert_eq!(*make_range(1, 4).as_slice(), vec![1, 2, 3, 4]);
/// assert_eq!(*make_range(5, 5).as_slice(), vec![5]);
/// assert!(make_range(5, 4).is_empty());
/// ```
pub fn make_range<T: Number>(low: T, high: T) -> SyncSlice<T> {
    let len = match T::range_len(low, high) {
        Some(len) => len,
        None => return SyncSlice::new(),
    };

    let res: Vec<T> = (0..len).map(|i| T::offset(low, i)).collect();
    SyncSlice::from_slice(res)
}

/// Pair each element with its 1-based position.
pub(crate) fn index_map<T: Number>(slice: &[T]) -> Map<usize, T> {
    slice
        .iter()
        .copied()
        .enumerate()
        .map(|(i, v)| (i + 1, v))
        .collect()
}

/// An unsynchronised numeric `Vec` wrapper.
///
/// `Slice` offers no locking. For shared mutation use [`SyncSlice`].
///
/// # Examples
/// ```
/// use xutils::slice::Slice;
///
/// let s = Slice::from(vec![3, 1, 4, 1, 5]);
/// assert_eq!(s.max(), 5);
/// assert_eq!(s.sum(), 14);
/// assert!(s.contains(&4));
///
/// let m = s.map();
/// assert_eq!(m.len(), 5);
/// assert_eq!(m[&1], 3);
/// assert_eq!(m[&5], 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slice<T>(Vec<T>);

impl<T> Slice<T> {
    /// Create an empty `Slice`.
    pub fn new() -> Self {
        Slice(Vec::new())
    }

    /// Create an empty `Slice` with space for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Slice(Vec::with_capacity(capacity))
    }

    /// Unwrap into the inner `Vec`.
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T: Number> Slice<T> {
    /// The largest element, seeded from zero. See the module docs.
    pub fn max(&self) -> T {
        max(&self.0)
    }

    /// The smallest element, seeded from zero. See the module docs.
    pub fn min(&self) -> T {
        min(&self.0)
    }

    /// The largest element, or `None` if empty.
    pub fn try_max(&self) -> Option<T> {
        try_max(&self.0)
    }

    /// The smallest element, or `None` if empty.
    pub fn try_min(&self) -> Option<T> {
        try_min(&self.0)
    }

    /// The sum of all elements.
    pub fn sum(&self) -> T {
        sum(&self.0)
    }

    /// Returns `true` if any element is equal to `n`.
    pub fn contains(&self, n: &T) -> bool {
        contains(&self.0, n)
    }

    /// A new `Map` where key `i + 1` holds the element at index `i`. The map
    /// owns copies of the elements.
    pub fn map(&self) -> Map<usize, T> {
        index_map(&self.0)
    }
}

impl<T> Deref for Slice<T> {
    type Target = Vec<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slice<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for Slice<T> {
    fn from(v: Vec<T>) -> Self {
        Slice(v)
    }
}

impl<T> FromIterator<T> for Slice<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Slice(Vec::from_iter(iter))
    }
}

impl<T> Extend<T> for Slice<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl<T> IntoIterator for Slice<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
