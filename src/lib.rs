//! Xutils - Lockable map and slice wrappers
//!
//! This crate wraps the two most common std containers, `HashMap` and `Vec`,
//! with small helpers that are otherwise rewritten in every project: key and
//! value extraction, membership tests, and numeric aggregates such as max, min
//! and sum.
//!
//! Each container comes in two forms:
//!
//! * An unsynchronised wrapper ([`map::Map`], [`slice::Slice`]) that derefs to
//!   the inner container. It has no locking and is only safe to mutate from one
//!   place at a time.
//! * A synchronised wrapper ([`map::SyncMap`], [`slice::SyncSlice`]) that
//!   guards the container with a reader-writer lock. Readers proceed in
//!   parallel, writers are exclusive. Every operation holds the lock for its
//!   whole duration, so a reader never sees a partial write.
//!
//! Free functions over plain `HashMap`s and slices are also provided, for when
//! a wrapper is not wanted.
//!
//! Writers do block readers. These wrappers fit best where the lock is taken,
//! the data read or changed, and the lock dropped immediately.
//!
//! # Features
//!
//! * `asynch` - async variants of the synchronised wrappers using tokio locks
//! * `foldhash` - use the foldhash crate as the default map hasher
//! * `ahash` - use the cpu accelerated ahash crate as the default map hasher
//!
//! By default `asynch` and `foldhash` are enabled. With neither hasher feature
//! the std `RandomState` is used.

#![warn(unused_extern_crates)]
#![warn(missing_docs)]

pub mod map;
pub mod slice;

mod utils;

pub use map::{Map, SyncMap};
pub use slice::{make_range, Number, Slice, SyncSlice};
pub use utils::DefaultHashBuilder;
