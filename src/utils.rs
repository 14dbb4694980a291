#[cfg(feature = "foldhash")]
pub use foldhash::fast::RandomState as DefaultHashBuilder;

#[cfg(all(feature = "ahash", not(feature = "foldhash")))]
pub use ahash::RandomState as DefaultHashBuilder;

#[cfg(all(not(feature = "ahash"), not(feature = "foldhash")))]
pub use std::collections::hash_map::RandomState as DefaultHashBuilder;
