//! Cache Module
//!
//! Provides the public cache handle and its private implementation.

mod handle;
mod inner;


// Re-export public types
pub use handle::{Cache, CacheStatus};

pub(crate) use inner::CacheImpl;

// == Public Constants ==
/// Maximum allowed cache name length in bytes
pub const MAX_CACHE_NAME_LENGTH: usize = 128;
