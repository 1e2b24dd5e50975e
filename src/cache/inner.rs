//! Cache Implementation
//!
//! Private counterpart of the public `Cache` handle. Owned exclusively by
//! its handle for the handle's whole lifetime; internal subsystems reach it
//! through the access bridge, never through the public surface.

use std::sync::{Arc, Weak};

use chrono::{DateTime, Utc};

use crate::error::{CacheError, Result};
use crate::system::DistributedSystemImpl;

// == Cache Impl ==
/// Implementation object behind a `Cache` handle.
#[derive(Debug)]
pub(crate) struct CacheImpl {
    /// Name of the cache
    name: String,
    /// Link to the connection this cache was created on. Weak: the cache
    /// must not keep a torn-down connection alive.
    system: Weak<DistributedSystemImpl>,
    /// Time the cache was created
    created_at: DateTime<Utc>,
}

impl CacheImpl {
    // == Constructor ==
    /// Creates the implementation state for a new cache.
    pub(crate) fn new(name: &str, system: Weak<DistributedSystemImpl>) -> Self {
        Self {
            name: name.to_string(),
            system,
            created_at: Utc::now(),
        }
    }

    // == Accessors ==
    /// Returns the cache name.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cache creation time.
    pub(crate) fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // == System ==
    /// Returns the connection this cache was created on.
    ///
    /// Fails with `InvalidHandle` if the connection has been torn down while
    /// this cache was still held.
    pub(crate) fn system(&self) -> Result<Arc<DistributedSystemImpl>> {
        self.system.upgrade().ok_or_else(|| {
            CacheError::InvalidHandle(
                "distributed system behind this cache has been disconnected".to_string(),
            )
        })
    }
}
