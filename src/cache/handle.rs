//! Cache Handle
//!
//! Public facade for a cache. Exclusively owns its implementation object;
//! the two are created together by `DistributedSystem::create_cache` and
//! destroyed together when the handle is dropped or closed.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::cache::CacheImpl;
use crate::error::Result;
use crate::internal::diagnostics;

// == Cache ==
/// Public handle for a cache bound to a distributed-system connection.
///
/// Opaque to users; the implementation object is reachable by internal
/// subsystems only through the crate-private access bridge.
#[derive(Debug)]
pub struct Cache {
    /// Private implementation, owned for the handle's whole lifetime
    pub(crate) inner: CacheImpl,
}

// == Cache Status ==
/// Serializable snapshot of a cache's state.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    /// Name of the cache
    pub name: String,
    /// Time the cache was created
    pub created_at: DateTime<Utc>,
    /// Name of the backing system, or None once it has been disconnected
    pub system_name: Option<String>,
}

impl Cache {
    // == Constructor ==
    /// Wraps an implementation object in its owning handle.
    pub(crate) fn new(inner: CacheImpl) -> Self {
        Self { inner }
    }

    // == Name ==
    /// Returns the cache name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    // == Created At ==
    /// Returns the time the cache was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at()
    }

    // == System Name ==
    /// Returns the name of the distributed system this cache belongs to.
    ///
    /// Fails with `InvalidHandle` if the connection has been torn down.
    pub fn system_name(&self) -> Result<String> {
        Ok(self.inner.system()?.name().to_string())
    }

    // == Status ==
    /// Returns a snapshot of the cache's state, collected by the internal
    /// diagnostics subsystem.
    pub fn status(&self) -> CacheStatus {
        diagnostics::cache_status(self)
    }

    // == Close ==
    /// Closes the cache, consuming the handle.
    ///
    /// The implementation object is dropped with the handle; no reference to
    /// it can survive this call.
    pub fn close(self) {
        info!("Closed cache '{}'", self.inner.name());
    }
}
