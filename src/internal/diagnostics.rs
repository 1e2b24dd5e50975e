//! Diagnostics Collector
//!
//! Trusted internal subsystem that inspects implementation state. Reaches
//! across the facade boundary exclusively through the access bridge; never
//! through the public surface.

use crate::cache::{Cache, CacheStatus};
use crate::internal::CacheBridge;
use crate::system::{ConnectionRegistry, SystemStatus};

// == Cache Status ==
/// Builds a status snapshot for a cache from its implementation state.
pub(crate) fn cache_status(cache: &Cache) -> CacheStatus {
    let inner = CacheBridge::cache_impl(cache);

    CacheStatus {
        name: inner.name().to_string(),
        created_at: inner.created_at(),
        system_name: inner.system().ok().map(|s| s.name().to_string()),
    }
}

// == Connection Status ==
/// Builds a status snapshot for the current connection, or None if no
/// connection is established.
pub(crate) fn connection_status(registry: &ConnectionRegistry) -> Option<SystemStatus> {
    CacheBridge::system_impl(registry).map(|inner| inner.status())
}
