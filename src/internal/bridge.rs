//! Internal Access Bridge
//!
//! Stateless accessors that let trusted internal subsystems reach the
//! implementation objects behind the public handles without widening the
//! public surface. Both lookups are synchronous, read-only field reads with
//! no side effects; handle validity is enforced by the borrow checker, so
//! no defensive checks are performed here.

use std::sync::Arc;

use crate::cache::{Cache, CacheImpl};
use crate::system::{ConnectionRegistry, DistributedSystemImpl};

// == Cache Bridge ==
/// Privileged accessor for implementation objects.
///
/// Uninhabited: the bridge holds no state and cannot be instantiated; it
/// exists only as a namespace for the two lookups.
#[derive(Debug)]
pub(crate) enum CacheBridge {}

impl CacheBridge {
    // == Cache Impl ==
    /// Returns the implementation object owned by a cache handle.
    ///
    /// The returned borrow is tied to the handle's lifetime: it cannot
    /// outlive the facade, and the facade's state is not mutated.
    #[inline]
    pub(crate) fn cache_impl(cache: &Cache) -> &CacheImpl {
        &cache.inner
    }

    // == System Impl ==
    /// Returns the implementation object for the current distributed-system
    /// connection, or None if no connection is established.
    ///
    /// Callers must treat None as "not connected"; no structured error is
    /// raised at this seam.
    #[inline]
    pub(crate) fn system_impl(
        registry: &ConnectionRegistry,
    ) -> Option<Arc<DistributedSystemImpl>> {
        registry.current()
    }
}
