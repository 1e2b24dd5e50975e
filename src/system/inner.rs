//! Distributed System Implementation
//!
//! Private counterpart of the public `DistributedSystem` handle. Holds the
//! real connection state; reachable from internal subsystems only through
//! the access bridge or the owning handle.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};

use crate::config::SystemConfig;
use crate::system::SystemStatus;

// == Distributed System Impl ==
/// Implementation object behind a `DistributedSystem` handle.
#[derive(Debug)]
pub(crate) struct DistributedSystemImpl {
    /// Logical name of the system this connection joined
    name: String,
    /// Locator endpoints the connection was established against
    locators: Vec<String>,
    /// Time the connection was established
    connected_at: DateTime<Utc>,
    /// Number of caches created through this connection
    caches_created: AtomicUsize,
}

impl DistributedSystemImpl {
    // == Constructor ==
    /// Creates the implementation state for a freshly established connection.
    pub(crate) fn new(config: &SystemConfig) -> Self {
        Self {
            name: config.system_name.clone(),
            locators: config.locators.clone(),
            connected_at: Utc::now(),
            caches_created: AtomicUsize::new(0),
        }
    }

    // == Accessors ==
    /// Returns the system name.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Returns the locator endpoints.
    pub(crate) fn locators(&self) -> &[String] {
        &self.locators
    }

    /// Returns the number of caches created through this connection.
    pub(crate) fn caches_created(&self) -> usize {
        self.caches_created.load(Ordering::Relaxed)
    }

    // == Record Cache Created ==
    /// Increments the created-cache counter.
    pub(crate) fn record_cache_created(&self) {
        self.caches_created.fetch_add(1, Ordering::Relaxed);
    }

    // == Status ==
    /// Builds a snapshot of the connection's state.
    pub(crate) fn status(&self) -> SystemStatus {
        SystemStatus {
            name: self.name.clone(),
            locators: self.locators.clone(),
            connected_at: self.connected_at,
            caches_created: self.caches_created(),
        }
    }
}
