//! Distributed System Handle
//!
//! Public facade for a distributed-system connection. Hides the
//! implementation object; sanctioned operations only.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::cache::{Cache, CacheImpl, MAX_CACHE_NAME_LENGTH};
use crate::config::SystemConfig;
use crate::error::{CacheError, Result};
use crate::system::{ConnectionRegistry, DistributedSystemImpl};

// == Distributed System ==
/// Public handle for an established distributed-system connection.
///
/// Created by [`DistributedSystem::connect`], which also installs the
/// connection into the [`ConnectionRegistry`]. Consumed by
/// [`DistributedSystem::disconnect`], which clears the registry slot.
#[derive(Debug)]
pub struct DistributedSystem {
    /// Private implementation; shared with the registry, reachable by
    /// internal subsystems through the access bridge
    pub(crate) inner: Arc<DistributedSystemImpl>,
}

// == System Status ==
/// Serializable snapshot of a connection's state.
#[derive(Debug, Clone, Serialize)]
pub struct SystemStatus {
    /// Logical name of the distributed system
    pub name: String,
    /// Locator endpoints the connection was established against
    pub locators: Vec<String>,
    /// Time the connection was established
    pub connected_at: DateTime<Utc>,
    /// Number of caches created through this connection
    pub caches_created: usize,
}

impl DistributedSystem {
    // == Connect ==
    /// Establishes a connection to the distributed system and installs it
    /// into the registry.
    ///
    /// Fails with `InvalidConfig` if the configuration is invalid, and with
    /// `AlreadyConnected` if the registry already holds a live connection.
    pub fn connect(registry: &ConnectionRegistry, config: SystemConfig) -> Result<Self> {
        if let Some(error_msg) = config.validate() {
            return Err(CacheError::InvalidConfig(error_msg));
        }

        let inner = Arc::new(DistributedSystemImpl::new(&config));
        registry.install(Arc::clone(&inner))?;

        info!(
            "Connected to distributed system '{}' via locators [{}]",
            inner.name(),
            inner.locators().join(", ")
        );

        Ok(Self { inner })
    }

    // == Disconnect ==
    /// Tears down the connection, consuming the handle and clearing the
    /// registry slot.
    ///
    /// Fails with `NotConnected` if the registry is empty and with
    /// `InvalidHandle` if the registry holds a different connection.
    pub fn disconnect(self, registry: &ConnectionRegistry) -> Result<()> {
        registry.release(&self.inner)?;

        info!("Disconnected from distributed system '{}'", self.inner.name());
        Ok(())
    }

    // == Create Cache ==
    /// Creates a cache bound to this connection.
    ///
    /// The cache handle exclusively owns its implementation object; both are
    /// created here and dropped together when the handle goes away.
    pub fn create_cache(&self, name: &str) -> Result<Cache> {
        if name.is_empty() {
            return Err(CacheError::InvalidConfig(
                "Cache name cannot be empty".to_string(),
            ));
        }
        if name.len() > MAX_CACHE_NAME_LENGTH {
            return Err(CacheError::InvalidConfig(format!(
                "Cache name exceeds maximum length of {} bytes",
                MAX_CACHE_NAME_LENGTH
            )));
        }

        self.inner.record_cache_created();
        info!("Created cache '{}' on system '{}'", name, self.inner.name());

        Ok(Cache::new(CacheImpl::new(name, Arc::downgrade(&self.inner))))
    }

    // == Name ==
    /// Returns the name of the distributed system.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    // == Status ==
    /// Returns a snapshot of the connection's state.
    pub fn status(&self) -> SystemStatus {
        self.inner.status()
    }
}
