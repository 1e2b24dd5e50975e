//! Connection Registry
//!
//! Owns the single process-wide slot holding the current distributed-system
//! implementation. The slot is installed on connection establishment, cleared
//! on teardown, and read by the internal access bridge.

use std::sync::{Arc, RwLock};

use crate::error::{CacheError, Result};
use crate::internal::diagnostics;
use crate::system::{DistributedSystemImpl, SystemStatus};

// == Connection Registry ==
/// Lifecycle manager for the current distributed-system connection.
///
/// Holds at most one live implementation at a time. Absence of a connection
/// is an explicit `None`, never an uninitialized reference.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    /// The currently installed connection, if any
    slot: RwLock<Option<Arc<DistributedSystemImpl>>>,
}

impl ConnectionRegistry {
    // == Constructor ==
    /// Creates a new registry with no connection installed.
    pub fn new() -> Self {
        Self::default()
    }

    // == Install ==
    /// Installs a freshly established connection into the slot.
    ///
    /// Fails if a connection is already installed; the slot holds at most
    /// one live system at a time.
    pub(crate) fn install(&self, system: Arc<DistributedSystemImpl>) -> Result<()> {
        let mut slot = self.slot.write().expect("connection registry lock poisoned");

        if let Some(current) = slot.as_ref() {
            return Err(CacheError::AlreadyConnected(format!(
                "a connection to '{}' is already installed",
                current.name()
            )));
        }

        *slot = Some(system);
        Ok(())
    }

    // == Release ==
    /// Clears the slot on connection teardown.
    ///
    /// The caller passes the implementation it believes is installed; a
    /// mismatch means the handle is stale and the installed connection is
    /// left untouched.
    pub(crate) fn release(&self, expected: &Arc<DistributedSystemImpl>) -> Result<()> {
        let mut slot = self.slot.write().expect("connection registry lock poisoned");

        match slot.as_ref() {
            None => Err(CacheError::NotConnected(
                "no connection is installed".to_string(),
            )),
            Some(current) if !Arc::ptr_eq(current, expected) => Err(CacheError::InvalidHandle(
                "handle does not match the installed connection".to_string(),
            )),
            Some(_) => {
                *slot = None;
                Ok(())
            }
        }
    }

    // == Current ==
    /// Returns the currently installed connection, or None if not connected.
    pub(crate) fn current(&self) -> Option<Arc<DistributedSystemImpl>> {
        self.slot
            .read()
            .expect("connection registry lock poisoned")
            .clone()
    }

    // == Is Connected ==
    /// Returns true if a connection is currently installed.
    pub fn is_connected(&self) -> bool {
        self.slot
            .read()
            .expect("connection registry lock poisoned")
            .is_some()
    }

    // == Status ==
    /// Returns a snapshot of the current connection, collected by the
    /// internal diagnostics subsystem, or None if not connected.
    pub fn status(&self) -> Option<SystemStatus> {
        diagnostics::connection_status(self)
    }
}
