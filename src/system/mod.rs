//! Distributed System Module
//!
//! Provides the public connection handle, its private implementation,
//! and the process-wide connection registry.

mod handle;
mod inner;
mod registry;

// Re-export public types
pub use handle::{DistributedSystem, SystemStatus};
pub use registry::ConnectionRegistry;

pub(crate) use inner::DistributedSystemImpl;
