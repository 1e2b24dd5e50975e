//! GridCache - Client-side core of a distributed cache
//!
//! Provides the public handle types (`Cache`, `DistributedSystem`), the
//! connection-lifecycle registry, and a crate-private access bridge that
//! lets internal subsystems reach the implementation objects behind the
//! public handles.

pub mod cache;
pub mod config;
pub mod error;
pub mod system;

pub(crate) mod internal;

pub use cache::{Cache, CacheStatus};
pub use config::SystemConfig;
pub use error::{CacheError, Result};
pub use system::{ConnectionRegistry, DistributedSystem, SystemStatus};
