//! Error types for the cache client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache client core.
#[derive(Error, Debug)]
pub enum CacheError {
    /// No distributed-system connection has been established
    #[error("Not connected: {0}")]
    NotConnected(String),

    /// A distributed-system connection is already established
    #[error("Already connected: {0}")]
    AlreadyConnected(String),

    /// A handle refers to an implementation object that is no longer live
    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    /// Invalid configuration or handle parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache client.
pub type Result<T> = std::result::Result<T, CacheError>;
