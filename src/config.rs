//! Configuration Module
//!
//! Handles loading and managing connection configuration from environment variables.

use std::env;

use serde::{Deserialize, Serialize};

/// Distributed-system connection parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Logical name of the distributed system to join
    pub system_name: String,
    /// Locator endpoints used to discover the system, as `host:port` pairs
    pub locators: Vec<String>,
    /// Connection establishment timeout in seconds
    pub connect_timeout: u64,
}

impl SystemConfig {
    /// Creates a new SystemConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SYSTEM_NAME` - Name of the distributed system (default: "default-system")
    /// - `LOCATORS` - Comma-separated locator endpoints (default: "localhost:10334")
    /// - `CONNECT_TIMEOUT` - Connection timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            system_name: env::var("SYSTEM_NAME").unwrap_or_else(|_| "default-system".to_string()),
            locators: env::var("LOCATORS")
                .ok()
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(|| vec!["localhost:10334".to_string()]),
            connect_timeout: env::var("CONNECT_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.system_name.is_empty() {
            return Some("System name cannot be empty".to_string());
        }
        if self.locators.is_empty() {
            return Some("At least one locator endpoint is required".to_string());
        }
        None
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            system_name: "default-system".to_string(),
            locators: vec!["localhost:10334".to_string()],
            connect_timeout: 30,
        }
    }
}
