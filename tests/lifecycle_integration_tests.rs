//! Integration Tests for the Connection and Cache Lifecycle
//!
//! Exercises the public surface only: connect/disconnect, cache creation,
//! and the guarantees handles give their holders.

use gridcache::{CacheError, ConnectionRegistry, DistributedSystem, SystemConfig};
use serde_json::Value;

// == Helper Functions ==

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridcache=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

fn test_config(name: &str) -> SystemConfig {
    SystemConfig {
        system_name: name.to_string(),
        locators: vec!["locator-a:10334".to_string(), "locator-b:10334".to_string()],
        connect_timeout: 5,
    }
}

// == Connection Lifecycle Tests ==

#[test]
fn test_connect_and_disconnect() {
    init_tracing();
    let registry = ConnectionRegistry::new();
    assert!(!registry.is_connected());

    let system = DistributedSystem::connect(&registry, test_config("prod-grid")).unwrap();
    assert!(registry.is_connected());
    assert_eq!(system.name(), "prod-grid");

    system.disconnect(&registry).unwrap();
    assert!(!registry.is_connected());
}

#[test]
fn test_reconnect_after_disconnect() {
    init_tracing();
    let registry = ConnectionRegistry::new();

    let first = DistributedSystem::connect(&registry, test_config("grid-one")).unwrap();
    first.disconnect(&registry).unwrap();

    let second = DistributedSystem::connect(&registry, test_config("grid-two")).unwrap();
    assert_eq!(second.name(), "grid-two");
    assert!(registry.is_connected());
}

#[test]
fn test_second_connect_rejected() {
    init_tracing();
    let registry = ConnectionRegistry::new();
    let _system = DistributedSystem::connect(&registry, test_config("prod-grid")).unwrap();

    let result = DistributedSystem::connect(&registry, test_config("other-grid"));
    assert!(matches!(result, Err(CacheError::AlreadyConnected(_))));

    // The original connection is undisturbed
    assert!(registry.is_connected());
}

#[test]
fn test_disconnect_against_wrong_registry() {
    init_tracing();
    let registry = ConnectionRegistry::new();
    let other_registry = ConnectionRegistry::new();

    let system = DistributedSystem::connect(&registry, test_config("prod-grid")).unwrap();

    let result = system.disconnect(&other_registry);
    assert!(matches!(result, Err(CacheError::NotConnected(_))));
}

#[test]
fn test_connect_rejects_invalid_config() {
    init_tracing();
    let registry = ConnectionRegistry::new();

    let config = SystemConfig {
        locators: vec![],
        ..test_config("prod-grid")
    };
    let result = DistributedSystem::connect(&registry, config);
    assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    assert!(!registry.is_connected());
}

// == Cache Handle Tests ==

#[test]
fn test_create_and_inspect_cache() {
    init_tracing();
    let registry = ConnectionRegistry::new();
    let system = DistributedSystem::connect(&registry, test_config("prod-grid")).unwrap();

    let cache = system.create_cache("orders").unwrap();
    assert_eq!(cache.name(), "orders");
    assert_eq!(cache.system_name().unwrap(), "prod-grid");

    let status = system.status();
    assert_eq!(status.caches_created, 1);
}

#[test]
fn test_caches_are_independent_handles() {
    init_tracing();
    let registry = ConnectionRegistry::new();
    let system = DistributedSystem::connect(&registry, test_config("prod-grid")).unwrap();

    let orders = system.create_cache("orders").unwrap();
    let sessions = system.create_cache("sessions").unwrap();

    assert_eq!(orders.name(), "orders");
    assert_eq!(sessions.name(), "sessions");
    assert_eq!(system.status().caches_created, 2);

    // Closing one handle leaves the other fully usable
    orders.close();
    assert_eq!(sessions.system_name().unwrap(), "prod-grid");
}

#[test]
fn test_cache_held_across_disconnect() {
    init_tracing();
    let registry = ConnectionRegistry::new();
    let system = DistributedSystem::connect(&registry, test_config("prod-grid")).unwrap();
    let cache = system.create_cache("orders").unwrap();

    system.disconnect(&registry).unwrap();

    // Local state survives; the system link does not
    assert_eq!(cache.name(), "orders");
    assert!(matches!(
        cache.system_name(),
        Err(CacheError::InvalidHandle(_))
    ));
}

// == Status Snapshot Tests ==

#[test]
fn test_cache_status_snapshot() {
    init_tracing();
    let registry = ConnectionRegistry::new();
    let system = DistributedSystem::connect(&registry, test_config("prod-grid")).unwrap();
    let cache = system.create_cache("orders").unwrap();

    let status = cache.status();
    assert_eq!(status.name, "orders");
    assert_eq!(status.system_name.as_deref(), Some("prod-grid"));

    system.disconnect(&registry).unwrap();
    assert!(cache.status().system_name.is_none());
}

#[test]
fn test_registry_status_follows_connection() {
    init_tracing();
    let registry = ConnectionRegistry::new();
    assert!(registry.status().is_none());

    let system = DistributedSystem::connect(&registry, test_config("prod-grid")).unwrap();
    let status = registry.status().unwrap();
    assert_eq!(status.name, "prod-grid");

    system.disconnect(&registry).unwrap();
    assert!(registry.status().is_none());
}

#[test]
fn test_status_serializes_to_json() {
    init_tracing();
    let registry = ConnectionRegistry::new();
    let system = DistributedSystem::connect(&registry, test_config("prod-grid")).unwrap();
    let _cache = system.create_cache("orders").unwrap();

    let json: Value = serde_json::to_value(system.status()).unwrap();
    assert_eq!(json["name"], "prod-grid");
    assert_eq!(json["caches_created"], 1);
    assert_eq!(json["locators"][0], "locator-a:10334");
    assert!(json.get("connected_at").is_some());
}
