//! Config Tests
//!
//! Tests for loading the YAML file and resolving server settings.

use std::fs;
use std::time::Duration;

use notredis::config::{Config, EngineKind, ServerConfig};
use notredis::NotRedisError;
use tempfile::TempDir;

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let config = Config::load(temp_dir.path().join("nope.yaml")).unwrap();

    assert_eq!(config.engine.kind, EngineKind::InMemory);
    assert_eq!(config.engine.capacity, 100);
    assert_eq!(config.network.address, "127.0.0.1:3223");
    assert_eq!(config.network.max_connections, 100);
    assert_eq!(config.network.max_message_size, "4KB");
    assert_eq!(config.network.idle_timeout, "5m");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.output, "stderr");
}

#[test]
fn test_full_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(
        &path,
        r#"
engine:
  type: in_memory
  capacity: 1000
network:
  address: "0.0.0.0:4000"
  max_connections: 5
  max_message_size: "2KB"
  idle_timeout: "30s"
logging:
  level: debug
  output: /tmp/notredis.log
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.engine.capacity, 1000);
    assert_eq!(config.network.address, "0.0.0.0:4000");
    assert_eq!(config.network.max_connections, 5);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.output, "/tmp/notredis.log");

    let server = config.server_config();
    assert_eq!(server.address, "0.0.0.0:4000");
    assert_eq!(server.max_connections, 5);
    assert_eq!(server.max_message_size, 2048);
    assert_eq!(server.idle_timeout, Duration::from_secs(30));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let config = Config::from_yaml("network:\n  max_connections: 7\n").unwrap();

    assert_eq!(config.network.max_connections, 7);
    assert_eq!(config.network.address, "127.0.0.1:3223");
    assert_eq!(config.network.idle_timeout, "5m");
    assert_eq!(config.engine.kind, EngineKind::InMemory);
}

#[test]
fn test_empty_file_yields_defaults() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.network.max_connections, 100);
}

#[test]
fn test_malformed_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "network:\n  max_connections: [not, a, number]\n").unwrap();

    assert!(matches!(Config::load(&path), Err(NotRedisError::ConfigParse(_))));
}

#[test]
fn test_unknown_engine_is_an_error() {
    assert!(matches!(
        Config::from_yaml("engine:\n  type: on_disk\n"),
        Err(NotRedisError::ConfigParse(_))
    ));
}

#[test]
fn test_unreadable_path_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();

    // A directory exists but cannot be read as a file
    assert!(matches!(
        Config::load(temp_dir.path()),
        Err(NotRedisError::Io(_))
    ));
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_default_server_config() {
    let server = Config::default().server_config();

    assert_eq!(server.address, "127.0.0.1:3223");
    assert_eq!(server.max_connections, 100);
    assert_eq!(server.max_message_size, 4096);
    assert_eq!(server.idle_timeout, Duration::from_secs(300));
}

#[test]
fn test_message_size_mapping() {
    let resolve = |size: &str| {
        let mut config = Config::default();
        config.network.max_message_size = size.to_string();
        config.server_config().max_message_size
    };

    assert_eq!(resolve("1KB"), 1024);
    assert_eq!(resolve("2KB"), 2048);
    assert_eq!(resolve("16KB"), 4096);
    assert_eq!(resolve("1kb"), 4096);
}

#[test]
fn test_idle_timeout_fallbacks() {
    let resolve = |timeout: &str| {
        let mut config = Config::default();
        config.network.idle_timeout = timeout.to_string();
        config.server_config().idle_timeout
    };

    assert_eq!(resolve("10s"), Duration::from_secs(10));
    assert_eq!(resolve("1m30s"), Duration::from_secs(90));
    assert_eq!(resolve("0s"), Duration::from_secs(300));
    assert_eq!(resolve("0"), Duration::from_secs(300));
    assert_eq!(resolve("soon"), Duration::from_secs(300));
}

#[test]
fn test_server_config_builder() {
    let server = ServerConfig::builder()
        .address("127.0.0.1:0")
        .max_connections(3)
        .max_message_size(1024)
        .idle_timeout(Duration::from_millis(250))
        .build();

    assert_eq!(server.address, "127.0.0.1:0");
    assert_eq!(server.max_connections, 3);
    assert_eq!(server.max_message_size, 1024);
    assert_eq!(server.idle_timeout, Duration::from_millis(250));
}
