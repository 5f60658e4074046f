//! Tests for the storage facade
//!
//! These tests verify:
//! - Wiring fails fast without an engine or logger
//! - Calls are forwarded to the engine unchanged

use std::sync::Arc;

use notredis::engine::{InMemoryEngine, Store};
use notredis::storage::Storage;
use notredis::NotRedisError;

fn setup_storage() -> (Arc<InMemoryEngine>, Storage) {
    let engine = Arc::new(InMemoryEngine::new());
    let storage = Storage::builder()
        .engine(engine.clone())
        .logger(tracing::info_span!("test_storage"))
        .build()
        .unwrap();
    (engine, storage)
}

// =============================================================================
// Wiring Tests
// =============================================================================

#[test]
fn test_build_without_engine_fails() {
    let result = Storage::builder()
        .logger(tracing::info_span!("test_storage"))
        .build();

    assert!(matches!(result, Err(NotRedisError::EngineMissing)));
}

#[test]
fn test_build_without_logger_fails() {
    let result = Storage::builder()
        .engine(Arc::new(InMemoryEngine::new()))
        .build();

    assert!(matches!(result, Err(NotRedisError::LoggerMissing)));
}

#[test]
fn test_build_with_nothing_reports_engine_first() {
    assert!(matches!(
        Storage::builder().build(),
        Err(NotRedisError::EngineMissing)
    ));
}

// =============================================================================
// Forwarding Tests
// =============================================================================

#[test]
fn test_set_reaches_engine() {
    let (engine, storage) = setup_storage();

    storage.set("color", "red").unwrap();

    assert_eq!(engine.get("color").unwrap(), "red");
    assert_eq!(storage.get("color").unwrap(), "red");
}

#[test]
fn test_delete_reaches_engine() {
    let (engine, storage) = setup_storage();
    engine.set("color", "red").unwrap();

    storage.delete("color").unwrap();

    assert!(engine.is_empty());
}

#[test]
fn test_engine_errors_pass_through() {
    let (_engine, storage) = setup_storage();

    assert!(matches!(storage.get("missing"), Err(NotRedisError::KeyNotFound)));
    assert!(matches!(storage.delete("missing"), Err(NotRedisError::KeyNotFound)));
    assert!(matches!(storage.set("", "v"), Err(NotRedisError::EmptyKeyOrValue)));
    assert!(matches!(storage.set("k", ""), Err(NotRedisError::EmptyKeyOrValue)));
}

#[test]
fn test_storage_new_uses_default_span() {
    let storage = Storage::new(Arc::new(InMemoryEngine::new()));

    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k").unwrap(), "v");
}

#[test]
fn test_facades_can_stack() {
    // A facade is itself a Store, so it can wrap another facade
    let inner: Arc<dyn Store> = Arc::new(Storage::new(Arc::new(InMemoryEngine::new())));
    let outer = Storage::builder()
        .engine(inner)
        .logger(tracing::info_span!("outer"))
        .build()
        .unwrap();

    outer.set("k", "v").unwrap();
    assert_eq!(outer.get("k").unwrap(), "v");
}
