//! Engine Module
//!
//! The storage contract and the engines that implement it.
//!
//! ## Responsibilities
//! - Define [`Store`], the capability every layer above depends on
//! - Construct the engine selected in the config
//!
//! The server never names a concrete engine; it holds an `Arc<dyn Store>`.
//! A new engine only has to implement `Store` and gain an [`EngineKind`]
//! variant.

mod memory;

use std::sync::Arc;

use crate::config::EngineKind;
use crate::error::Result;

pub use memory::InMemoryEngine;

/// Key-value capability shared by engines and the storage facade
///
/// Implementations must be safe to call from many connection threads at
/// once. Each call is atomic with respect to the others.
pub trait Store: Send + Sync {
    /// Insert or overwrite `key`. Empty keys or values are rejected.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Current value of `key`, or `KeyNotFound`
    fn get(&self, key: &str) -> Result<String>;

    /// Remove `key`, or `KeyNotFound` if absent
    fn delete(&self, key: &str) -> Result<()>;
}

/// Build the engine selected by `kind`
pub fn build_engine(kind: EngineKind, capacity: usize) -> Arc<dyn Store> {
    match kind {
        EngineKind::InMemory => Arc::new(InMemoryEngine::with_capacity(capacity)),
    }
}
