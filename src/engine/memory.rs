//! In-memory engine
//!
//! HashMap-based store with RwLock for concurrency.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::Store;
use crate::error::{NotRedisError, Result};

/// In-memory key-value engine
///
/// ## Concurrency Model
/// - Reads take the shared lock, so GETs run in parallel
/// - SET/DEL take the exclusive lock and block everything else
/// - Logging happens after the guard is dropped
pub struct InMemoryEngine {
    data: RwLock<HashMap<String, String>>,
}

impl InMemoryEngine {
    /// Create a new empty engine
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an engine with room for `capacity` keys before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Number of live keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if the engine holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl Default for InMemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for InMemoryEngine {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() || value.is_empty() {
            tracing::error!(key, "SET fail: empty key or value");
            return Err(NotRedisError::EmptyKeyOrValue);
        }

        self.data.write().insert(key.to_string(), value.to_string());

        tracing::info!(key, "SET success");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<String> {
        let value = self.data.read().get(key).cloned();

        match value {
            Some(value) => {
                tracing::info!(key, "GET success");
                Ok(value)
            }
            None => {
                tracing::error!(key, "GET fail: key not found");
                Err(NotRedisError::KeyNotFound)
            }
        }
    }

    fn delete(&self, key: &str) -> Result<()> {
        let removed = self.data.write().remove(key);

        if removed.is_none() {
            tracing::error!(key, "DEL fail: key not found");
            return Err(NotRedisError::KeyNotFound);
        }

        tracing::info!(key, "DEL success");
        Ok(())
    }
}
