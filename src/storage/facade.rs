//! Storage facade
//!
//! Pass-through wrapper around an engine.

use std::sync::Arc;

use tracing::Span;

use crate::engine::Store;
use crate::error::{NotRedisError, Result};

/// Forwards to an engine and logs outcomes under its own span
pub struct Storage {
    engine: Arc<dyn Store>,
    span: Span,
}

impl Storage {
    /// Create a new storage builder
    pub fn builder() -> StorageBuilder {
        StorageBuilder::default()
    }

    /// Wire an engine with the default `storage` span
    pub fn new(engine: Arc<dyn Store>) -> Self {
        Self {
            engine,
            span: tracing::info_span!("storage"),
        }
    }
}

impl Store for Storage {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _entered = self.span.enter();

        match self.engine.set(key, value) {
            Ok(()) => {
                tracing::info!(key, "Set command success");
                Ok(())
            }
            Err(e) => {
                tracing::error!(key, error = %e, "Set command fail");
                Err(e)
            }
        }
    }

    fn get(&self, key: &str) -> Result<String> {
        let _entered = self.span.enter();

        match self.engine.get(key) {
            Ok(value) => {
                tracing::info!(key, "Get command success");
                Ok(value)
            }
            Err(e) => {
                tracing::error!(key, error = %e, "Get command fail");
                Err(e)
            }
        }
    }

    fn delete(&self, key: &str) -> Result<()> {
        let _entered = self.span.enter();

        match self.engine.delete(key) {
            Ok(()) => {
                tracing::info!(key, "Del command success");
                Ok(())
            }
            Err(e) => {
                tracing::error!(key, error = %e, "Del command fail");
                Err(e)
            }
        }
    }
}

/// Builder for Storage
///
/// Both the engine and the logging span are required; `build` reports
/// whichever is missing.
#[derive(Default)]
pub struct StorageBuilder {
    engine: Option<Arc<dyn Store>>,
    span: Option<Span>,
}

impl StorageBuilder {
    /// Set the engine calls are forwarded to
    pub fn engine(mut self, engine: Arc<dyn Store>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Set the span facade events are recorded under
    pub fn logger(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn build(self) -> Result<Storage> {
        let engine = self.engine.ok_or(NotRedisError::EngineMissing)?;
        let span = self.span.ok_or(NotRedisError::LoggerMissing)?;
        Ok(Storage { engine, span })
    }
}
