//! # NotRedis
//!
//! A minimal networked key-value store with:
//! - A concurrent in-memory engine (many readers / one writer)
//! - A line-delimited text protocol (`SET`, `GET`, `DEL`)
//! - A thread-per-connection TCP server with admission control and idle
//!   timeouts
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │          (admission control, one thread per client)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ one line at a time
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Command Parser                             │
//! │                (SET / GET / DEL)                             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Storage Facade                              │
//! │            (dyn Store, logs outcomes)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │    Engine     │
//!               │   (RwLock)    │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod logging;

pub mod engine;
pub mod storage;
pub mod protocol;
pub mod network;
pub mod repl;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{NotRedisError, Result};
pub use config::{Config, ServerConfig};
pub use engine::{InMemoryEngine, Store};
pub use storage::Storage;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of NotRedis
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
