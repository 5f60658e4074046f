//! Error types for NotRedis
//!
//! Provides a unified error type for all operations. The `Display` text of
//! request-level variants is exactly what clients see after `Error: `.

use std::io::ErrorKind;
use thiserror::Error;

/// Result type alias using NotRedisError
pub type Result<T> = std::result::Result<T, NotRedisError>;

/// Unified error type for NotRedis operations
#[derive(Debug, Error)]
pub enum NotRedisError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("key not found")]
    KeyNotFound,

    #[error("empty key or value")]
    EmptyKeyOrValue,

    // -------------------------------------------------------------------------
    // Wiring Errors
    // -------------------------------------------------------------------------
    #[error("engine is missing")]
    EngineMissing,

    #[error("logger is missing")]
    LoggerMissing,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("empty request")]
    EmptyRequest,

    #[error("unknown request")]
    UnknownRequest,

    #[error("SET fail")]
    SetArity,

    #[error("GET fail")]
    GetArity,

    #[error("DEL fail")]
    DelArity,

    #[error("request is not valid UTF-8")]
    InvalidEncoding,

    // -------------------------------------------------------------------------
    // Capacity Errors
    // -------------------------------------------------------------------------
    #[error("Message too large")]
    MessageTooLarge,

    #[error("Too many connections")]
    TooManyConnections,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl NotRedisError {
    /// True when a read gave up because the socket timeout elapsed.
    ///
    /// Unix reports `WouldBlock`, Windows reports `TimedOut`.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            NotRedisError::Io(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut)
        )
    }

    /// True when the peer went away (EOF, reset, abort, broken pipe)
    pub fn is_disconnect(&self) -> bool {
        matches!(
            self,
            NotRedisError::Io(e) if matches!(
                e.kind(),
                ErrorKind::UnexpectedEof
                    | ErrorKind::ConnectionReset
                    | ErrorKind::ConnectionAborted
                    | ErrorKind::BrokenPipe
            )
        )
    }
}
