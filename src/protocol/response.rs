//! Response definitions
//!
//! Represents responses to clients.

use crate::error::NotRedisError;

/// A response to send to client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// SET or DEL succeeded
    Ok,

    /// GET succeeded
    Value(String),

    /// Request-level failure, carrying the cause
    Error(String),

    /// The request line exceeded the size limit
    MessageTooLarge,

    /// The connection was refused at admission
    TooManyConnections,
}

impl Response {
    /// Create an ERROR response from an error
    pub fn error(err: &NotRedisError) -> Self {
        Response::Error(err.to_string())
    }

    /// The response line, without the trailing newline
    pub fn line(&self) -> String {
        match self {
            Response::Ok => "OK".to_string(),
            Response::Value(value) => value.clone(),
            Response::Error(cause) => format!("Error: {}", cause),
            Response::MessageTooLarge => NotRedisError::MessageTooLarge.to_string(),
            Response::TooManyConnections => NotRedisError::TooManyConnections.to_string(),
        }
    }
}
