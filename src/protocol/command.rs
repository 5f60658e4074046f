//! Command definitions
//!
//! Represents parsed requests from clients.

use std::fmt;

use super::Response;
use crate::engine::Store;
use crate::error::Result;

/// Command kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Set,
    Get,
    Del,
}

impl CommandKind {
    /// The verb as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Set => "SET",
            CommandKind::Get => "GET",
            CommandKind::Del => "DEL",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set a key-value pair
    Set { key: String, value: String },

    /// Get a value by key
    Get { key: String },

    /// Delete a key
    Del { key: String },
}

impl Command {
    /// Get the command kind
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Set { .. } => CommandKind::Set,
            Command::Get { .. } => CommandKind::Get,
            Command::Del { .. } => CommandKind::Del,
        }
    }

    /// The key the command operates on
    pub fn key(&self) -> &str {
        match self {
            Command::Set { key, .. } | Command::Get { key } | Command::Del { key } => key,
        }
    }

    /// Run the command against `store` and build the success response
    pub fn apply(self, store: &dyn Store) -> Result<Response> {
        match self {
            Command::Set { key, value } => store.set(&key, &value).map(|()| Response::Ok),
            Command::Get { key } => store.get(&key).map(Response::Value),
            Command::Del { key } => store.delete(&key).map(|()| Response::Ok),
        }
    }
}
