//! Request parser
//!
//! Turns one request line into a [`Command`].

use super::Command;
use crate::error::{NotRedisError, Result};

/// Parse one request line.
///
/// The line is split on runs of whitespace; leading, trailing and
/// line-ending whitespace disappear in the split. Verbs are case-sensitive.
/// A known verb with the wrong number of arguments yields that verb's own
/// error (`SetArity`, `GetArity`, `DelArity`) rather than `UnknownRequest`.
pub fn parse(line: &str) -> Result<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let Some(&verb) = tokens.first() else {
        tracing::error!("Parse fail: empty request");
        return Err(NotRedisError::EmptyRequest);
    };

    let command = match (verb, tokens.as_slice()) {
        ("SET", [_, key, value]) => Command::Set {
            key: key.to_string(),
            value: value.to_string(),
        },
        ("SET", _) => {
            tracing::error!(args = tokens.len() - 1, "Parse fail: SET fail");
            return Err(NotRedisError::SetArity);
        }
        ("GET", [_, key]) => Command::Get { key: key.to_string() },
        ("GET", _) => {
            tracing::error!(args = tokens.len() - 1, "Parse fail: GET fail");
            return Err(NotRedisError::GetArity);
        }
        ("DEL", [_, key]) => Command::Del { key: key.to_string() },
        ("DEL", _) => {
            tracing::error!(args = tokens.len() - 1, "Parse fail: DEL fail");
            return Err(NotRedisError::DelArity);
        }
        _ => {
            tracing::error!(verb, "Parse fail: unknown request");
            return Err(NotRedisError::UnknownRequest);
        }
    };

    tracing::info!(kind = %command.kind(), key = command.key(), "Parse success");
    Ok(command)
}
