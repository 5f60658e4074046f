//! Request dispatch
//!
//! Line in, response out. Shared by the TCP server and the REPL.

use super::{parse, Response};
use crate::engine::Store;

/// Parse `line`, run it against `store`, and turn the outcome into a
/// response. Every failure becomes `Response::Error`.
pub fn dispatch(store: &dyn Store, line: &str) -> Response {
    parse(line)
        .and_then(|command| command.apply(store))
        .unwrap_or_else(|e| Response::error(&e))
}
