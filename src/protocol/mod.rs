//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! ## Protocol Format (Text, newline-delimited)
//!
//! One request per line, one response per line.
//!
//! ### Requests
//! ```text
//! SET <key> <value>
//! GET <key>
//! DEL <key>
//! ```
//! Tokens are separated by runs of whitespace. There is no quoting, so keys
//! and values cannot contain whitespace.
//!
//! ### Responses
//! - `OK`                    SET/DEL succeeded
//! - `<value>`               GET succeeded
//! - `Error: <cause>`        any request-level failure
//! - `Message too large`     line exceeded the size limit
//! - `Too many connections`  sent once before closing a refused connection

mod command;
mod parser;
mod response;
mod codec;
mod dispatch;

pub use command::{Command, CommandKind};
pub use parser::parse;
pub use response::Response;
pub use codec::{read_request, write_response, Frame};
pub use dispatch::dispatch;
