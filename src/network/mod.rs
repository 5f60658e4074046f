//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single acceptor thread running admission control
//! - One worker thread per admitted connection
//! - Commands routed through the storage facade

mod server;
mod connection;
mod limiter;

pub use server::Server;
pub use connection::Connection;
pub use limiter::{ConnectionLimiter, ConnectionPermit};
