//! Storage Module
//!
//! Facade between the server and whichever engine backs it.
//!
//! ## Responsibilities
//! - Fail fast at wiring time if the engine or logger is missing
//! - Forward every call to the engine unchanged
//! - Log each outcome inside the facade's own span, so facade and engine
//!   events can be told apart

mod facade;

pub use facade::{Storage, StorageBuilder};
