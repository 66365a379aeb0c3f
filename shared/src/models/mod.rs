//! Data models
//!
//! Shared between employee-server and its clients (via API).
//! All IDs are `i64`, assigned by the server-side store.

pub mod employee;
pub mod health;
pub mod outcome;

// Re-exports
pub use employee::*;
pub use health::*;
pub use outcome::*;
