//! Data models
//!
//! Shared between employee-server and its API clients.

pub mod employee;

// Re-exports
pub use employee::*;
