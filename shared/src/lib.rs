//! Shared types for the employee service
//!
//! Error types, response envelopes, request query types and the employee
//! record schema used by `employee-server` and its clients.

pub mod error;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use request::{PageRequest, PaginationQuery};
pub use response::Page;
