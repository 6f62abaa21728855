//! Repository Module
//!
//! Typed store operations over SurrealDB. SurrealQL stays in this module;
//! callers only see one method per supported query shape.

pub mod employee;

// Re-exports
pub use employee::{EmployeeFilter, EmployeeRepository};

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::error::Db as DbError;
use thiserror::Error;

use crate::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// No employee with this `employee_id`
    #[error("Employee {0} not found")]
    NotFound(String),

    /// `employee_id` already taken
    #[error("Employee ID '{0}' already exists")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(employee_id) => AppError::employee_not_found(employee_id),
            RepoError::Duplicate(_) => AppError::new(shared::ErrorCode::EmployeeIdExists),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// True when the store rejected a write because of a UNIQUE index
pub(crate) fn is_unique_violation(err: &surrealdb::Error) -> bool {
    matches!(err, surrealdb::Error::Db(DbError::IndexExists { .. }))
}

/// True when the statement lost a commit race and may be retried
///
/// Concurrent writes to the same index key surface as a failed commit
/// (`QueryNotExecutedDetail`) instead of `IndexExists`.
pub(crate) fn is_tx_conflict(err: &surrealdb::Error) -> bool {
    matches!(
        err,
        surrealdb::Error::Db(
            DbError::TxRetryable | DbError::QueryNotExecuted | DbError::QueryNotExecutedDetail { .. }
        )
    )
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
