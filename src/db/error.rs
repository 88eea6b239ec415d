//! Database error types.
//!
//! Abstracted error types for store operations. Uses miette for diagnostic
//! output and thiserror for derive macros; the variants are storage-backend
//! agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Store operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Todo not found with id: {id}")]
    #[diagnostic(code(todos::db::not_found))]
    NotFound { id: i64 },

    #[error("Database error: {message}")]
    #[diagnostic(code(todos::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(todos::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(todos::db::connection_error))]
    Connection { message: String },
}

/// Result type for store operations.
pub type DbResult<T> = Result<T, DbError>;
