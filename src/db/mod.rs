//! Database abstraction layer.
//!
//! Trait-based abstraction for data access, allowing different storage
//! backends (SQLite, in-memory, etc.) to be swapped without changing the
//! HTTP layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain records and query shapes
//! - `repository`: Trait definition for data access
//! - `sqlite`: SQLite implementation backed by sqlx

mod error;
mod models;
mod repository;
mod sqlite;

#[cfg(test)]
mod models_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
