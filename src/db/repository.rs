//! Store trait for data access abstraction.
//!
//! This trait defines the contract for todo persistence, allowing different
//! storage backends to be swapped without changing the HTTP layer.

use std::future::Future;

use crate::db::{DbResult, NewTodo, Page, PageQuery, Todo};

/// Persistence contract for `Todo` records.
pub trait TodoStore: Send + Sync {
    /// Persist a new todo, assigning a fresh id and creation timestamp.
    ///
    /// Returns the stored record including the generated fields.
    fn create(&self, new: NewTodo) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Get a todo by id. Fails with `DbError::NotFound` when absent.
    fn get(&self, id: i64) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Get one page of todos, newest-first unless the query says otherwise.
    fn list(&self, query: &PageQuery) -> impl Future<Output = DbResult<Page<Todo>>> + Send;

    /// Overwrite the mutable fields of the record identified by `todo.id`.
    ///
    /// `id` and `created_at` are never written. Fails with
    /// `DbError::NotFound` when no record with that id exists.
    fn update(&self, todo: &Todo) -> impl Future<Output = DbResult<()>> + Send;

    /// Delete a todo by id. Deleting an id that does not exist is a no-op.
    fn delete(&self, id: i64) -> impl Future<Output = DbResult<()>> + Send;
}
