//! Domain models for the todo store.
//!
//! These models are storage-agnostic and represent the records and query
//! shapes used throughout the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page size applied when the caller does not request one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Sort order for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Pagination and sorting options for the list operation.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    /// 0-based page number.
    pub page: Option<usize>,
    /// Number of items per page.
    pub size: Option<usize>,
    /// Field to sort by (validated against a per-store allow-list).
    pub sort_by: Option<String>,
    /// Sort order; listing defaults to newest-first.
    pub sort_order: Option<SortOrder>,
}

/// One page of records plus pagination metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The records in this page.
    pub content: Vec<T>,
    /// 0-based page number that was applied.
    pub page: usize,
    /// Page size that was applied.
    pub size: usize,
    /// Total count of records across all pages.
    pub total_elements: usize,
}

impl<T> Page<T> {
    /// Number of pages needed to hold `total_elements` records.
    pub fn total_pages(&self) -> usize {
        self.total_elements.div_ceil(self.size.max(1))
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields of a todo. The store assigns `id` and
/// `created_at` when the record is first persisted.
#[derive(Debug, Clone, Default)]
pub struct NewTodo {
    pub title: Option<String>,
    pub completed: bool,
}
