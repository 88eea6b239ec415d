//! SQLite TodoStore implementation.

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::connection::SqliteDatabase;
use super::helpers::{build_order_clause, page_bounds};
use crate::db::{DbError, DbResult, NewTodo, Page, PageQuery, Todo, TodoStore};

/// Columns the listing may be sorted by.
const SORT_FIELDS: &[&str] = &["id", "title", "completed", "created_at"];

fn todo_from_row(row: &SqliteRow) -> Todo {
    let created_at: DateTime<Utc> = row.get("created_at");
    Todo {
        id: row.get("id"),
        title: row.get("title"),
        completed: row.get("completed"),
        created_at,
    }
}

impl TodoStore for SqliteDatabase {
    async fn create(&self, new: NewTodo) -> DbResult<Todo> {
        // The store stamps the creation time; client-supplied values never
        // reach this layer.
        let created_at = Utc::now();

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO todos (title, completed, created_at) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&new.title)
        .bind(new.completed)
        .bind(created_at)
        .fetch_one(self.pool())
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        Ok(Todo {
            id,
            title: new.title,
            completed: new.completed,
            created_at,
        })
    }

    async fn get(&self, id: i64) -> DbResult<Todo> {
        let row = sqlx::query("SELECT id, title, completed, created_at FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        let row = row.ok_or(DbError::NotFound { id })?;

        Ok(todo_from_row(&row))
    }

    async fn list(&self, query: &PageQuery) -> DbResult<Page<Todo>> {
        let order_clause = build_order_clause(query, SORT_FIELDS, "created_at");
        let (page, size) = page_bounds(query);

        let sql = format!(
            "SELECT id, title, completed, created_at FROM todos {} LIMIT ? OFFSET ?",
            order_clause
        );

        let rows = sqlx::query(&sql)
            .bind(size as i64)
            .bind((page * size) as i64)
            .fetch_all(self.pool())
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        let content: Vec<Todo> = rows.iter().map(todo_from_row).collect();

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(self.pool())
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        Ok(Page {
            content,
            page,
            size,
            total_elements: total as usize,
        })
    }

    async fn update(&self, todo: &Todo) -> DbResult<()> {
        // Only the mutable columns are written; id and created_at stay as
        // they were assigned at creation.
        let result = sqlx::query("UPDATE todos SET title = ?, completed = ? WHERE id = ?")
            .bind(&todo.title)
            .bind(todo.completed)
            .bind(todo.id)
            .execute(self.pool())
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id: todo.id });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        // Deleting a missing id is deliberately not an error.
        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        Ok(())
    }
}
