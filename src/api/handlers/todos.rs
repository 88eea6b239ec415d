//! Todo management handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use super::ErrorResponse;
use crate::api::state::AppState;
use crate::db::{DbError, NewTodo, Page, PageQuery, SortOrder, Todo, TodoStore};

// =============================================================================
// DTOs
// =============================================================================

/// A todo as it appears on the wire.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Buy milk")]
    pub title: Option<String>,
    pub completed: bool,
    /// RFC 3339 creation timestamp, assigned by the server.
    pub created_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            title: t.title,
            completed: t.completed,
            created_at: t.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    #[schema(example = "Buy milk")]
    pub title: Option<String>,
    /// Defaults to false when omitted.
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
    #[schema(example = true)]
    pub completed: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTodosQuery {
    /// 0-based page number
    #[param(example = 0)]
    pub page: Option<usize>,
    /// Number of items per page
    #[param(example = 20)]
    pub size: Option<usize>,
    /// Field to sort by (id, title, completed, created_at)
    #[param(example = "created_at")]
    pub sort: Option<String>,
    /// Sort order (asc, desc)
    #[param(example = "desc")]
    pub order: Option<String>,
}

/// One page of todos plus pagination metadata.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub content: Vec<TodoResponse>,
    #[schema(example = 0)]
    pub page: usize,
    #[schema(example = 20)]
    pub size: usize,
    #[schema(example = 1)]
    pub total_elements: usize,
    #[schema(example = 1)]
    pub total_pages: usize,
}

impl From<Page<Todo>> for PageResponse {
    fn from(page: Page<Todo>) -> Self {
        let total_pages = page.total_pages();
        Self {
            content: page.content.into_iter().map(TodoResponse::from).collect(),
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/todos",
    tag = "todos",
    params(ListTodosQuery),
    responses(
        (status = 200, description = "One page of todos, newest first by default", body = PageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_todos<S: TodoStore>(
    State(state): State<AppState<S>>,
    Query(query): Query<ListTodosQuery>,
) -> Result<Json<PageResponse>, (StatusCode, Json<ErrorResponse>)> {
    let db_query = PageQuery {
        page: query.page,
        size: query.size,
        sort_by: query.sort.clone(),
        sort_order: match query.order.as_deref() {
            Some("asc") => Some(SortOrder::Asc),
            Some("desc") => Some(SortOrder::Desc),
            _ => None,
        },
    };

    let page = state.store().list(&db_query).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(PageResponse::from(page)))
}

#[utoipa::path(
    post,
    path = "/api/todos",
    tag = "todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 200, description = "Todo created", body = TodoResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_todo<S: TodoStore>(
    State(state): State<AppState<S>>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<Json<TodoResponse>, (StatusCode, Json<ErrorResponse>)> {
    // The store assigns id and created_at; the request carries only the
    // client-suppliable fields.
    let new = NewTodo {
        title: req.title,
        completed: req.completed,
    };

    let created = state.store().create(new).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(TodoResponse::from(created)))
}

#[utoipa::path(
    put,
    path = "/api/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo ID")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = TodoResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_todo<S: TodoStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut todo = state.store().get(id).await.map_err(|e| match e {
        DbError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Todo not found with id: {}", id),
            }),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ),
    })?;

    todo.completed = req.completed;

    state.store().update(&todo).await.map_err(|e| match e {
        DbError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Todo not found with id: {}", id),
            }),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ),
    })?;

    Ok(Json(TodoResponse::from(todo)))
}

#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    tag = "todos",
    params(("id" = i64, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Todo deleted (or did not exist)"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_todo<S: TodoStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    state.store().delete(id).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(StatusCode::OK)
}
