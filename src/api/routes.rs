//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateTodoRequest, ErrorResponse, HealthResponse, PageResponse, TodoResponse,
    UpdateTodoRequest,
};
use super::state::AppState;
use crate::db::TodoStore;

/// Build routes with generic store type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the TodoStore trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($S:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$S>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todos API",
        version = "0.1.0",
        description = "Minimal to-do list REST API",
        license(name = "MIT")
    ),
    paths(
        handlers::health,
        handlers::list_todos,
        handlers::create_todo,
        handlers::update_todo,
        handlers::delete_todo,
    ),
    components(
        schemas(
            HealthResponse,
            TodoResponse,
            PageResponse,
            CreateTodoRequest,
            UpdateTodoRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health endpoints"),
        (name = "todos", description = "Todo management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<S: TodoStore + 'static>(state: AppState<S>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new().route("/health", get(handlers::health));

    // Todo routes (generic over TodoStore)
    let todo_routes = routes!(S => {
        get "/api/todos" => handlers::list_todos,
        post "/api/todos" => handlers::create_todo,
        put "/api/todos/{id}" => handlers::update_todo,
        delete "/api/todos/{id}" => handlers::delete_todo,
    });

    system_routes
        .merge(todo_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
