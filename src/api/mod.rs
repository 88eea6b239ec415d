//! HTTP API layer.
//!
//! Translates the four todo operations into store calls and JSON payloads,
//! and owns server configuration and startup.

mod handlers;
mod routes;
mod state;

use std::net::IpAddr;

use axum::http::{HeaderValue, Method, header};
use miette::Diagnostic;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use state::AppState;

use crate::db::TodoStore;

/// API server configuration
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Single origin allowed to make cross-origin requests
    /// (the development front-end).
    pub allowed_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

/// API server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Invalid allowed origin: {origin}")]
    #[diagnostic(code(todos::api::invalid_origin))]
    InvalidOrigin { origin: String },

    #[error("Server error: {0}")]
    #[diagnostic(code(todos::api::io))]
    Io(#[from] std::io::Error),
}

/// Initialize tracing subscriber with env filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Run the API server with the given configuration and store
pub async fn run<S: TodoStore + 'static>(config: Config, store: S) -> Result<(), ApiError> {
    init_tracing();

    // Fixed allow-list of exactly one origin, not a general CORS policy.
    let origin =
        config
            .allowed_origin
            .parse::<HeaderValue>()
            .map_err(|_| ApiError::InvalidOrigin {
                origin: config.allowed_origin.clone(),
            })?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let app = routes::create_router(AppState::new(store))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
