//! HTTP request handlers.

mod system;
mod todos;


use serde::Serialize;
use utoipa::ToSchema;

pub use system::*;
pub use todos::*;

/// Error payload returned by failing handlers.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub error: String,
}
