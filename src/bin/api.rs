//! Todos API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use todos::api::{self, ApiError, Config};
use todos::db::{DbError, SqliteDatabase};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(todos::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(todos::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(todos::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "todos-api")]
#[command(author, version, about = "Todos API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Database file path
    #[arg(long, default_value = "todos.db")]
    db: PathBuf,

    /// Origin allowed to make cross-origin requests (the dev front-end)
    #[arg(long, default_value = "http://localhost:3000")]
    cors_origin: String,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    println!("Opening database at {:?}", cli.db);

    // Ensure parent directory exists
    if let Some(parent) = cli.db.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&cli.db).await?;

    // Run migrations before starting the server
    db.migrate().await?;
    println!("Database migrations complete");

    // Pass the concrete store to the API layer
    api::run(
        Config {
            host: cli.host,
            port: cli.port,
            allowed_origin: cli.cors_origin,
        },
        db,
    )
    .await?;

    Ok(())
}
