//! Employee API server binary.
//!
//! This is the main entry point for the employee management REST API.
//! It builds the repository, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the in-memory repository (default)
//! cargo run --bin employees-server
//!
//! # Run with the SQLite repository
//! cargo run --bin employees-server --features "sqlite-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DATABASE_URL`: SQLite file path (default: instance/employees.db)
//! - `STATIC_DIR`: Directory with the HTML pages and icons (default: static)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use employees_api::db::RepositoryFactory;
use employees_api::http::{create_router_with_static, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting employee API server");

    // Build the repository once and inject it into every handler
    let repository = RepositoryFactory::create_from_env()
        .map_err(|e| anyhow::anyhow!("Failed to create repository: {}", e))?;
    info!("Repository initialized successfully");

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let static_dir: PathBuf = env::var("STATIC_DIR")
        .unwrap_or_else(|_| employees_api::http::router::DEFAULT_STATIC_DIR.to_string())
        .into();
    let app = create_router_with_static(state, &static_dir);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/apidocs/swagger.json", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
