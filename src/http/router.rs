//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! the static pages, and creates the axum router ready for serving.

use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::docs;
use super::handlers;
use super::state::AppState;

/// Default directory holding the pre-built HTML pages and icons.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Create the main application router with all routes and middleware,
/// serving static assets from the default directory.
pub fn create_router(state: AppState) -> Router {
    create_router_with_static(state, Path::new(DEFAULT_STATIC_DIR))
}

/// Create the application router with an explicit static asset directory.
pub fn create_router_with_static(state: AppState, static_dir: &Path) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Employee CRUD endpoints
    let api = Router::new()
        .route(
            "/employees",
            get(handlers::list_employees)
                .post(handlers::create_employee)
                .delete(handlers::delete_all_employees),
        )
        .route(
            "/employees/{id}",
            get(handlers::get_employee)
                .put(handlers::replace_employee)
                .patch(handlers::patch_employee)
                .delete(handlers::delete_employee),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/apidocs/swagger.json", get(docs::swagger_json))
        .nest("/api", api)
        // Pre-built HTML pages and icon assets
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/admin", ServeFile::new(static_dir.join("admin.html")))
        .route_service("/swagger", ServeFile::new(static_dir.join("swagger.html")))
        .route_service(
            "/favicon.ico",
            ServeFile::new(static_dir.join("favicon/favicon.ico")),
        )
        .nest_service("/favicon", ServeDir::new(static_dir.join("favicon")))
        // Employee payloads are tiny.
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::EmployeeRepository;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo = Arc::new(LocalRepository::new()) as Arc<dyn EmployeeRepository>;
        let state = AppState::new(repo);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
