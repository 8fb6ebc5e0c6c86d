//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::EmployeeRepository;

/// Shared application state passed to all handlers.
///
/// Constructed once at startup; handlers receive it through axum's `State`
/// extractor instead of reaching for any global handle.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn EmployeeRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }
}
