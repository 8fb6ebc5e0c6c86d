//! Factory for creating repository instances.
//!
//! Centralizes backend selection so callers only deal with
//! `Arc<dyn EmployeeRepository>`.

use std::sync::Arc;

use crate::db::repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
use crate::db::repositories::{SqliteConfig, SqliteRepository};
use crate::db::repository::{EmployeeRepository, RepositoryResult};

/// Factory for creating repository instances.
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an in-memory repository.
    pub fn create_local() -> Arc<dyn EmployeeRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a SQLite repository from the given configuration.
    #[cfg(feature = "sqlite-repo")]
    pub fn create_sqlite(config: &SqliteConfig) -> RepositoryResult<Arc<dyn EmployeeRepository>> {
        let repo = SqliteRepository::new(config)?;
        Ok(Arc::new(repo))
    }

    /// Create the repository selected by the enabled features.
    ///
    /// Priority: sqlite > local (when both features are enabled). The SQLite
    /// backend reads its configuration from the environment.
    #[cfg(feature = "sqlite-repo")]
    pub fn create_from_env() -> RepositoryResult<Arc<dyn EmployeeRepository>> {
        let config = SqliteConfig::from_env();
        Self::create_sqlite(&config)
    }

    /// Create the repository selected by the enabled features.
    #[cfg(not(feature = "sqlite-repo"))]
    pub fn create_from_env() -> RepositoryResult<Arc<dyn EmployeeRepository>> {
        Ok(Self::create_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_local_is_empty_and_healthy() {
        let repo = RepositoryFactory::create_local();
        assert!(repo.health_check().await.unwrap());
        assert!(repo.list().await.unwrap().is_empty());
    }
}
