//! Repository trait and error types for employee storage.

use async_trait::async_trait;

use crate::models::{Employee, EmployeeId, EmployeeUpdate, NewEmployee};

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Connection pool or database connection errors.
    #[error("Connection error: {0}")]
    Connection(String),

    /// SQL query execution errors.
    #[error("Query error: {0}")]
    Query(String),

    /// Requested entity was not found.
    #[error("{0}")]
    NotFound(String),

    /// Configuration or initialization error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Standard not-found error for a missing employee id.
    pub fn employee_not_found(id: EmployeeId) -> Self {
        RepositoryError::NotFound(format!("Employee {} not found", id))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound(_))
    }
}

#[cfg(feature = "sqlite-repo")]
impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => RepositoryError::NotFound(err.to_string()),
            other => RepositoryError::Query(other.to_string()),
        }
    }
}

/// Storage contract for employee records.
///
/// Implementations provide durable (or in-memory) storage of `Employee` rows
/// keyed by id. Each operation is atomic with respect to itself; there are no
/// cross-record transactions.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Check if the storage backend is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the backend is healthy
    /// - `Ok(false)` if the backend is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Persist a new employee, assigning a fresh unique id.
    ///
    /// Ids are never reused, even after deletion.
    async fn create(&self, new: &NewEmployee) -> RepositoryResult<Employee>;

    /// Fetch a single employee by id.
    ///
    /// # Returns
    /// * `Ok(Employee)` - The stored record
    /// * `Err(RepositoryError::NotFound)` - If no record has this id
    async fn get(&self, id: EmployeeId) -> RepositoryResult<Employee>;

    /// List all employees ordered by id.
    async fn list(&self) -> RepositoryResult<Vec<Employee>>;

    /// Overwrite all mutable fields of an existing employee.
    ///
    /// # Returns
    /// * `Ok(Employee)` - The updated record
    /// * `Err(RepositoryError::NotFound)` - If no record has this id
    async fn replace(&self, id: EmployeeId, new: &NewEmployee) -> RepositoryResult<Employee>;

    /// Overwrite only the fields supplied in `update`.
    ///
    /// An empty update returns the stored record unchanged.
    async fn patch(&self, id: EmployeeId, update: &EmployeeUpdate) -> RepositoryResult<Employee>;

    /// Delete a single employee by id.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no record has this id
    async fn delete(&self, id: EmployeeId) -> RepositoryResult<()>;

    /// Delete every employee, returning the number of rows removed.
    ///
    /// Zero is a valid, non-error outcome.
    async fn delete_all(&self) -> RepositoryResult<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_not_found_message() {
        let err = RepositoryError::employee_not_found(EmployeeId::new(42));
        assert_eq!(err.to_string(), "Employee 42 not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_other_variants_are_not_not_found() {
        assert!(!RepositoryError::Connection("down".to_string()).is_not_found());
        assert!(!RepositoryError::Query("bad".to_string()).is_not_found());
    }
}
