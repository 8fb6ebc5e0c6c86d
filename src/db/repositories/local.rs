//! In-memory local repository implementation.
//!
//! This module provides a local implementation of `EmployeeRepository`
//! suitable for unit testing and local development. All data is stored in
//! memory using a HashMap, providing fast, deterministic, and isolated
//! execution.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::db::repository::{EmployeeRepository, RepositoryError, RepositoryResult};
use crate::models::{Employee, EmployeeId, EmployeeUpdate, NewEmployee};

/// In-memory local repository.
///
/// Stores all employees in a HashMap behind an `RwLock`. The id counter only
/// ever moves forward, so deleted ids are never handed out again.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    employees: HashMap<EmployeeId, Employee>,
    next_id: i64,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            employees: HashMap::new(),
            next_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Get the number of employees stored.
    pub fn employee_count(&self) -> usize {
        self.data.read().unwrap().employees.len()
    }

    /// Check if an employee exists.
    pub fn has_employee(&self, id: EmployeeId) -> bool {
        self.data.read().unwrap().employees.contains_key(&id)
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::Connection(
                "Database is not healthy".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn create(&self, new: &NewEmployee) -> RepositoryResult<Employee> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        let id = EmployeeId::new(data.next_id);
        data.next_id += 1;

        let employee = Employee {
            id,
            name: new.name.clone(),
            surname: new.surname.clone(),
            position: new.position.clone(),
        };
        data.employees.insert(id, employee.clone());

        Ok(employee)
    }

    async fn get(&self, id: EmployeeId) -> RepositoryResult<Employee> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        data.employees
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::employee_not_found(id))
    }

    async fn list(&self) -> RepositoryResult<Vec<Employee>> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        let mut employees: Vec<Employee> = data.employees.values().cloned().collect();
        employees.sort_by_key(|e| e.id);
        Ok(employees)
    }

    async fn replace(&self, id: EmployeeId, new: &NewEmployee) -> RepositoryResult<Employee> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        let employee = data
            .employees
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::employee_not_found(id))?;

        employee.name = new.name.clone();
        employee.surname = new.surname.clone();
        employee.position = new.position.clone();

        Ok(employee.clone())
    }

    async fn patch(&self, id: EmployeeId, update: &EmployeeUpdate) -> RepositoryResult<Employee> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        let employee = data
            .employees
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::employee_not_found(id))?;

        update.apply_to(employee);

        Ok(employee.clone())
    }

    async fn delete(&self, id: EmployeeId) -> RepositoryResult<()> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        data.employees
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::employee_not_found(id))
    }

    async fn delete_all(&self) -> RepositoryResult<usize> {
        self.check_health()?;

        // The id counter is deliberately left alone so deleted ids are
        // never reassigned.
        let mut data = self.data.write().unwrap();
        let removed = data.employees.len();
        data.employees.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new(name: &str) -> NewEmployee {
        NewEmployee {
            name: name.to_string(),
            surname: "Ivanov".to_string(),
            position: "Developer".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = LocalRepository::new();

        let first = repo.create(&sample_new("Ivan")).await.unwrap();
        let second = repo.create(&sample_new("Pyotr")).await.unwrap();

        assert_eq!(first.id, EmployeeId::new(1));
        assert_eq!(second.id, EmployeeId::new(2));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete_all() {
        let repo = LocalRepository::new();

        let first = repo.create(&sample_new("Ivan")).await.unwrap();
        assert_eq!(repo.delete_all().await.unwrap(), 1);

        let next = repo.create(&sample_new("Pyotr")).await.unwrap();
        assert!(next.id > first.id);
    }

    #[tokio::test]
    async fn test_unhealthy_repository_rejects_operations() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        assert!(!repo.health_check().await.unwrap());
        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, RepositoryError::Connection(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = LocalRepository::new();
        let err = repo.delete(EmployeeId::new(99)).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
