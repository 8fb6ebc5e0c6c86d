//! SQLite repository implementation using Diesel.
//!
//! This module implements `EmployeeRepository` against a SQLite database.
//!
//! ## Features
//!
//! - Connection pooling with r2d2
//! - Blocking queries executed on the tokio blocking pool
//! - Table creation at startup (`CREATE TABLE IF NOT EXISTS`)
//!
//! ## Configuration
//!
//! Environment variables:
//! - `DATABASE_URL`: SQLite file path (default: `instance/employees.db`)
//! - `SQLITE_POOL_MAX`: Maximum pool size (default: 8)
//! - `SQLITE_CONN_TIMEOUT_SEC`: Connection timeout in seconds (default: 30)

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel::sqlite::SqliteConnection;
use std::path::Path;
use std::time::Duration;
use tokio::task;

use crate::db::repository::{EmployeeRepository, RepositoryError, RepositoryResult};
use crate::models::{Employee, EmployeeId, EmployeeUpdate, NewEmployee};

mod models;
mod schema;

use models::{EmployeeChangeset, EmployeeRow, NewEmployeeRow};
use schema::employees;

type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

const DEFAULT_DATABASE_URL: &str = "instance/employees.db";

// AUTOINCREMENT keeps SQLite from reassigning rowids of deleted records,
// so ids stay unique for the lifetime of the database.
const CREATE_EMPLOYEES_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    surname TEXT NOT NULL,
    position TEXT NOT NULL
)";

/// Configuration for connecting to SQLite.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Database file path (or `:memory:` for tests)
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_pool_size: u32,
    /// Connection timeout in seconds
    pub connection_timeout_sec: u64,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_pool_size: 8,
            connection_timeout_sec: 30,
        }
    }
}

impl SqliteConfig {
    /// Create configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let max_pool_size = std::env::var("SQLITE_POOL_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(8);

        let connection_timeout_sec = std::env::var("SQLITE_CONN_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        Self {
            database_url,
            max_pool_size,
            connection_timeout_sec,
        }
    }

    /// Create a new configuration with a database URL.
    pub fn with_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Default::default()
        }
    }
}

/// Diesel-backed repository for SQLite.
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Create a new repository and ensure the employees table exists.
    ///
    /// The parent directory of the database file is created if missing,
    /// so a fresh checkout can start without any setup.
    pub fn new(config: &SqliteConfig) -> RepositoryResult<Self> {
        if config.database_url != ":memory:" {
            if let Some(parent) = Path::new(&config.database_url).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        RepositoryError::Configuration(format!(
                            "Cannot create database directory: {}",
                            e
                        ))
                    })?;
                }
            }
        }

        let manager = ConnectionManager::<SqliteConnection>::new(&config.database_url);
        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;

        {
            let mut conn = pool
                .get()
                .map_err(|e| RepositoryError::Connection(e.to_string()))?;
            sql_query(CREATE_EMPLOYEES_TABLE)
                .execute(&mut conn)
                .map_err(RepositoryError::from)?;
        }

        Ok(Self { pool })
    }

    /// Execute a blocking database operation on the tokio blocking pool.
    ///
    /// Failures are surfaced directly; there is no retry layer.
    async fn with_conn<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();

        task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| RepositoryError::Connection(e.to_string()))?;
            f(&mut conn)
        })
        .await
        .map_err(|e| RepositoryError::Internal(format!("Task join error: {}", e)))?
    }
}

#[async_trait]
impl EmployeeRepository for SqliteRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn(|conn| {
            sql_query("SELECT 1")
                .execute(conn)
                .map_err(RepositoryError::from)?;
            Ok(true)
        })
        .await
    }

    async fn create(&self, new: &NewEmployee) -> RepositoryResult<Employee> {
        let row = NewEmployeeRow::from(new);

        self.with_conn(move |conn| {
            let inserted: EmployeeRow = diesel::insert_into(employees::table)
                .values(&row)
                .returning(EmployeeRow::as_returning())
                .get_result(conn)
                .map_err(RepositoryError::from)?;
            Ok(inserted.into())
        })
        .await
    }

    async fn get(&self, id: EmployeeId) -> RepositoryResult<Employee> {
        self.with_conn(move |conn| {
            let row: Option<EmployeeRow> = employees::table
                .find(id.value())
                .select(EmployeeRow::as_select())
                .first(conn)
                .optional()
                .map_err(RepositoryError::from)?;

            row.map(Into::into)
                .ok_or_else(|| RepositoryError::employee_not_found(id))
        })
        .await
    }

    async fn list(&self) -> RepositoryResult<Vec<Employee>> {
        self.with_conn(|conn| {
            let rows: Vec<EmployeeRow> = employees::table
                .select(EmployeeRow::as_select())
                .order(employees::id.asc())
                .load(conn)
                .map_err(RepositoryError::from)?;

            Ok(rows.into_iter().map(Into::into).collect())
        })
        .await
    }

    async fn replace(&self, id: EmployeeId, new: &NewEmployee) -> RepositoryResult<Employee> {
        let new = new.clone();

        self.with_conn(move |conn| {
            let updated: Option<EmployeeRow> = diesel::update(employees::table.find(id.value()))
                .set((
                    employees::name.eq(new.name),
                    employees::surname.eq(new.surname),
                    employees::position.eq(new.position),
                ))
                .returning(EmployeeRow::as_returning())
                .get_result(conn)
                .optional()
                .map_err(RepositoryError::from)?;

            updated
                .map(Into::into)
                .ok_or_else(|| RepositoryError::employee_not_found(id))
        })
        .await
    }

    async fn patch(&self, id: EmployeeId, update: &EmployeeUpdate) -> RepositoryResult<Employee> {
        // Diesel rejects an all-None changeset, so an empty patch is
        // answered with the stored record as-is.
        if update.is_empty() {
            return self.get(id).await;
        }

        let changeset = EmployeeChangeset::from(update);

        self.with_conn(move |conn| {
            let updated: Option<EmployeeRow> = diesel::update(employees::table.find(id.value()))
                .set(&changeset)
                .returning(EmployeeRow::as_returning())
                .get_result(conn)
                .optional()
                .map_err(RepositoryError::from)?;

            updated
                .map(Into::into)
                .ok_or_else(|| RepositoryError::employee_not_found(id))
        })
        .await
    }

    async fn delete(&self, id: EmployeeId) -> RepositoryResult<()> {
        self.with_conn(move |conn| {
            let removed = diesel::delete(employees::table.find(id.value()))
                .execute(conn)
                .map_err(RepositoryError::from)?;

            if removed == 0 {
                return Err(RepositoryError::employee_not_found(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete_all(&self) -> RepositoryResult<usize> {
        self.with_conn(|conn| {
            diesel::delete(employees::table)
                .execute(conn)
                .map_err(RepositoryError::from)
        })
        .await
    }
}
