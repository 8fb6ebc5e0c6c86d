//! Database module for employee record storage.
//!
//! This module provides abstractions for database operations via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository.rs) - Abstract Interface  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!      ┌──────────────┴──────────────┐
//!      ▼                             ▼
//! ┌──────────────────┐    ┌─────────────────────────┐
//! │ LocalRepository  │    │ SqliteRepository        │
//! │   (in-memory)    │    │ (Diesel, feature-gated) │
//! └──────────────────┘    └─────────────────────────┘
//! ```
//!
//! There is no global repository singleton: the server binary constructs a
//! repository once at startup and injects it into handlers via `AppState`.

// Feature flag priority: sqlite > local
// When multiple features are enabled (e.g., --all-features), sqlite takes precedence.
#[cfg(not(any(feature = "sqlite-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repositories;
pub mod repository;

pub use factory::RepositoryFactory;
pub use repositories::LocalRepository;
#[cfg(feature = "sqlite-repo")]
pub use repositories::{SqliteConfig, SqliteRepository};
pub use repository::{EmployeeRepository, RepositoryError, RepositoryResult};
