//! Employee management backend.
//!
//! A small CRUD web service for employee records (id, name, surname,
//! position): a repository layer with swappable storage backends and an
//! axum-based HTTP API with auto-generated OpenAPI documentation.
//!
//! # Modules
//!
//! - [`models`]: domain types (`Employee` and friends)
//! - [`db`]: repository trait, backends, and factory
//! - [`http`]: axum router, handlers, DTOs, and error mapping

pub mod db;
pub mod http;
pub mod models;
