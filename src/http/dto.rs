//! Data Transfer Objects for the HTTP API.
//!
//! Payload validation happens here, once, at the boundary: handlers convert
//! a DTO into a domain type or fail with 400 before touching the repository.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::AppError;
use crate::models::{EmployeeUpdate, NewEmployee};

/// Request body for creating an employee (POST) or fully replacing one (PUT).
///
/// All three fields are required; a field is treated as missing when it is
/// absent from the payload or present but empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default, ToSchema)]
pub struct EmployeePayload {
    #[serde(default)]
    #[schema(example = "Ivan")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "Ivanov")]
    pub surname: Option<String>,
    #[serde(default)]
    #[schema(example = "Developer")]
    pub position: Option<String>,
}

impl EmployeePayload {
    /// Validate required fields and convert into a domain `NewEmployee`.
    pub fn into_new_employee(self) -> Result<NewEmployee, AppError> {
        let name = require_field(self.name, "name")?;
        let surname = require_field(self.surname, "surname")?;
        let position = require_field(self.position, "position")?;

        Ok(NewEmployee {
            name,
            surname,
            position,
        })
    }
}

fn require_field(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!(
            "Missing required field: {}",
            field
        ))),
    }
}

/// Request body for partially updating an employee (PATCH).
///
/// Any subset of fields may be supplied; a field present in the payload
/// overwrites the stored value regardless of its content.
#[derive(Debug, Clone, Serialize, Deserialize, Default, ToSchema)]
pub struct EmployeePatch {
    #[serde(default)]
    #[schema(example = "Ivan")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "Ivanov")]
    pub surname: Option<String>,
    #[serde(default)]
    #[schema(example = "Team Lead")]
    pub position: Option<String>,
}

impl EmployeePatch {
    /// Convert into a domain update, rejecting a payload with no fields.
    pub fn into_update(self) -> Result<EmployeeUpdate, AppError> {
        let update = EmployeeUpdate {
            name: self.name,
            surname: self.surname,
            position: self.position,
        };

        if update.is_empty() {
            return Err(AppError::BadRequest(
                "No fields supplied for update".to_string(),
            ));
        }
        Ok(update)
    }
}

/// Confirmation message response: `{"message": "<text>"}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Confirmation text
    #[schema(example = "Employee deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
