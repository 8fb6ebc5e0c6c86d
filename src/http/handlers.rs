//! HTTP handlers for the REST API.
//!
//! Each handler validates its payload (if any) and delegates to exactly one
//! repository operation; not-found and validation failures are reported
//! before any store mutation happens.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{EmployeePatch, EmployeePayload, HealthResponse, MessageResponse};
use super::error::{AppError, ErrorBody};
use super::state::AppState;
use crate::models::{Employee, EmployeeId};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the database
/// is accessible.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health report", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Employee CRUD
// =============================================================================

/// GET /api/employees
///
/// List all employees.
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "employees",
    responses(
        (status = 200, description = "All employee records", body = [Employee])
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> HandlerResult<Vec<Employee>> {
    let employees = state.repository.list().await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id}
///
/// Fetch a single employee by id.
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "employees",
    params(
        ("id" = i64, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Employee record", body = Employee),
        (status = 404, description = "Employee not found", body = ErrorBody)
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<Employee> {
    let employee = state.repository.get(EmployeeId::new(id)).await?;
    Ok(Json(employee))
}

/// POST /api/employees
///
/// Create a new employee. All three fields are required and must be
/// non-empty.
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "employees",
    request_body = EmployeePayload,
    responses(
        (status = 201, description = "Created employee record", body = Employee),
        (status = 400, description = "Missing or empty required field", body = ErrorBody)
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeePayload>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let new = payload.into_new_employee()?;
    let employee = state.repository.create(&new).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /api/employees/{id}
///
/// Fully replace an existing employee. All three fields are required.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "employees",
    params(
        ("id" = i64, Path, description = "Employee id")
    ),
    request_body = EmployeePayload,
    responses(
        (status = 200, description = "Updated employee record", body = Employee),
        (status = 400, description = "Missing or empty required field", body = ErrorBody),
        (status = 404, description = "Employee not found", body = ErrorBody)
    )
)]
pub async fn replace_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeePayload>,
) -> HandlerResult<Employee> {
    let new = payload.into_new_employee()?;
    let employee = state.repository.replace(EmployeeId::new(id), &new).await?;
    Ok(Json(employee))
}

/// PATCH /api/employees/{id}
///
/// Partially update an employee. Only fields present in the payload are
/// overwritten; a payload with no fields is rejected.
#[utoipa::path(
    patch,
    path = "/api/employees/{id}",
    tag = "employees",
    params(
        ("id" = i64, Path, description = "Employee id")
    ),
    request_body = EmployeePatch,
    responses(
        (status = 200, description = "Updated employee record", body = Employee),
        (status = 400, description = "No fields supplied", body = ErrorBody),
        (status = 404, description = "Employee not found", body = ErrorBody)
    )
)]
pub async fn patch_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeePatch>,
) -> HandlerResult<Employee> {
    let update = payload.into_update()?;
    let employee = state.repository.patch(EmployeeId::new(id), &update).await?;
    Ok(Json(employee))
}

/// DELETE /api/employees/{id}
///
/// Delete a single employee.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "employees",
    params(
        ("id" = i64, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Deletion confirmation", body = MessageResponse),
        (status = 404, description = "Employee not found", body = ErrorBody)
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<MessageResponse> {
    state.repository.delete(EmployeeId::new(id)).await?;
    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}

/// DELETE /api/employees
///
/// Delete every employee. Succeeds with a distinct message when the store
/// is already empty.
#[utoipa::path(
    delete,
    path = "/api/employees",
    tag = "employees",
    responses(
        (status = 200, description = "Deletion confirmation", body = MessageResponse)
    )
)]
pub async fn delete_all_employees(
    State(state): State<AppState>,
) -> HandlerResult<MessageResponse> {
    let removed = state.repository.delete_all().await?;

    let message = if removed > 0 {
        "All employees deleted successfully"
    } else {
        "Employee database is already empty"
    };
    Ok(Json(MessageResponse::new(message)))
}
