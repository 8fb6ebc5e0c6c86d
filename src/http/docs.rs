//! OpenAPI document for the employee API.
//!
//! The document is generated from the `#[utoipa::path]` annotations on the
//! handlers and served at `/apidocs/swagger.json`, where the bundled
//! Swagger UI page (`/swagger`) picks it up.

use axum::Json;
use utoipa::OpenApi;

use crate::http::dto::{
    EmployeePatch, EmployeePayload, HealthResponse, MessageResponse,
};
use crate::http::error::ErrorBody;
use crate::models::{Employee, EmployeeId};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Management API",
        description = "CRUD API for managing employee records",
        license(name = "MIT")
    ),
    paths(
        crate::http::handlers::list_employees,
        crate::http::handlers::get_employee,
        crate::http::handlers::create_employee,
        crate::http::handlers::replace_employee,
        crate::http::handlers::patch_employee,
        crate::http::handlers::delete_employee,
        crate::http::handlers::delete_all_employees,
        crate::http::handlers::health_check,
    ),
    components(schemas(
        Employee,
        EmployeeId,
        EmployeePayload,
        EmployeePatch,
        MessageResponse,
        HealthResponse,
        ErrorBody,
    )),
    tags(
        (name = "employees", description = "Employee management endpoints"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// GET /apidocs/swagger.json
pub async fn swagger_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
