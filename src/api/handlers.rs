//! HTTP request handlers for the payroll service API.
//!
//! This module contains the handler functions for all API endpoints and
//! the router that binds them. Each handler issues exactly one storage
//! call and logs one INFO line on success; failures are returned as
//! [`ServiceError`] and logged by the error middleware.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::calculation::{calculate_compensation, SalaryBreakdown};
use crate::error::ServiceError;
use crate::models::{Employee, NewEmployee, NewRole, Role};

use super::middleware::{report_failures, OperationGuard};
use super::request::{parse_body, SalaryRequest};
use super::response::MessageResponse;
use super::state::AppState;

type HandlerResult<T> = Result<(StatusCode, Json<T>), ServiceError>;

/// Creates the API router with all endpoints.
///
/// Every route carries its own [`report_failures`] layer named after the
/// operation it runs.
pub fn create_router(state: AppState) -> Router {
    let policy = state.error_policy();
    let guard = |operation: &'static str| {
        middleware::from_fn_with_state(OperationGuard::new(operation, policy), report_failures)
    };

    Router::new()
        .route("/v1/employees/salary", get(calculate_salary).layer(guard("calculate_salary")))
        .route("/v1/employees/add", post(add_employee).layer(guard("add_employee")))
        .route("/v1/employees", get(get_all_employees).layer(guard("get_all_employees")))
        .route("/v1/roles/add", post(add_role).layer(guard("add_role")))
        .route("/v1/roles", get(get_all_roles).layer(guard("get_all_roles")))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handler for GET /v1/employees/salary.
///
/// Reads the role's compensation and returns the derived salary and taxes.
async fn calculate_salary(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> HandlerResult<SalaryBreakdown> {
    let request = parse_body(payload)?;

    let compensation = state
        .store()
        .find_compensation(request.role_id)
        .await?
        .ok_or(ServiceError::RoleNotFound {
            role_id: request.role_id,
        })?;

    let breakdown = calculate_compensation(&compensation)?;
    info!(
        role_id = request.role_id,
        salary = %breakdown.salary,
        taxes = %breakdown.taxes,
        "Calculated salary of {} for employee with role_id {}",
        breakdown.salary,
        request.role_id
    );

    Ok((StatusCode::OK, Json(breakdown)))
}

/// Handler for POST /v1/employees/add.
async fn add_employee(
    State(state): State<AppState>,
    payload: Result<Json<NewEmployee>, JsonRejection>,
) -> HandlerResult<MessageResponse> {
    let employee = parse_body(payload)?;

    let stored = state.store().insert_employee(&employee).await?;
    info!(
        employee_id = stored.id,
        "Created employee {} with email {} and role_id {}",
        stored.name,
        stored.email,
        stored.role_id
    );

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Employee added successfully.")),
    ))
}

/// Handler for GET /v1/employees.
async fn get_all_employees(State(state): State<AppState>) -> HandlerResult<Vec<Employee>> {
    let employees = state.store().list_employees().await?;
    info!(count = employees.len(), "Employees retrieved successfully");

    Ok((StatusCode::OK, Json(employees)))
}

/// Handler for POST /v1/roles/add.
async fn add_role(
    State(state): State<AppState>,
    payload: Result<Json<NewRole>, JsonRejection>,
) -> HandlerResult<MessageResponse> {
    let role = parse_body(payload)?;

    let stored = state.store().insert_role(&role).await?;
    info!(
        role_id = stored.id,
        "Role added successfully with name={}, base_salary={}, tax_rate={}, benefits={}",
        stored.name,
        stored.base_salary,
        stored.tax_rate,
        stored.benefits
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Role added successfully")),
    ))
}

/// Handler for GET /v1/roles.
async fn get_all_roles(State(state): State<AppState>) -> HandlerResult<Vec<Role>> {
    let roles = state.store().list_roles().await?;
    info!(count = roles.len(), "All roles retrieved successfully");

    Ok((StatusCode::OK, Json(roles)))
}
