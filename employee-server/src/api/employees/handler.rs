//! Employee API Handlers

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use shared::models::{Employee, EmployeeId, EmployeeOutcome, EmployeePayload};

use crate::core::ServerState;
use crate::db::RepoError;
use crate::utils::validation::validate_employee;
use crate::utils::{AppError, AppResult};

/// List all employees, ascending by id
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.find_all().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> AppResult<Json<Employee>> {
    let Path(id) = id?;
    state
        .employees
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::employee_not_found(id))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> AppResult<EmployeeOutcome> {
    let Json(payload) = payload?;
    validate_employee(&payload)?;

    let employee = state.employees.create(payload).await?;
    Ok(EmployeeOutcome::Created { id: employee.id })
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<EmployeeId>, PathRejection>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> AppResult<EmployeeOutcome> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    validate_employee(&payload)?;

    match state.employees.update(id, payload).await {
        Ok(employee) => Ok(EmployeeOutcome::Updated { id: employee.id }),
        Err(RepoError::NotFound(_)) => Ok(EmployeeOutcome::NotFound { id }),
        Err(e) => Err(e.into()),
    }
}

/// Delete an employee
///
/// A missing id is answered with the not-found outcome, not an error.
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<EmployeeId>, PathRejection>,
) -> AppResult<EmployeeOutcome> {
    let Path(id) = id?;

    let outcome = if state.employees.delete(id).await? {
        EmployeeOutcome::Deleted { id }
    } else {
        EmployeeOutcome::NotFound { id }
    };
    Ok(outcome)
}
