//! Employee API Handlers

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use shared::models::{DepartmentSalary, Employee};
use shared::{ErrorCode, Page, PaginationQuery};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::EmployeeFilter;
use crate::utils::time::today;
use crate::utils::{AppError, AppResult, parse_create, parse_update};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Exact department match; blank means no filter
    pub department: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub skill: Option<String>,
}

/// List employees, newest joiners first
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<Json<Page<Employee>>> {
    let Query(query) = query?;
    let page = query
        .pagination
        .resolve(state.config.page_size, state.config.max_page_size)?;
    let filter = EmployeeFilter {
        department: query
            .department
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
    };

    let (employees, count) = state.employees().list(&filter, page).await?;

    let result = Page::new(employees, count, page);
    if result.page > result.total_pages {
        return Err(AppError::new(ErrorCode::InvalidPage));
    }
    Ok(Json(result))
}

/// Get employee by `employee_id`
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees()
        .find_by_employee_id(&employee_id)
        .await?
        .ok_or_else(|| AppError::employee_not_found(&employee_id))?;
    Ok(Json(employee))
}

/// Create a new employee
///
/// The body must be a JSON object; field types are checked per field so a
/// mistyped value shows up in `details` next to the rule violations.
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let Json(payload) = payload?;
    let employee = parse_create(payload, today())?;

    let employee = state.employees().create(employee).await?;

    tracing::info!(
        employee_id = %employee.employee_id,
        actor = %user.id,
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Partially update an employee (PATCH and PUT)
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(employee_id): Path<String>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> AppResult<Json<Employee>> {
    let Json(payload) = payload?;
    let update = parse_update(&employee_id, payload, today())?;

    let employee = state.employees().update(&employee_id, update).await?;

    tracing::info!(employee_id = %employee_id, actor = %user.id, "Employee updated");
    Ok(Json(employee))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(employee_id): Path<String>,
) -> AppResult<StatusCode> {
    state.employees().delete(&employee_id).await?;

    tracing::info!(employee_id = %employee_id, actor = %user.id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Average salary per department
pub async fn avg_salary(State(state): State<ServerState>) -> AppResult<Json<Vec<DepartmentSalary>>> {
    let rows = state.employees().average_salary_by_department().await?;
    Ok(Json(rows))
}

/// Employees having an exact skill
pub async fn search(
    State(state): State<ServerState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Employee>>> {
    let Query(query) = query?;
    let skill = query
        .skill
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::required("Skill query parameter required."))?;

    let employees = state.employees().search_by_skill(skill).await?;
    Ok(Json(employees))
}
