use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::PromoCodeServiceError;
use crate::handlers::role::RoleResponse;
use crate::state::AppState;
use crate::usecase::employee::{GetEmployeeUseCase, ListEmployeesUseCase};

// ── GET /api/v1/employees ────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeShortResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
}

pub async fn get_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeShortResponse>>, PromoCodeServiceError> {
    let usecase = ListEmployeesUseCase {
        employees: state.employee_repo(),
    };
    let employees = usecase.execute().await?;
    let items = employees
        .into_iter()
        .map(|e| EmployeeShortResponse {
            id: e.id,
            full_name: e.full_name(),
            email: e.email,
        })
        .collect();
    Ok(Json(items))
}

// ── GET /api/v1/employees/{id} ───────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: RoleResponse,
    pub applied_promocodes_count: u32,
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, PromoCodeServiceError> {
    let usecase = GetEmployeeUseCase {
        employees: state.employee_repo(),
    };
    let employee = usecase.execute(id).await?;
    Ok(Json(EmployeeResponse {
        id: employee.id,
        full_name: employee.full_name(),
        email: employee.email,
        role: employee.role.into(),
        applied_promocodes_count: employee.applied_promocodes_count,
    }))
}
