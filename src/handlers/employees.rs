// src/handlers/employees.rs

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::roles::RequireHr,
    models::employee::{EmployeeMembership, RemovalOutcome},
};

#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    security(("bearer_auth" = [])),
    responses((status = 200, body = [EmployeeMembership]))
)]
pub async fn get_employees(
    State(app_state): State<AppState>,
    RequireHr(hr): RequireHr,
) -> Result<Json<Vec<EmployeeMembership>>, AppError> {
    let members = app_state.request_service.roster(&hr.email).await?;
    Ok(Json(members))
}

// Offboarding: devolve o estoque das solicitações aprovadas, nega tudo
// que restou sob a relação e remove a filiação, numa transação só.
#[utoipa::path(
    delete,
    path = "/employees/{email}",
    tag = "employees",
    params(("email" = String, Path)),
    security(("bearer_auth" = [])),
    responses((status = 200, body = RemovalOutcome), (status = 404, description = "Funcionário fora da equipe"))
)]
pub async fn remove_employee(
    State(app_state): State<AppState>,
    RequireHr(hr): RequireHr,
    Path(email): Path<String>,
) -> Result<Json<RemovalOutcome>, AppError> {
    let outcome = app_state
        .request_service
        .remove_employee(&hr.email, &email)
        .await?;
    Ok(Json(outcome))
}
