// src/models/employee.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

// O fato de um funcionário pertencer hoje à equipe de um RH.
// Criado na primeira aprovação; removido no offboarding.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeMembership {
    pub id: Uuid,
    pub employee_email: String,
    pub employee_name: String,
    pub hr_email: String,
    pub added_at: DateTime<Utc>,
}

// Resumo do offboarding: unidades devolvidas e solicitações encerradas.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemovalOutcome {
    pub returned_assets: u64,
    pub requests_updated: u64,
}
