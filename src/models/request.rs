// src/models/request.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "request_status", rename_all = "lowercase")] // Banco
#[serde(rename_all = "lowercase")] // JSON
pub enum RequestStatus {
    Pending,
    Approved,
    Denied,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Denied => "denied",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// A decisão vem como texto livre do cliente; valores fora do vocabulário
// viram erro 400, não 422 de desserialização.
impl FromStr for RequestStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "denied" => Ok(RequestStatus::Denied),
            _ => Err(()),
        }
    }
}

// Uma reivindicação de um funcionário sobre um ativo.
// hrEmail e assetName são denormalizados no momento da submissão.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetRequest {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub asset_name: String,
    pub requester_email: String,
    pub requester_name: String,
    pub hr_email: String,
    pub status: RequestStatus,
    pub requested_at: DateTime<Utc>,
    pub approved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestPayload {
    pub asset_id: Uuid,

    #[validate(email(message = "A valid email is required."))]
    pub email: String,

    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,

    // Opcional: cai para o nome armazenado do ativo.
    pub asset_name: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DecideRequestPayload {
    pub status: String,
}

// Atribuição direta pelo RH, sem solicitação prévia do funcionário.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignAssetPayload {
    pub asset_id: Uuid,

    #[validate(email(message = "A valid email is required."))]
    pub email: String,

    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RequestListQuery {
    // Busca por substring em nome ou e-mail do solicitante.
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MyRequestsQuery {
    pub email: String,
    pub search: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowResponse {
    pub message: String,
    pub modified_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Denied,
        ] {
            assert_eq!(status.as_str().parse::<RequestStatus>(), Ok(status));
        }
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!("rejected".parse::<RequestStatus>().is_err());
        assert!("APPROVED".parse::<RequestStatus>().is_err());
        assert!("".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Denied).unwrap(),
            "\"denied\""
        );
    }
}
