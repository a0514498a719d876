// src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")] // Banco
#[serde(rename_all = "lowercase")] // JSON
pub enum UserRole {
    Hr,
    Employee,
}

// Representa uma conta vinda do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,

    // Limite de assentos: máximo de funcionários distintos que este RH
    // pode manter na equipe. Sobe via pagamento.
    pub max_employees: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Dados para criação de conta (o provedor de identidade já validou o e-mail)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserPayload {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,

    #[validate(email(message = "A valid email is required."))]
    pub email: String,

    #[serde(default = "default_role")]
    pub role: UserRole,

    pub company_name: Option<String>,
    pub company_logo: Option<String>,

    // Limite inicial de assentos; fica em 0 até a compra de um pacote.
    #[serde(default)]
    pub max_employees: i32,
}

fn default_role() -> UserRole {
    UserRole::Employee
}

// Merge-patch do perfil: só os campos presentes são atualizados.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[validate(length(min = 1, message = "Name cannot be empty."))]
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoleResponse {
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Hr).unwrap(), "\"hr\"");
        assert_eq!(
            serde_json::to_string(&UserRole::Employee).unwrap(),
            "\"employee\""
        );
    }

    #[test]
    fn create_user_defaults_to_employee_with_no_seats() {
        let payload: CreateUserPayload =
            serde_json::from_str(r#"{"name": "Alice", "email": "alice@corp.com"}"#).unwrap();
        assert_eq!(payload.role, UserRole::Employee);
        assert_eq!(payload.max_employees, 0);
    }

    #[test]
    fn create_user_rejects_invalid_email() {
        let payload: CreateUserPayload =
            serde_json::from_str(r#"{"name": "Alice", "email": "not-an-email"}"#).unwrap();
        assert!(payload.validate().is_err());
    }
}
