use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Toda falha de operação é capturada na borda do handler e traduzida
// para um JSON com "message" + um status HTTP.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("One or more fields are invalid.")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Invalid Status")]
    InvalidRequestStatus,

    #[error("Invalid or missing authentication token.")]
    InvalidToken,

    #[error("Forbidden access: email does not match the authenticated user.")]
    EmailMismatch,

    #[error("Access Denied: Only HR managers can perform this action.")]
    HrRoleRequired,

    #[error("User not found")]
    UserNotFound,

    #[error("Asset not found")]
    AssetNotFound,

    #[error("Request not found")]
    RequestNotFound,

    #[error("Employee not found")]
    EmployeeNotFound,

    #[error("Package not found")]
    PackageNotFound,

    #[error("Asset is out of stock.")]
    AssetOutOfStock,

    #[error("Employee limit reached. Purchase a package to add more members.")]
    SeatLimitReached,

    #[error("Request has already been processed.")]
    RequestAlreadyDecided,

    #[error("Payment not verified.")]
    PaymentNotVerified,

    // Variante para erros de banco de dados
    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),

    // Falha ao falar com o provedor de checkout
    #[error("Checkout provider error: {0}")]
    GatewayError(#[from] reqwest::Error),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    // Variante genérica para qualquer outro erro inesperado.
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "message": "One or more fields are invalid.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::InvalidRequestStatus => (StatusCode::BAD_REQUEST, "Invalid Status"),
            AppError::AssetOutOfStock => (StatusCode::BAD_REQUEST, "Asset is out of stock."),
            AppError::SeatLimitReached => (
                StatusCode::BAD_REQUEST,
                "Employee limit reached. Purchase a package to add more members.",
            ),
            AppError::RequestAlreadyDecided => (
                StatusCode::BAD_REQUEST,
                "Request has already been processed.",
            ),
            AppError::PaymentNotVerified => (StatusCode::BAD_REQUEST, "Payment not verified."),

            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Invalid or missing authentication token.",
            ),

            AppError::EmailMismatch => (StatusCode::FORBIDDEN, "Forbidden access"),
            AppError::HrRoleRequired => (
                StatusCode::FORBIDDEN,
                "Access Denied: Only HR managers can perform this action.",
            ),

            AppError::UserNotFound => (StatusCode::NOT_FOUND, "User not found"),
            AppError::AssetNotFound => (StatusCode::NOT_FOUND, "Asset not found"),
            AppError::RequestNotFound => (StatusCode::NOT_FOUND, "Request not found"),
            AppError::EmployeeNotFound => (StatusCode::NOT_FOUND, "Employee not found"),
            AppError::PackageNotFound => (StatusCode::NOT_FOUND, "Package not found"),

            // Todos os outros erros (DatabaseError, GatewayError, ...) viram 500.
            // O `#[from]` cuidou da conversão; o `tracing` loga o detalhe.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_family_maps_to_404() {
        for err in [
            AppError::UserNotFound,
            AppError::AssetNotFound,
            AppError::RequestNotFound,
            AppError::EmployeeNotFound,
            AppError::PackageNotFound,
        ] {
            assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn capacity_and_input_errors_map_to_400() {
        for err in [
            AppError::AssetOutOfStock,
            AppError::SeatLimitReached,
            AppError::InvalidRequestStatus,
            AppError::RequestAlreadyDecided,
            AppError::PaymentNotVerified,
        ] {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn identity_errors_map_to_401_and_403() {
        assert_eq!(
            AppError::InvalidToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::EmailMismatch.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::HrRoleRequired.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn upstream_failures_map_to_500() {
        let err = AppError::InternalServerError(anyhow::anyhow!("boom"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
