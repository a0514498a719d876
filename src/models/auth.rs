// src/models/auth.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Estrutura de dados ("claims") dentro do JWT.
// O subject é o e-mail verificado do chamador.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (e-mail do usuário)
    pub exp: usize,  // Expiration time (quando o token expira)
    pub iat: usize,  // Issued At (quando o token foi criado)
}

// O cliente autentica no provedor de identidade e depois troca o e-mail
// verificado por um token de sessão nosso.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct IssueTokenPayload {
    #[validate(email(message = "A valid email is required."))]
    pub email: String,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
}
