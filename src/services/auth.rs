// src/services/auth.rs

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::{
        auth::Claims,
        user::{CreateUserPayload, UpdateProfilePayload, User, UserRole},
    },
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String) -> Self {
        Self {
            user_repo,
            jwt_secret,
        }
    }

    /// Emite um token de sessão para um e-mail que o provedor de
    /// identidade já verificou no cliente.
    pub fn issue_token(&self, email: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: email.to_owned(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        // Usa '?' para um tratamento de erro mais limpo
        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }

    /// Valida o token e devolve o e-mail verificado do chamador.
    pub fn verified_email(&self, token: &str) -> Result<String, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims.sub)
    }

    /// Cria a conta; e-mail repetido devolve None e o chamador decide
    /// a resposta (o signup do cliente espera 200 com aviso).
    pub async fn create_user(
        &self,
        payload: &CreateUserPayload,
    ) -> Result<Option<User>, AppError> {
        self.user_repo.create_user(payload).await
    }

    pub async fn role_for_email(&self, pool: &sqlx::PgPool, email: &str) -> Result<UserRole, AppError> {
        let user = self
            .user_repo
            .find_by_email(pool, email)
            .await?
            .ok_or(AppError::UserNotFound)?;
        Ok(user.role)
    }

    pub async fn update_profile(
        &self,
        email: &str,
        payload: &UpdateProfilePayload,
    ) -> Result<User, AppError> {
        self.user_repo
            .update_profile(
                email,
                payload.name.as_deref(),
                payload.company_name.as_deref(),
                payload.company_logo.as_deref(),
            )
            .await?
            .ok_or(AppError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    fn service() -> AuthService {
        // connect_lazy não abre conexão; os testes abaixo só exercitam JWT.
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/assetverse_test")
            .unwrap();
        AuthService::new(UserRepository::new(pool), "segredo-de-teste".to_string())
    }

    #[tokio::test]
    async fn token_round_trips_the_email() {
        let auth = service();
        let token = auth.issue_token("hr@corp.com").unwrap();
        assert_eq!(auth.verified_email(&token).unwrap(), "hr@corp.com");
    }

    #[tokio::test]
    async fn tampered_token_is_rejected() {
        let auth = service();
        let mut token = auth.issue_token("hr@corp.com").unwrap();
        token.push('x');
        assert!(matches!(
            auth.verified_email(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn token_from_another_secret_is_rejected() {
        let auth = service();
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/assetverse_test")
            .unwrap();
        let other = AuthService::new(UserRepository::new(pool), "outro-segredo".to_string());
        let token = other.issue_token("hr@corp.com").unwrap();
        assert!(matches!(
            auth.verified_email(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let auth = service();
        let past = Utc::now() - chrono::Duration::days(1);
        let claims = Claims {
            sub: "hr@corp.com".to_string(),
            exp: past.timestamp() as usize,
            iat: (past - chrono::Duration::days(7)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("segredo-de-teste".as_ref()),
        )
        .unwrap();
        assert!(matches!(
            auth.verified_email(&token),
            Err(AppError::InvalidToken)
        ));
    }
}
