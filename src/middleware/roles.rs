// src/middleware/roles.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::user::{User, UserRole},
};

/// O Extractor (Guardião): exige que o chamador autenticado tenha o papel
/// `hr`. Carrega a conta completa para os handlers que precisam dela.
pub struct RequireHr(pub User);

impl<S> FromRequestParts<S> for RequireHr
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // A. Extrai a identidade deixada pelo auth_guard
        let auth = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or(AppError::InvalidToken)?;

        // B. Verifica o papel no banco
        let user = app_state
            .user_repo
            .find_by_email(&app_state.db_pool, &auth.0)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if user.role != UserRole::Hr {
            return Err(AppError::HrRoleRequired);
        }

        Ok(RequireHr(user))
    }
}
