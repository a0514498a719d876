// src/handlers/auth.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::{
        auth::{AuthResponse, IssueTokenPayload},
        user::{CreateUserPayload, RoleResponse, UpdateProfilePayload},
    },
};

// Troca um e-mail já verificado pelo provedor de identidade por um
// token de sessão nosso.
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "auth",
    request_body = IssueTokenPayload,
    responses((status = 200, body = AuthResponse))
)]
pub async fn issue_jwt(
    State(app_state): State<AppState>,
    Json(payload): Json<IssueTokenPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let token = app_state.auth_service.issue_token(&payload.email)?;
    Ok(Json(AuthResponse { token }))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "auth",
    request_body = CreateUserPayload,
    responses(
        (status = 201, body = crate::models::user::User),
        (status = 200, description = "E-mail já cadastrado; nada inserido")
    )
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let created = app_state.auth_service.create_user(&payload).await?;

    // Conta repetida não é erro no fluxo de signup do cliente.
    let response = match created {
        Some(user) => (StatusCode::CREATED, Json(user)).into_response(),
        None => Json(json!({ "message": "User already exists", "insertedId": null })).into_response(),
    };
    Ok(response)
}

#[utoipa::path(
    get,
    path = "/users/role/{email}",
    tag = "auth",
    params(("email" = String, Path)),
    responses(
        (status = 200, body = RoleResponse),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn get_role(
    State(app_state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<RoleResponse>, AppError> {
    let role = app_state
        .auth_service
        .role_for_email(&app_state.db_pool, &email)
        .await?;
    Ok(Json(RoleResponse { role }))
}

// Merge-patch do próprio perfil (identidade vem do token).
#[utoipa::path(
    patch,
    path = "/users/profile",
    tag = "auth",
    request_body = UpdateProfilePayload,
    security(("bearer_auth" = [])),
    responses((status = 200, body = crate::models::user::User))
)]
pub async fn update_profile(
    State(app_state): State<AppState>,
    AuthenticatedUser(email): AuthenticatedUser,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let user = app_state.auth_service.update_profile(&email, &payload).await?;
    Ok(Json(user))
}
