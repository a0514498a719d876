// src/handlers/requests.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, roles::RequireHr},
    models::request::{
        AssetRequest, AssignAssetPayload, DecideRequestPayload, MyRequestsQuery,
        RequestListQuery, SubmitRequestPayload, WorkflowResponse,
    },
};

// Funcionário solicita um ativo para si.
#[utoipa::path(
    post,
    path = "/request-asset",
    tag = "requests",
    request_body = SubmitRequestPayload,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, body = AssetRequest),
        (status = 400, description = "Ativo sem estoque"),
        (status = 403, description = "E-mail não confere com o token"),
        (status = 404, description = "Usuário ou ativo não encontrado")
    )
)]
pub async fn request_asset(
    State(app_state): State<AppState>,
    AuthenticatedUser(email): AuthenticatedUser,
    Json(payload): Json<SubmitRequestPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let request = app_state
        .request_service
        .submit_request(&email, &payload)
        .await?;
    Ok((StatusCode::CREATED, Json(request)))
}

// Solicitações endereçadas ao RH autenticado.
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    params(RequestListQuery),
    security(("bearer_auth" = [])),
    responses((status = 200, body = [AssetRequest]))
)]
pub async fn get_requests(
    State(app_state): State<AppState>,
    RequireHr(hr): RequireHr,
    Query(query): Query<RequestListQuery>,
) -> Result<Json<Vec<AssetRequest>>, AppError> {
    let requests = app_state
        .request_service
        .requests_for_hr(&hr.email, query.search.as_deref())
        .await?;
    Ok(Json(requests))
}

#[utoipa::path(
    get,
    path = "/my-requests",
    tag = "requests",
    params(MyRequestsQuery),
    security(("bearer_auth" = [])),
    responses((status = 200, body = [AssetRequest]), (status = 403, description = "E-mail não confere com o token"))
)]
pub async fn get_my_requests(
    State(app_state): State<AppState>,
    AuthenticatedUser(email): AuthenticatedUser,
    Query(query): Query<MyRequestsQuery>,
) -> Result<Json<Vec<AssetRequest>>, AppError> {
    // Operação self-service: a listagem é sempre do dono do token.
    if query.email != email {
        return Err(AppError::EmailMismatch);
    }

    let requests = app_state
        .request_service
        .requests_for_requester(&email, query.search.as_deref())
        .await?;
    Ok(Json(requests))
}

// Aprovação: roda o fluxo completo (equipe, limite, estoque) numa transação.
#[utoipa::path(
    patch,
    path = "/requests/{id}/approve",
    tag = "requests",
    params(("id" = Uuid, Path)),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, body = WorkflowResponse),
        (status = 400, description = "Limite de assentos atingido ou ativo sem estoque"),
        (status = 404, description = "Solicitação não encontrada")
    )
)]
pub async fn approve_request(
    State(app_state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkflowResponse>, AppError> {
    let modified_count = app_state.request_service.approve_request(id).await?;
    Ok(Json(WorkflowResponse {
        message: "Request Approved Successfully".to_string(),
        modified_count,
    }))
}

// Decisão por status textual: "approved" roda o fluxo completo,
// "denied" só troca o status.
#[utoipa::path(
    patch,
    path = "/approve-request/{id}",
    tag = "requests",
    params(("id" = Uuid, Path)),
    request_body = DecideRequestPayload,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, body = WorkflowResponse),
        (status = 400, description = "Status inválido"),
        (status = 404, description = "Solicitação não encontrada")
    )
)]
pub async fn decide_request(
    State(app_state): State<AppState>,
    RequireHr(_hr): RequireHr,
    Path(id): Path<Uuid>,
    Json(payload): Json<DecideRequestPayload>,
) -> Result<Json<WorkflowResponse>, AppError> {
    let modified_count = app_state
        .request_service
        .decide_request(id, &payload.status)
        .await?;
    Ok(Json(WorkflowResponse {
        message: "Request updated successfully".to_string(),
        modified_count,
    }))
}

// Atribuição direta pelo RH: nasce aprovada, com a mesma contabilidade
// de equipe e estoque da aprovação normal.
#[utoipa::path(
    post,
    path = "/assign-asset",
    tag = "requests",
    request_body = AssignAssetPayload,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, body = AssetRequest),
        (status = 400, description = "Limite de assentos atingido ou ativo sem estoque"),
        (status = 403, description = "Ativo de outro RH"),
        (status = 404, description = "Ativo não encontrado")
    )
)]
pub async fn assign_asset(
    State(app_state): State<AppState>,
    RequireHr(hr): RequireHr,
    Json(payload): Json<AssignAssetPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let request = app_state
        .request_service
        .assign_direct(&hr.email, &payload)
        .await?;
    Ok((StatusCode::CREATED, Json(request)))
}
