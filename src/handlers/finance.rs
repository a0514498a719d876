// src/handlers/finance.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, roles::RequireHr},
    models::finance::{
        CheckoutPayload, CheckoutSessionResponse, ConfirmPaymentPayload, Package, Payment,
        PaymentHistoryQuery,
    },
    services::finance_service::PaymentConfirmation,
};

#[utoipa::path(
    get,
    path = "/packages",
    tag = "finance",
    responses((status = 200, body = [Package]))
)]
pub async fn get_packages(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Package>>, AppError> {
    let packages = app_state.finance_service.list_packages().await?;
    Ok(Json(packages))
}

#[utoipa::path(
    post,
    path = "/create-checkout-session",
    tag = "finance",
    request_body = CheckoutPayload,
    security(("bearer_auth" = [])),
    responses((status = 200, body = CheckoutSessionResponse), (status = 404, description = "Pacote não encontrado"))
)]
pub async fn create_checkout_session(
    State(app_state): State<AppState>,
    RequireHr(hr): RequireHr,
    Json(payload): Json<CheckoutPayload>,
) -> Result<Json<CheckoutSessionResponse>, AppError> {
    let session = app_state
        .finance_service
        .create_checkout_session(&hr.email, payload.package_id)
        .await?;
    Ok(Json(session))
}

// Confirmação idempotente: a mesma sessão nunca é processada duas vezes.
#[utoipa::path(
    post,
    path = "/payments/confirm",
    tag = "finance",
    request_body = ConfirmPaymentPayload,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, body = Payment),
        (status = 200, description = "Sessão já processada; nada alterado"),
        (status = 400, description = "Pagamento não verificado no provedor")
    )
)]
pub async fn confirm_payment(
    State(app_state): State<AppState>,
    AuthenticatedUser(email): AuthenticatedUser,
    Json(payload): Json<ConfirmPaymentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let outcome = app_state
        .finance_service
        .confirm_payment(&email, &payload.session_id)
        .await?;

    let response = match outcome {
        PaymentConfirmation::Processed(payment) => {
            (StatusCode::CREATED, Json(payment)).into_response()
        }
        PaymentConfirmation::AlreadyProcessed => {
            Json(json!({ "message": "already processed" })).into_response()
        }
    };
    Ok(response)
}

#[utoipa::path(
    get,
    path = "/payments",
    tag = "finance",
    params(PaymentHistoryQuery),
    security(("bearer_auth" = [])),
    responses((status = 200, body = [Payment]), (status = 403, description = "E-mail não confere com o token"))
)]
pub async fn get_payment_history(
    State(app_state): State<AppState>,
    AuthenticatedUser(email): AuthenticatedUser,
    Query(query): Query<PaymentHistoryQuery>,
) -> Result<Json<Vec<Payment>>, AppError> {
    // Histórico é sempre do dono do token.
    if query.email != email {
        return Err(AppError::EmailMismatch);
    }

    let payments = app_state.finance_service.payment_history(&email).await?;
    Ok(Json(payments))
}
