// src/models/finance.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

// Pacote de assinatura: compra eleva o limite de assentos do RH.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: Uuid,
    pub name: String,
    pub max_employees: i32,
    pub price: Decimal,
}

// Um pagamento concluído; session_id é a chave de idempotência.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    pub session_id: String,
    pub email: String,
    pub package_id: Uuid,
    pub amount: Decimal,
    pub currency: String,
    pub paid_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    pub package_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPaymentPayload {
    #[validate(length(min = 1, message = "sessionId is required."))]
    pub session_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutSessionResponse {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PaymentHistoryQuery {
    pub email: String,
}
