// src/services/checkout_gateway.rs

use async_trait::async_trait;
use serde::Deserialize;

use crate::common::error::AppError;

// Parâmetros de criação de uma sessão de checkout.
#[derive(Debug, Clone)]
pub struct CreateSessionParams {
    pub amount_cents: i64,
    pub currency: String,
    pub product_name: String,
    pub package_id: String,
    pub customer_email: String,
    pub max_employees: i32,
}

// Sessão recém-criada: id + URL de redirecionamento do cliente.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

// Estado de uma sessão consultada por id na confirmação.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySession {
    pub id: String,
    pub payment_status: String,
    pub amount_total: Option<i64>,
    pub currency: Option<String>,
    #[serde(default)]
    pub metadata: SessionMetadata,
}

impl GatewaySession {
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }
}

// Metadados gravados na criação e lidos de volta na confirmação.
// O provedor transporta tudo como string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMetadata {
    #[serde(default)]
    pub package_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub max_employees: String,
}

/// A costura com o provedor de pagamento: criar uma sessão de checkout e
/// consultar o estado de pagamento de uma sessão pelo id.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    async fn create_session(
        &self,
        params: &CreateSessionParams,
    ) -> Result<CheckoutSession, AppError>;

    async fn retrieve_session(&self, session_id: &str) -> Result<GatewaySession, AppError>;
}

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

// Implementação de produção contra a API REST do Stripe Checkout.
pub struct StripeCheckoutGateway {
    http: reqwest::Client,
    secret_key: String,
    success_url: String,
    cancel_url: String,
}

impl StripeCheckoutGateway {
    pub fn new(secret_key: String, client_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key,
            // O provedor substitui o placeholder pelo id real da sessão.
            success_url: format!("{client_url}/payment-success?session_id={{CHECKOUT_SESSION_ID}}"),
            cancel_url: format!("{client_url}/payment-cancelled"),
        }
    }
}

#[async_trait]
impl CheckoutGateway for StripeCheckoutGateway {
    async fn create_session(
        &self,
        params: &CreateSessionParams,
    ) -> Result<CheckoutSession, AppError> {
        // A API do Stripe é form-encoded, com colchetes para campos aninhados.
        let form = [
            ("mode", "payment".to_string()),
            ("success_url", self.success_url.clone()),
            ("cancel_url", self.cancel_url.clone()),
            ("customer_email", params.customer_email.clone()),
            ("line_items[0][quantity]", "1".to_string()),
            (
                "line_items[0][price_data][currency]",
                params.currency.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]",
                params.amount_cents.to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                params.product_name.clone(),
            ),
            ("metadata[packageId]", params.package_id.clone()),
            ("metadata[email]", params.customer_email.clone()),
            ("metadata[maxEmployees]", params.max_employees.to_string()),
        ];

        let session = self
            .http
            .post(format!("{STRIPE_API_BASE}/checkout/sessions"))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .json::<CheckoutSession>()
            .await?;

        Ok(session)
    }

    async fn retrieve_session(&self, session_id: &str) -> Result<GatewaySession, AppError> {
        let session = self
            .http
            .get(format!("{STRIPE_API_BASE}/checkout/sessions/{session_id}"))
            .bearer_auth(&self.secret_key)
            .send()
            .await?
            .error_for_status()?
            .json::<GatewaySession>()
            .await?;

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_paid_session() {
        let json = r#"{
            "id": "cs_test_123",
            "payment_status": "paid",
            "amount_total": 800,
            "currency": "usd",
            "metadata": {
                "packageId": "0b0e8f9e-6f3a-4f44-9c7b-0f2d7a3c1a2b",
                "email": "hr@corp.com",
                "maxEmployees": "10"
            }
        }"#;
        let session: GatewaySession = serde_json::from_str(json).unwrap();
        assert!(session.is_paid());
        assert_eq!(session.amount_total, Some(800));
        assert_eq!(session.metadata.email, "hr@corp.com");
        assert_eq!(session.metadata.max_employees, "10");
    }

    #[test]
    fn unpaid_session_is_not_paid() {
        let json = r#"{"id": "cs_test_456", "payment_status": "unpaid"}"#;
        let session: GatewaySession = serde_json::from_str(json).unwrap();
        assert!(!session.is_paid());
        assert_eq!(session.metadata.package_id, "");
    }
}
