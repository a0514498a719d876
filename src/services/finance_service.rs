// src/services/finance_service.rs

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{FinanceRepository, UserRepository},
    models::finance::{CheckoutSessionResponse, Package, Payment},
    services::checkout_gateway::{CheckoutGateway, CreateSessionParams},
};

/// Resultado da confirmação: processado agora, ou já processado antes
/// (a confirmação é idempotente por session_id).
pub enum PaymentConfirmation {
    Processed(Payment),
    AlreadyProcessed,
}

#[derive(Clone)]
pub struct FinanceService {
    finance_repo: FinanceRepository,
    user_repo: UserRepository,
    gateway: Arc<dyn CheckoutGateway>,
    pool: PgPool,
}

impl FinanceService {
    pub fn new(
        finance_repo: FinanceRepository,
        user_repo: UserRepository,
        gateway: Arc<dyn CheckoutGateway>,
        pool: PgPool,
    ) -> Self {
        Self {
            finance_repo,
            user_repo,
            gateway,
            pool,
        }
    }

    pub async fn list_packages(&self) -> Result<Vec<Package>, AppError> {
        self.finance_repo.list_packages().await
    }

    pub async fn create_checkout_session(
        &self,
        customer_email: &str,
        package_id: Uuid,
    ) -> Result<CheckoutSessionResponse, AppError> {
        let package = self
            .finance_repo
            .find_package(package_id)
            .await?
            .ok_or(AppError::PackageNotFound)?;

        let params = CreateSessionParams {
            amount_cents: price_in_cents(package.price)?,
            currency: "usd".to_string(),
            product_name: package.name.clone(),
            package_id: package.id.to_string(),
            customer_email: customer_email.to_string(),
            max_employees: package.max_employees,
        };

        let session = self.gateway.create_session(&params).await?;
        Ok(CheckoutSessionResponse {
            id: session.id,
            url: session.url,
        })
    }

    /// Converte a confirmação do provedor em aumento de limite, exatamente
    /// uma vez por sessão de pagamento.
    pub async fn confirm_payment(
        &self,
        caller_email: &str,
        session_id: &str,
    ) -> Result<PaymentConfirmation, AppError> {
        // Caminho rápido da idempotência; a UNIQUE do banco cobre corridas.
        if self
            .finance_repo
            .find_payment_by_session(session_id)
            .await?
            .is_some()
        {
            return Ok(PaymentConfirmation::AlreadyProcessed);
        }

        let session = self.gateway.retrieve_session(session_id).await?;
        if !session.is_paid() {
            return Err(AppError::PaymentNotVerified);
        }

        let meta = &session.metadata;
        // Confirmação é self-service: a sessão tem que ser do chamador.
        if meta.email != caller_email {
            return Err(AppError::EmailMismatch);
        }

        let package_id = Uuid::parse_str(&meta.package_id).map_err(|e| {
            AppError::InternalServerError(anyhow::anyhow!(
                "packageId inválido nos metadados da sessão: {e}"
            ))
        })?;
        let max_employees: i32 = meta.max_employees.parse().map_err(|e| {
            AppError::InternalServerError(anyhow::anyhow!(
                "maxEmployees inválido nos metadados da sessão: {e}"
            ))
        })?;

        let amount = Decimal::from(session.amount_total.unwrap_or_default()) / Decimal::ONE_HUNDRED;
        let currency = session.currency.clone().unwrap_or_else(|| "usd".to_string());

        let mut tx = self.pool.begin().await?;

        // O limite de assentos passa a ser o do pacote comprado.
        self.user_repo
            .set_max_employees(&mut *tx, caller_email, max_employees)
            .await?;

        let inserted = self
            .finance_repo
            .insert_payment(&mut *tx, session_id, caller_email, package_id, amount, &currency)
            .await?;

        tx.commit().await?;

        match inserted {
            Some(payment) => Ok(PaymentConfirmation::Processed(payment)),
            // Outro callback venceu a corrida entre a checagem e o insert.
            None => Ok(PaymentConfirmation::AlreadyProcessed),
        }
    }

    pub async fn payment_history(&self, email: &str) -> Result<Vec<Payment>, AppError> {
        self.finance_repo.history_for_email(email).await
    }
}

/// O provedor cobra em centavos inteiros.
fn price_in_cents(price: Decimal) -> Result<i64, AppError> {
    (price * Decimal::ONE_HUNDRED)
        .trunc()
        .to_i64()
        .ok_or_else(|| {
            AppError::InternalServerError(anyhow::anyhow!("preço do pacote fora do intervalo"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn whole_dollar_prices_convert_to_cents() {
        assert_eq!(price_in_cents(d("5.00")).unwrap(), 500);
        assert_eq!(price_in_cents(d("15.00")).unwrap(), 1500);
    }

    #[test]
    fn fractional_prices_truncate_to_cents() {
        assert_eq!(price_in_cents(d("8.99")).unwrap(), 899);
        assert_eq!(price_in_cents(d("0.1")).unwrap(), 10);
    }
}
