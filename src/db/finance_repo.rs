// src/db/finance_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::finance::{Package, Payment},
};

#[derive(Clone)]
pub struct FinanceRepository {
    pool: PgPool,
}

impl FinanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_packages(&self) -> Result<Vec<Package>, AppError> {
        let packages =
            sqlx::query_as::<_, Package>("SELECT * FROM packages ORDER BY max_employees ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(packages)
    }

    pub async fn find_package(&self, id: Uuid) -> Result<Option<Package>, AppError> {
        let package = sqlx::query_as::<_, Package>("SELECT * FROM packages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(package)
    }

    // Guarda de idempotência: um registro por sessão do provedor.
    pub async fn find_payment_by_session(
        &self,
        session_id: &str,
    ) -> Result<Option<Payment>, AppError> {
        let payment = sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE session_id = $1")
            .bind(session_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(payment)
    }

    /// Insere o pagamento. Sob callbacks concorrentes a UNIQUE de session_id
    /// decide: o perdedor recebe None (já processado).
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_payment<'e, E>(
        &self,
        executor: E,
        session_id: &str,
        email: &str,
        package_id: Uuid,
        amount: Decimal,
        currency: &str,
    ) -> Result<Option<Payment>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (session_id, email, package_id, amount, currency)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (session_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(session_id)
        .bind(email)
        .bind(package_id)
        .bind(amount)
        .bind(currency)
        .fetch_optional(executor)
        .await?;
        Ok(payment)
    }

    /// Histórico deduplicado por pacote: o pagamento mais recente de cada um.
    pub async fn history_for_email(&self, email: &str) -> Result<Vec<Payment>, AppError> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"
            SELECT DISTINCT ON (package_id) *
            FROM payments
            WHERE email = $1
            ORDER BY package_id, paid_at DESC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(payments)
    }
}
