// src/db/user_repo.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    models::user::{CreateUserPayload, User},
};

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Aceita um executor porque também roda dentro de transações
    // (leitura do limite de assentos na aprovação).
    pub async fn find_by_email<'e, E>(
        &self,
        executor: E,
        email: &str,
    ) -> Result<Option<User>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(executor)
            .await?;
        Ok(user)
    }

    /// Cria a conta. Retorna None se o e-mail já estiver em uso
    /// (a unicidade do banco é a guarda autoritativa).
    pub async fn create_user(&self, payload: &CreateUserPayload) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, role, company_name, company_logo, max_employees)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (email) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(payload.role)
        .bind(payload.company_name.as_deref())
        .bind(payload.company_logo.as_deref())
        .bind(payload.max_employees)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Merge-patch do perfil: campos ausentes mantêm o valor atual.
    pub async fn update_profile(
        &self,
        email: &str,
        name: Option<&str>,
        company_name: Option<&str>,
        company_logo: Option<&str>,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                company_name = COALESCE($3, company_name),
                company_logo = COALESCE($4, company_logo),
                updated_at = now()
            WHERE email = $1
            RETURNING *
            "#,
        )
        .bind(email)
        .bind(name)
        .bind(company_name)
        .bind(company_logo)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Define o limite de assentos do comprador com o limite do pacote pago.
    pub async fn set_max_employees<'e, E>(
        &self,
        executor: E,
        email: &str,
        max_employees: i32,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result =
            sqlx::query("UPDATE users SET max_employees = $2, updated_at = now() WHERE email = $1")
                .bind(email)
                .bind(max_employees)
                .execute(executor)
                .await?;
        Ok(result.rows_affected())
    }
}
