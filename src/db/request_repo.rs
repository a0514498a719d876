// src/db/request_repo.rs

use chrono::{DateTime, Utc};
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::request::{AssetRequest, RequestStatus},
};

#[derive(Clone)]
pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insere uma solicitação. A submissão normal entra como `pending`;
    /// a atribuição direta do RH entra já `approved` com carimbo de aprovação.
    #[allow(clippy::too_many_arguments)]
    pub async fn insert_request<'e, E>(
        &self,
        executor: E,
        asset_id: Uuid,
        asset_name: &str,
        requester_email: &str,
        requester_name: &str,
        hr_email: &str,
        status: RequestStatus,
        approved_at: Option<DateTime<Utc>>,
    ) -> Result<AssetRequest, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let request = sqlx::query_as::<_, AssetRequest>(
            r#"
            INSERT INTO requests
                (asset_id, asset_name, requester_email, requester_name, hr_email, status, approved_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(asset_id)
        .bind(asset_name)
        .bind(requester_email)
        .bind(requester_name)
        .bind(hr_email)
        .bind(status)
        .bind(approved_at)
        .fetch_one(executor)
        .await?;
        Ok(request)
    }

    pub async fn find_by_id<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<AssetRequest>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let request = sqlx::query_as::<_, AssetRequest>("SELECT * FROM requests WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(request)
    }

    pub async fn list_for_hr(
        &self,
        hr_email: &str,
        search: Option<&str>,
    ) -> Result<Vec<AssetRequest>, AppError> {
        let requests = sqlx::query_as::<_, AssetRequest>(
            r#"
            SELECT * FROM requests
            WHERE hr_email = $1
              AND ($2::text IS NULL
                   OR requester_name ILIKE '%' || $2 || '%'
                   OR requester_email ILIKE '%' || $2 || '%')
            ORDER BY requested_at DESC
            "#,
        )
        .bind(hr_email)
        .bind(search)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    pub async fn list_for_requester(
        &self,
        requester_email: &str,
        search: Option<&str>,
    ) -> Result<Vec<AssetRequest>, AppError> {
        let requests = sqlx::query_as::<_, AssetRequest>(
            r#"
            SELECT * FROM requests
            WHERE requester_email = $1
              AND ($2::text IS NULL OR asset_name ILIKE '%' || $2 || '%')
            ORDER BY requested_at DESC
            "#,
        )
        .bind(requester_email)
        .bind(search)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    pub async fn set_status<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        status: RequestStatus,
        approved_at: Option<DateTime<Utc>>,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            r#"
            UPDATE requests
            SET status = $2, approved_at = COALESCE($3, approved_at)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(approved_at)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// Solicitações `approved` de um funcionário sob um RH: são as
    /// unidades que precisam voltar ao estoque no offboarding.
    pub async fn list_approved_for_employee<'e, E>(
        &self,
        executor: E,
        requester_email: &str,
        hr_email: &str,
    ) -> Result<Vec<AssetRequest>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let requests = sqlx::query_as::<_, AssetRequest>(
            "SELECT * FROM requests WHERE requester_email = $1 AND hr_email = $2 AND status = 'approved'",
        )
        .bind(requester_email)
        .bind(hr_email)
        .fetch_all(executor)
        .await?;
        Ok(requests)
    }

    /// Nega TODAS as solicitações do funcionário sob o RH, qualquer que
    /// fosse o status anterior. Nada fica pendente após o offboarding.
    pub async fn deny_all_for_employee<'e, E>(
        &self,
        executor: E,
        requester_email: &str,
        hr_email: &str,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            "UPDATE requests SET status = 'denied' WHERE requester_email = $1 AND hr_email = $2",
        )
        .bind(requester_email)
        .bind(hr_email)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }
}
