// src/db/asset_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::asset::{Asset, AssetCatalogQuery, AssetProductType, CreateAssetPayload},
};

#[derive(Clone)]
pub struct AssetRepository {
    pool: PgPool,
}

impl AssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_asset(&self, payload: &CreateAssetPayload) -> Result<Asset, AppError> {
        let asset = sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets (hr_email, product_name, product_type, quantity)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&payload.hr_email)
        .bind(&payload.product_name)
        .bind(payload.product_type)
        .bind(payload.quantity)
        .fetch_one(&self.pool)
        .await?;
        Ok(asset)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Asset>, AppError> {
        let asset = sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(asset)
    }

    /// Carrega o ativo travando a linha (FOR UPDATE). Usado dentro das
    /// transações do fluxo de aprovação, antes de mexer no estoque.
    pub async fn find_by_id_for_update<'e, E>(
        &self,
        executor: E,
        id: Uuid,
    ) -> Result<Option<Asset>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let asset = sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(asset)
    }

    // ---
    // Catálogo público (busca + filtros + paginação)
    // ---

    pub async fn list_catalog(&self, query: &AssetCatalogQuery) -> Result<Vec<Asset>, AppError> {
        let assets = sqlx::query_as::<_, Asset>(
            r#"
            SELECT * FROM assets
            WHERE ($1::text IS NULL OR product_name ILIKE '%' || $1 || '%')
              AND ($2::asset_product_type IS NULL OR product_type = $2)
              AND (NOT $3 OR quantity > 0)
            ORDER BY quantity DESC, date_added DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(query.search.as_deref())
        .bind(query.product_type)
        .bind(query.available.unwrap_or(false))
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(assets)
    }

    // Companheiro da paginação: total sob os mesmos filtros.
    pub async fn count_catalog(&self, query: &AssetCatalogQuery) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM assets
            WHERE ($1::text IS NULL OR product_name ILIKE '%' || $1 || '%')
              AND ($2::asset_product_type IS NULL OR product_type = $2)
              AND (NOT $3 OR quantity > 0)
            "#,
        )
        .bind(query.search.as_deref())
        .bind(query.product_type)
        .bind(query.available.unwrap_or(false))
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    pub async fn list_by_hr(
        &self,
        hr_email: &str,
        search: Option<&str>,
    ) -> Result<Vec<Asset>, AppError> {
        let assets = sqlx::query_as::<_, Asset>(
            r#"
            SELECT * FROM assets
            WHERE hr_email = $1
              AND ($2::text IS NULL OR product_name ILIKE '%' || $2 || '%')
            ORDER BY date_added DESC
            "#,
        )
        .bind(hr_email)
        .bind(search)
        .fetch_all(&self.pool)
        .await?;
        Ok(assets)
    }

    /// Merge-patch de um ativo do próprio RH.
    pub async fn update_asset(
        &self,
        id: Uuid,
        hr_email: &str,
        product_name: Option<&str>,
        product_type: Option<AssetProductType>,
        quantity: Option<i32>,
    ) -> Result<Option<Asset>, AppError> {
        let asset = sqlx::query_as::<_, Asset>(
            r#"
            UPDATE assets SET
                product_name = COALESCE($3, product_name),
                product_type = COALESCE($4, product_type),
                quantity = COALESCE($5, quantity)
            WHERE id = $1 AND hr_email = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(hr_email)
        .bind(product_name)
        .bind(product_type)
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await?;
        Ok(asset)
    }

    pub async fn delete_asset(&self, id: Uuid, hr_email: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1 AND hr_email = $2")
            .bind(id)
            .bind(hr_email)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // ---
    // Mutações de estoque: só o motor de workflow chama estas.
    // ---

    /// Baixa de 1 unidade, condicionada a haver estoque.
    /// Retorna 0 linhas se o ativo estiver zerado (a transação deve abortar).
    pub async fn decrement_quantity<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result =
            sqlx::query("UPDATE assets SET quantity = quantity - 1 WHERE id = $1 AND quantity > 0")
                .bind(id)
                .execute(executor)
                .await?;
        Ok(result.rows_affected())
    }

    /// Devolução de 1 unidade ao estoque (offboarding de funcionário).
    pub async fn return_quantity<'e, E>(&self, executor: E, id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("UPDATE assets SET quantity = quantity + 1 WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
