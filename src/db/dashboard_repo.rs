// src/db/dashboard_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::dashboard::{AssetTypeCount, TopRequestedAsset},
};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 1. Distribuição dos ativos do RH por tipo
    pub async fn asset_type_distribution(
        &self,
        hr_email: &str,
    ) -> Result<Vec<AssetTypeCount>, AppError> {
        let distribution = sqlx::query_as::<_, AssetTypeCount>(
            r#"
            SELECT product_type, COUNT(*) AS count
            FROM assets
            WHERE hr_email = $1
            GROUP BY product_type
            ORDER BY count DESC
            "#,
        )
        .bind(hr_email)
        .fetch_all(&self.pool)
        .await?;
        Ok(distribution)
    }

    // 2. Top 5 ativos mais solicitados do RH
    pub async fn top_requested_assets(
        &self,
        hr_email: &str,
    ) -> Result<Vec<TopRequestedAsset>, AppError> {
        let top = sqlx::query_as::<_, TopRequestedAsset>(
            r#"
            SELECT asset_name, COUNT(*) AS request_count
            FROM requests
            WHERE hr_email = $1
            GROUP BY asset_name
            ORDER BY request_count DESC, asset_name ASC
            LIMIT 5
            "#,
        )
        .bind(hr_email)
        .fetch_all(&self.pool)
        .await?;
        Ok(top)
    }
}
