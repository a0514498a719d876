// src/services/asset_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::AssetRepository,
    models::asset::{Asset, AssetCatalogQuery, CreateAssetPayload, UpdateAssetPayload},
};

#[derive(Clone)]
pub struct AssetService {
    asset_repo: AssetRepository,
}

impl AssetService {
    pub fn new(asset_repo: AssetRepository) -> Self {
        Self { asset_repo }
    }

    /// Registra um ativo em nome do RH autenticado. O papel `hr` já foi
    /// exigido na borda; aqui só amarramos o dono ao token.
    pub async fn create_asset(
        &self,
        caller_email: &str,
        payload: &CreateAssetPayload,
    ) -> Result<Asset, AppError> {
        if payload.hr_email != caller_email {
            return Err(AppError::EmailMismatch);
        }
        self.asset_repo.create_asset(payload).await
    }

    pub async fn catalog(&self, query: &AssetCatalogQuery) -> Result<Vec<Asset>, AppError> {
        self.asset_repo.list_catalog(query).await
    }

    pub async fn catalog_count(&self, query: &AssetCatalogQuery) -> Result<i64, AppError> {
        self.asset_repo.count_catalog(query).await
    }

    pub async fn my_assets(
        &self,
        hr_email: &str,
        search: Option<&str>,
    ) -> Result<Vec<Asset>, AppError> {
        self.asset_repo.list_by_hr(hr_email, search).await
    }

    pub async fn update_asset(
        &self,
        hr_email: &str,
        id: Uuid,
        payload: &UpdateAssetPayload,
    ) -> Result<Asset, AppError> {
        self.asset_repo
            .update_asset(
                id,
                hr_email,
                payload.product_name.as_deref(),
                payload.product_type,
                payload.quantity,
            )
            .await?
            .ok_or(AppError::AssetNotFound)
    }

    /// Apaga um ativo do próprio RH; sem linha afetada é porque o ativo
    /// não existe ou pertence a outro RH.
    pub async fn delete_asset(&self, hr_email: &str, id: Uuid) -> Result<(), AppError> {
        let deleted = self.asset_repo.delete_asset(id, hr_email).await?;
        if deleted == 0 {
            return Err(AppError::AssetNotFound);
        }
        Ok(())
    }
}
