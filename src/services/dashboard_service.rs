// src/services/dashboard_service.rs

use crate::{
    common::error::AppError,
    db::DashboardRepository,
    models::dashboard::{AssetTypeCount, TopRequestedAsset},
};

#[derive(Clone)]
pub struct DashboardService {
    dashboard_repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(dashboard_repo: DashboardRepository) -> Self {
        Self { dashboard_repo }
    }

    pub async fn asset_type_distribution(
        &self,
        hr_email: &str,
    ) -> Result<Vec<AssetTypeCount>, AppError> {
        self.dashboard_repo.asset_type_distribution(hr_email).await
    }

    pub async fn top_requested_assets(
        &self,
        hr_email: &str,
    ) -> Result<Vec<TopRequestedAsset>, AppError> {
        self.dashboard_repo.top_requested_assets(hr_email).await
    }
}
