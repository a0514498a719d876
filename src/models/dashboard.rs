// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::asset::AssetProductType;

// Distribuição dos ativos de um RH por tipo de produto.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetTypeCount {
    pub product_type: AssetProductType,
    pub count: i64,
}

// Os 5 ativos mais solicitados de um RH.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopRequestedAsset {
    pub asset_name: String,
    pub request_count: i64,
}
