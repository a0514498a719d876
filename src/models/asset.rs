// src/models/asset.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "asset_product_type")]
pub enum AssetProductType {
    Returnable,
    #[serde(rename = "Non-returnable")]
    #[sqlx(rename = "Non-returnable")]
    NonReturnable,
}

// Um item físico/digital registrado por um RH.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: Uuid,
    pub hr_email: String,
    pub product_name: String,
    pub product_type: AssetProductType,
    pub quantity: i32,
    pub date_added: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetPayload {
    #[validate(email(message = "A valid hrEmail is required."))]
    pub hr_email: String,

    #[validate(length(min = 1, message = "Product name is required."))]
    pub product_name: String,

    pub product_type: AssetProductType,

    #[validate(range(min = 0, message = "Quantity cannot be negative."))]
    pub quantity: i32,
}

// Merge-patch de um ativo: só os campos presentes são atualizados.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetPayload {
    #[validate(length(min = 1, message = "Product name cannot be empty."))]
    pub product_name: Option<String>,
    pub product_type: Option<AssetProductType>,
    #[validate(range(min = 0, message = "Quantity cannot be negative."))]
    pub quantity: Option<i32>,
}

// Filtros do catálogo público (busca + paginação).
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AssetCatalogQuery {
    // Busca por substring no nome do produto (case-insensitive).
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<AssetProductType>,
    // Quando true, só ativos com estoque.
    pub available: Option<bool>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl AssetCatalogQuery {
    pub const DEFAULT_LIMIT: u32 = 10;

    pub fn limit(&self) -> i64 {
        i64::from(self.limit.unwrap_or(Self::DEFAULT_LIMIT))
    }

    // Páginas começam em 1.
    pub fn offset(&self) -> i64 {
        let page = self.page.unwrap_or(1).max(1);
        i64::from(page - 1) * self.limit()
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct MyAssetsQuery {
    pub search: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CountResponse {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_type_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&AssetProductType::NonReturnable).unwrap(),
            "\"Non-returnable\""
        );
        let parsed: AssetProductType = serde_json::from_str("\"Returnable\"").unwrap();
        assert_eq!(parsed, AssetProductType::Returnable);
    }

    #[test]
    fn pagination_defaults_to_first_page_of_ten() {
        let query: AssetCatalogQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit(), 10);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn pagination_offset_skips_previous_pages() {
        let query: AssetCatalogQuery =
            serde_json::from_str(r#"{"page": 3, "limit": 8}"#).unwrap();
        assert_eq!(query.limit(), 8);
        assert_eq!(query.offset(), 16);
    }

    #[test]
    fn pagination_treats_page_zero_as_first() {
        let query: AssetCatalogQuery = serde_json::from_str(r#"{"page": 0}"#).unwrap();
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn create_asset_rejects_negative_quantity() {
        let payload: CreateAssetPayload = serde_json::from_str(
            r#"{"hrEmail": "hr@corp.com", "productName": "Laptop", "productType": "Returnable", "quantity": -1}"#,
        )
        .unwrap();
        assert!(payload.validate().is_err());
    }
}
