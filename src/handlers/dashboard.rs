// src/handlers/dashboard.rs

use axum::{Json, extract::State};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::roles::RequireHr,
    models::dashboard::{AssetTypeCount, TopRequestedAsset},
};

// Distribuição dos ativos do RH por tipo de produto.
#[utoipa::path(
    get,
    path = "/reports/asset-types",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses((status = 200, body = [AssetTypeCount]))
)]
pub async fn get_asset_type_distribution(
    State(app_state): State<AppState>,
    RequireHr(hr): RequireHr,
) -> Result<Json<Vec<AssetTypeCount>>, AppError> {
    let distribution = app_state
        .dashboard_service
        .asset_type_distribution(&hr.email)
        .await?;
    Ok(Json(distribution))
}

// Os 5 ativos mais solicitados do RH.
#[utoipa::path(
    get,
    path = "/reports/top-requested",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses((status = 200, body = [TopRequestedAsset]))
)]
pub async fn get_top_requested_assets(
    State(app_state): State<AppState>,
    RequireHr(hr): RequireHr,
) -> Result<Json<Vec<TopRequestedAsset>>, AppError> {
    let top = app_state
        .dashboard_service
        .top_requested_assets(&hr.email)
        .await?;
    Ok(Json(top))
}
