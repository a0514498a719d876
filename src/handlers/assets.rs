// src/handlers/assets.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::roles::RequireHr,
    models::asset::{
        Asset, AssetCatalogQuery, CountResponse, CreateAssetPayload, MyAssetsQuery,
        UpdateAssetPayload,
    },
};

#[utoipa::path(
    post,
    path = "/assets",
    tag = "assets",
    request_body = CreateAssetPayload,
    security(("bearer_auth" = [])),
    responses((status = 201, body = Asset), (status = 403, description = "Papel ou identidade incorretos"))
)]
pub async fn create_asset(
    State(app_state): State<AppState>,
    RequireHr(hr): RequireHr,
    Json(payload): Json<CreateAssetPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let asset = app_state
        .asset_service
        .create_asset(&hr.email, &payload)
        .await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

// Catálogo público, com busca, filtros e paginação.
#[utoipa::path(
    get,
    path = "/all-assets",
    tag = "assets",
    params(AssetCatalogQuery),
    responses((status = 200, body = [Asset]))
)]
pub async fn get_all_assets(
    State(app_state): State<AppState>,
    Query(query): Query<AssetCatalogQuery>,
) -> Result<Json<Vec<Asset>>, AppError> {
    let assets = app_state.asset_service.catalog(&query).await?;
    Ok(Json(assets))
}

// Companheiro da paginação: total sob os mesmos filtros.
#[utoipa::path(
    get,
    path = "/assets-count",
    tag = "assets",
    params(AssetCatalogQuery),
    responses((status = 200, body = CountResponse))
)]
pub async fn get_assets_count(
    State(app_state): State<AppState>,
    Query(query): Query<AssetCatalogQuery>,
) -> Result<Json<CountResponse>, AppError> {
    let count = app_state.asset_service.catalog_count(&query).await?;
    Ok(Json(CountResponse { count }))
}

#[utoipa::path(
    get,
    path = "/my-assets",
    tag = "assets",
    params(MyAssetsQuery),
    security(("bearer_auth" = [])),
    responses((status = 200, body = [Asset]))
)]
pub async fn get_my_assets(
    State(app_state): State<AppState>,
    RequireHr(hr): RequireHr,
    Query(query): Query<MyAssetsQuery>,
) -> Result<Json<Vec<Asset>>, AppError> {
    let assets = app_state
        .asset_service
        .my_assets(&hr.email, query.search.as_deref())
        .await?;
    Ok(Json(assets))
}

#[utoipa::path(
    patch,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = Uuid, Path)),
    request_body = UpdateAssetPayload,
    security(("bearer_auth" = [])),
    responses((status = 200, body = Asset), (status = 404, description = "Ativo não encontrado"))
)]
pub async fn update_asset(
    State(app_state): State<AppState>,
    RequireHr(hr): RequireHr,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAssetPayload>,
) -> Result<Json<Asset>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let asset = app_state
        .asset_service
        .update_asset(&hr.email, id, &payload)
        .await?;
    Ok(Json(asset))
}

#[utoipa::path(
    delete,
    path = "/assets/{id}",
    tag = "assets",
    params(("id" = Uuid, Path)),
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Ativo removido"), (status = 404, description = "Ativo não encontrado"))
)]
pub async fn delete_asset(
    State(app_state): State<AppState>,
    RequireHr(hr): RequireHr,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.asset_service.delete_asset(&hr.email, id).await?;
    Ok(Json(json!({ "message": "Asset deleted successfully" })))
}
