//src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas públicas: catálogo, pacotes, criação de conta e emissão de token
    let public_routes = Router::new()
        .route("/packages", get(handlers::finance::get_packages))
        .route("/jwt", post(handlers::auth::issue_jwt))
        .route("/users", post(handlers::auth::create_user))
        .route("/users/role/{email}", get(handlers::auth::get_role))
        .route("/all-assets", get(handlers::assets::get_all_assets))
        .route("/assets-count", get(handlers::assets::get_assets_count));

    let asset_routes = Router::new()
        .route("/assets", post(handlers::assets::create_asset))
        .route("/my-assets", get(handlers::assets::get_my_assets))
        .route(
            "/assets/{id}",
            patch(handlers::assets::update_asset).delete(handlers::assets::delete_asset),
        );

    let request_routes = Router::new()
        .route("/request-asset", post(handlers::requests::request_asset))
        .route("/requests", get(handlers::requests::get_requests))
        .route("/my-requests", get(handlers::requests::get_my_requests))
        .route(
            "/requests/{id}/approve",
            patch(handlers::requests::approve_request),
        )
        .route(
            "/approve-request/{id}",
            patch(handlers::requests::decide_request),
        )
        .route("/assign-asset", post(handlers::requests::assign_asset));

    let employee_routes = Router::new()
        .route("/employees", get(handlers::employees::get_employees))
        .route(
            "/employees/{email}",
            delete(handlers::employees::remove_employee),
        );

    let finance_routes = Router::new()
        .route(
            "/create-checkout-session",
            post(handlers::finance::create_checkout_session),
        )
        .route("/payments/confirm", post(handlers::finance::confirm_payment))
        .route("/payments", get(handlers::finance::get_payment_history));

    let profile_routes =
        Router::new().route("/users/profile", patch(handlers::auth::update_profile));

    let report_routes = Router::new()
        .route(
            "/reports/asset-types",
            get(handlers::dashboard::get_asset_type_distribution),
        )
        .route(
            "/reports/top-requested",
            get(handlers::dashboard::get_top_requested_assets),
        );

    // Tudo que mexe em dados de usuário passa pelo guardião de autenticação
    let protected_routes = Router::new()
        .merge(asset_routes)
        .merge(request_routes)
        .merge(employee_routes)
        .merge(finance_routes)
        .merge(profile_routes)
        .merge(report_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/", get(|| async { "assetVerse is Running" }))
        .merge(public_routes)
        .merge(protected_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
