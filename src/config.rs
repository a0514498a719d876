// src/config.rs

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, sync::Arc, time::Duration};

use crate::{
    db::{
        AssetRepository, DashboardRepository, EmployeeRepository, FinanceRepository,
        RequestRepository, UserRepository,
    },
    services::{
        asset_service::AssetService, auth::AuthService, checkout_gateway::StripeCheckoutGateway,
        dashboard_service::DashboardService, finance_service::FinanceService,
        request_service::RequestService,
    },
};

// O contexto da aplicação: montado uma vez no startup e injetado nos
// handlers via estado do axum. Nada de globais.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub user_repo: UserRepository,
    pub auth_service: AuthService,
    pub asset_service: AssetService,
    pub request_service: RequestService,
    pub finance_service: FinanceService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");
        let stripe_secret =
            env::var("STRIPE_SECRET_KEY").expect("STRIPE_SECRET_KEY deve ser definida");
        let client_url =
            env::var("CLIENT_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let user_repo = UserRepository::new(db_pool.clone());
        let asset_repo = AssetRepository::new(db_pool.clone());
        let request_repo = RequestRepository::new(db_pool.clone());
        let employee_repo = EmployeeRepository::new(db_pool.clone());
        let finance_repo = FinanceRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        let gateway = Arc::new(StripeCheckoutGateway::new(stripe_secret, &client_url));

        let auth_service = AuthService::new(user_repo.clone(), jwt_secret);
        let asset_service = AssetService::new(asset_repo.clone());
        let request_service = RequestService::new(
            request_repo,
            asset_repo,
            employee_repo,
            user_repo.clone(),
            db_pool.clone(),
        );
        let finance_service =
            FinanceService::new(finance_repo, user_repo.clone(), gateway, db_pool.clone());
        let dashboard_service = DashboardService::new(dashboard_repo);

        Ok(Self {
            db_pool,
            user_repo,
            auth_service,
            asset_service,
            request_service,
            finance_service,
            dashboard_service,
        })
    }
}
