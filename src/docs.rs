// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth / Users ---
        handlers::auth::issue_jwt,
        handlers::auth::create_user,
        handlers::auth::get_role,
        handlers::auth::update_profile,

        // --- Assets ---
        handlers::assets::create_asset,
        handlers::assets::get_all_assets,
        handlers::assets::get_assets_count,
        handlers::assets::get_my_assets,
        handlers::assets::update_asset,
        handlers::assets::delete_asset,

        // --- Requests ---
        handlers::requests::request_asset,
        handlers::requests::get_requests,
        handlers::requests::get_my_requests,
        handlers::requests::approve_request,
        handlers::requests::decide_request,
        handlers::requests::assign_asset,

        // --- Employees ---
        handlers::employees::get_employees,
        handlers::employees::remove_employee,

        // --- Finance ---
        handlers::finance::get_packages,
        handlers::finance::create_checkout_session,
        handlers::finance::confirm_payment,
        handlers::finance::get_payment_history,

        // --- Reports ---
        handlers::dashboard::get_asset_type_distribution,
        handlers::dashboard::get_top_requested_assets,
    ),
    components(schemas(
        models::auth::IssueTokenPayload,
        models::auth::AuthResponse,
        models::user::User,
        models::user::UserRole,
        models::user::CreateUserPayload,
        models::user::UpdateProfilePayload,
        models::user::RoleResponse,
        models::asset::Asset,
        models::asset::AssetProductType,
        models::asset::CreateAssetPayload,
        models::asset::UpdateAssetPayload,
        models::asset::CountResponse,
        models::request::AssetRequest,
        models::request::RequestStatus,
        models::request::SubmitRequestPayload,
        models::request::DecideRequestPayload,
        models::request::AssignAssetPayload,
        models::request::WorkflowResponse,
        models::employee::EmployeeMembership,
        models::employee::RemovalOutcome,
        models::finance::Package,
        models::finance::Payment,
        models::finance::CheckoutPayload,
        models::finance::ConfirmPaymentPayload,
        models::finance::CheckoutSessionResponse,
        models::dashboard::AssetTypeCount,
        models::dashboard::TopRequestedAsset,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Contas e tokens de sessão"),
        (name = "assets", description = "Catálogo e gestão de ativos"),
        (name = "requests", description = "Fluxo de solicitação e aprovação"),
        (name = "employees", description = "Equipe do RH"),
        (name = "finance", description = "Pacotes, checkout e pagamentos"),
        (name = "reports", description = "Relatórios do RH"),
    )
)]
pub struct ApiDoc;
