pub mod auth;
pub mod asset_service;
pub mod checkout_gateway;
pub mod dashboard_service;
pub mod finance_service;
pub mod request_service;
