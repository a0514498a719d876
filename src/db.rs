pub mod user_repo;
pub use user_repo::UserRepository;
pub mod asset_repo;
pub use asset_repo::AssetRepository;
pub mod request_repo;
pub use request_repo::RequestRepository;
pub mod employee_repo;
pub use employee_repo::EmployeeRepository;
pub mod finance_repo;
pub use finance_repo::FinanceRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
