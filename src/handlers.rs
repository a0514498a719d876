pub mod auth;
pub mod assets;
pub mod requests;
pub mod employees;
pub mod finance;
pub mod dashboard;
