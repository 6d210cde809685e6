// API layer - HTTP endpoints
pub mod admin;
pub mod auth;
pub mod employee;
pub mod health;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use employee::EmployeeApi;
pub use health::HealthApi;
