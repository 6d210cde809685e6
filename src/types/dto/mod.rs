// Request/response models - poem-openapi objects
pub mod admin;
pub mod auth;
pub mod common;
pub mod employee;
