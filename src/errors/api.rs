use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::types::dto::common::ErrorResponse;

/// Error responses shared by all endpoints
///
/// Validation and auth failures are detected at the boundary and never reach
/// the data store; store failures surface as InternalError with a safe
/// message.
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Request body is missing required fields or carries malformed values
    #[oai(status = 400)]
    ValidationError(Json<ErrorResponse>),

    /// Authorization header is missing
    #[oai(status = 401)]
    MissingAuthHeader(Json<ErrorResponse>),

    /// Neither identity header was supplied
    #[oai(status = 401)]
    MissingIdentity(Json<ErrorResponse>),

    /// Password verification failed
    #[oai(status = 401)]
    InvalidCredentials(Json<ErrorResponse>),

    /// Caller is authenticated but not an admin of any business
    #[oai(status = 403)]
    AdminRequired(Json<ErrorResponse>),

    /// Referenced user does not exist
    #[oai(status = 404)]
    UserNotFound(Json<ErrorResponse>),

    /// Store or other unexpected failure
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ApiError {
    /// Create a ValidationError with the standard missing-fields message
    pub fn missing_fields() -> Self {
        Self::validation_error("Missing required fields".to_string())
    }

    /// Create a ValidationError with a custom message
    pub fn validation_error(message: String) -> Self {
        ApiError::ValidationError(Json(ErrorResponse {
            error: "validation_error".to_string(),
            message,
            status_code: 400,
        }))
    }

    /// Create a MissingAuthHeader error
    pub fn missing_auth_header() -> Self {
        ApiError::MissingAuthHeader(Json(ErrorResponse {
            error: "missing_auth_header".to_string(),
            message: "No authorization header".to_string(),
            status_code: 401,
        }))
    }

    /// Create a MissingIdentity error
    pub fn missing_identity() -> Self {
        ApiError::MissingIdentity(Json(ErrorResponse {
            error: "missing_identity".to_string(),
            message: "User-ID or User-Email header is required".to_string(),
            status_code: 401,
        }))
    }

    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        ApiError::InvalidCredentials(Json(ErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid email or password".to_string(),
            status_code: 401,
        }))
    }

    /// Create an AdminRequired error
    pub fn admin_required() -> Self {
        ApiError::AdminRequired(Json(ErrorResponse {
            error: "admin_required".to_string(),
            message: "Admin access required".to_string(),
            status_code: 403,
        }))
    }

    /// Create a UserNotFound error
    pub fn user_not_found() -> Self {
        ApiError::UserNotFound(Json(ErrorResponse {
            error: "user_not_found".to_string(),
            message: "User not found".to_string(),
            status_code: 404,
        }))
    }

    /// Create an InternalError
    pub fn internal_error(message: String) -> Self {
        ApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ApiError::ValidationError(json) => json.0.message.clone(),
            ApiError::MissingAuthHeader(json) => json.0.message.clone(),
            ApiError::MissingIdentity(json) => json.0.message.clone(),
            ApiError::InvalidCredentials(json) => json.0.message.clone(),
            ApiError::AdminRequired(json) => json.0.message.clone(),
            ApiError::UserNotFound(json) => json.0.message.clone(),
            ApiError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
