use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::errors::ApiError;
use crate::services::crypto;
use crate::types::dto::auth::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};

/// Authentication API endpoints
///
/// Stateless by design: the stored hash and per-user secret arrive with the
/// login request, and signup only mints fresh credential material. User row
/// creation happens in the external signup flow.
pub struct AuthApi;

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Verify a password against its stored hash and secret
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<LoginResponse>, ApiError> {
        let LoginRequest {
            email,
            password,
            hashed_password,
            secret,
        } = body.0;

        // All four fields must be present before any computation
        let (password, hashed_password, secret) = match (email, password, hashed_password, secret) {
            (Some(e), Some(p), Some(h), Some(s))
                if !e.is_empty() && !p.is_empty() && !h.is_empty() && !s.is_empty() =>
            {
                (p, h, s)
            }
            _ => return Err(ApiError::missing_fields()),
        };

        if !crypto::verify_password(&password, &hashed_password, &secret) {
            return Err(ApiError::invalid_credentials());
        }

        Ok(Json(LoginResponse {
            status: "success".to_string(),
        }))
    }

    /// Generate credential material for a new account
    #[oai(path = "/signup", method = "post", tag = "AuthTags::Authentication")]
    async fn signup(&self, body: Json<SignupRequest>) -> Result<Json<SignupResponse>, ApiError> {
        let SignupRequest {
            email,
            password,
            username,
        } = body.0;

        let password = match (email, password, username) {
            (Some(e), Some(p), Some(u)) if !e.is_empty() && !p.is_empty() && !u.is_empty() => p,
            _ => return Err(ApiError::missing_fields()),
        };

        let secret = crypto::generate_secret();
        let hashed_password = crypto::hash_password(&password, &secret);

        Ok(Json(SignupResponse {
            status: "success".to_string(),
            hashed_password,
            secret,
        }))
    }
}
