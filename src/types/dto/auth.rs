use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Request model for login
///
/// The stored hash and per-user secret travel with the request; the server
/// only recomputes and compares the HMAC.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email used for login
    pub email: Option<String>,

    /// Plaintext password to verify
    pub password: Option<String>,

    /// Stored password hash (base64 HMAC-SHA256)
    #[oai(rename = "hashedPassword")]
    #[serde(rename = "hashedPassword")]
    pub hashed_password: Option<String>,

    /// Per-user secret used as the HMAC key (base64)
    pub secret: Option<String>,
}

/// Response model for login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Always "success" on successful verification
    pub status: String,
}

/// Request model for signup
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Email for the new account
    pub email: Option<String>,

    /// Plaintext password to hash
    pub password: Option<String>,

    /// Display name for the new account
    pub username: Option<String>,
}

/// Response model for signup: freshly generated credential material.
/// User row creation itself happens in the external signup flow.
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    pub status: String,

    /// base64 HMAC-SHA256 of the password under the new secret
    #[oai(rename = "hashedPassword")]
    #[serde(rename = "hashedPassword")]
    pub hashed_password: String,

    /// Newly generated per-user secret (base64 of 32 random bytes)
    pub secret: String,
}
