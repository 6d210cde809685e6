use poem_openapi::Object;

/// Response body for the health probe
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// "ok" while the service is up
    pub status: String,

    /// Time of the probe, RFC 3339
    pub timestamp: String,
}

/// Error envelope shared by every failing endpoint.
///
/// Each `ApiError` variant (validation, missing auth or identity header,
/// bad credentials, admin required, user not found, internal) carries one
/// of these with a machine-readable `error` tag and a message safe to show
/// the caller.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Machine-readable error tag, e.g. "admin_required"
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code mirrored into the body
    pub status_code: u16,
}
