use serde::Serialize;
use utoipa::ToSchema;

/// Structured error response returned by every failing endpoint. Carries a
/// machine-readable code and a request ID for correlation with server logs;
/// never carries user text.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    /// Machine-readable error code (e.g. "rate_limited", "internal_error")
    pub error: String,
    /// Human-readable description of what went wrong
    pub message: String,
    /// Request ID for tracing and debugging
    pub request_id: String,
}

/// Error codes used across the API
pub mod codes {
    pub const RATE_LIMITED: &str = "rate_limited";
    pub const INTERNAL_ERROR: &str = "internal_error";
}
