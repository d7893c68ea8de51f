use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use koan_core::error::{ApiError, codes};

/// Internal error type that converts to structured API responses.
///
/// Composition itself is total over strings, so the only reachable failures
/// are throttling and infrastructure problems around the handler.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Too many requests from one client within the window (429)
    #[error("rate limit exceeded")]
    RateLimited,
    /// Internal error (500); detail is logged, never sent to the caller
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::now_v7().to_string();

        let (status, api_error) = match self {
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                ApiError {
                    error: codes::RATE_LIMITED.to_string(),
                    message: "Rate limit exceeded".to_string(),
                    request_id,
                },
            ),
            AppError::Internal(msg) => {
                tracing::error!(request_id = %request_id, "Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError {
                        error: codes::INTERNAL_ERROR.to_string(),
                        message: "An internal error occurred".to_string(),
                        request_id,
                    },
                )
            }
        };

        (status, Json(api_error)).into_response()
    }
}
