//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Failures of the user registration flow.
///
/// The `Display` text of each variant is the exact message shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("name missing")]
    NameMissing,

    #[error("user {0} already exists")]
    AlreadyExists(String),

    // Server errors (5xx)
    #[error("error checking user: {0}")]
    CheckFailed(String),

    #[error("unexpected: {0}")]
    CreateFailed(String),

    /// Carries the requested name, not the store error text
    #[error("error retrieving user: {0}")]
    ReloadFailed(String),
}

impl AppError {
    /// HTTP status this error is rendered with
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NameMissing => StatusCode::BAD_REQUEST,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::CheckFailed(_) | AppError::CreateFailed(_) | AppError::ReloadFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Machine-readable error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NameMissing => "name_missing",
            AppError::AlreadyExists(_) => "user_exists",
            AppError::CheckFailed(_) => "check_failed",
            AppError::CreateFailed(_) => "unexpected",
            AppError::ReloadFailed(_) => "reload_failed",
        }
    }

    /// Client-facing message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error_code = self.error_code(), "{}", self);
        } else {
            tracing::debug!(error_code = self.error_code(), "{}", self);
        }

        let body = ErrorResponse {
            error: self.message(),
            error_code: self.error_code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_message_per_kind() {
        let cases = [
            (AppError::NameMissing, 400, "name missing"),
            (
                AppError::CheckFailed("caboom".to_string()),
                500,
                "error checking user: caboom",
            ),
            (
                AppError::AlreadyExists("bert".to_string()),
                409,
                "user bert already exists",
            ),
            (
                AppError::CreateFailed("caboom".to_string()),
                500,
                "unexpected: caboom",
            ),
            (
                AppError::ReloadFailed("bert".to_string()),
                500,
                "error retrieving user: bert",
            ),
        ];

        for (error, status, message) in cases {
            assert_eq!(error.status_code().as_u16(), status);
            assert_eq!(error.message(), message);
        }
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = AppError::AlreadyExists("bert".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "user bert already exists");
        assert_eq!(json["error_code"], "user_exists");
    }
}
