//! Shared Error Types
//!
//! Common error types used throughout the application.

use thiserror::Error;

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Repository error: {0}")]
    Repository(#[from] crate::repository::RepositoryError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {reason}")]
    Forbidden { reason: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create an unauthorized error
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    /// Create a forbidden error
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden {
            reason: reason.into(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            Self::Repository(err) => err.status_code(),
            Self::Validation(_) => axum::http::StatusCode::BAD_REQUEST,
            Self::NotFound(_) => axum::http::StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => axum::http::StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => axum::http::StatusCode::FORBIDDEN,
            Self::BadRequest(_) => axum::http::StatusCode::BAD_REQUEST,
            Self::Internal(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> &str {
        match self {
            Self::Repository(err) => err.user_message(),
            Self::Validation(_) => "Validation failed",
            Self::NotFound(_) => "Resource not found",
            Self::Unauthorized(_) => "Unauthorized access",
            Self::Forbidden { .. } => "Access forbidden",
            Self::BadRequest(_) => "Invalid request",
            Self::Internal(_) => "Internal server error",
        }
    }
}

/// Convert AppError to axum response
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": {
                "code": status.as_u16(),
                "message": self.user_message(),
                "details": self.to_string(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}
