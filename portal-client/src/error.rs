//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Convert to the workspace-wide typed error
    pub fn into_app_error(self) -> AppError {
        match self {
            Self::Http(err) => AppError::fetch_failed(err.to_string()),
            Self::InvalidResponse(msg) => AppError::invalid_response(msg),
            Self::Unauthorized => AppError::new(ErrorCode::UpstreamUnauthorized),
            Self::Forbidden(msg) => {
                AppError::with_message(ErrorCode::UpstreamForbidden, msg)
            }
            Self::NotFound(msg) => AppError::with_message(ErrorCode::UpstreamNotFound, msg),
            Self::Validation(msg) => AppError::validation(msg),
            Self::Internal(msg) => AppError::fetch_failed(msg),
            Self::Serialization(err) => err.into(),
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        err.into_app_error()
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
