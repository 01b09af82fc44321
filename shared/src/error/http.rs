//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status code this error corresponds to
    ///
    /// Fetch errors map to the upstream status that produced them so
    /// callers can distinguish auth failures from transport failures.
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::UpstreamNotFound
            | Self::OrderNotFound
            | Self::ProductNotFound => StatusCode::NOT_FOUND,

            // 401 Unauthorized
            Self::UpstreamUnauthorized => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::UpstreamForbidden => StatusCode::FORBIDDEN,

            // 502 Bad Gateway (upstream transport/decode failures)
            Self::FetchFailed | Self::InvalidResponse => StatusCode::BAD_GATEWAY,

            // 500 Internal Server Error
            Self::InternalError
            | Self::IoError
            | Self::SerializationError
            | Self::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/data errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::OrderNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::UpstreamNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_fetch_statuses() {
        assert_eq!(
            ErrorCode::UpstreamUnauthorized.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ErrorCode::UpstreamForbidden.http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(ErrorCode::FetchFailed.http_status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            ErrorCode::InvalidResponse.http_status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::IoError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::MalformedOrderDetail.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
