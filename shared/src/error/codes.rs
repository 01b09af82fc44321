//! Unified error codes for the insights workspace
//!
//! Error codes are shared between the client crate and the analytics
//! engine, organized by category:
//! - 0xxx: General errors
//! - 1xxx: Fetch (upstream API) errors
//! - 4xxx: Order data errors
//! - 6xxx: Product data errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Fetch ====================
    /// Upstream fetch failed (network/transport)
    FetchFailed = 1001,
    /// Upstream rejected our credentials
    UpstreamUnauthorized = 1002,
    /// Upstream denied access to the resource
    UpstreamForbidden = 1003,
    /// Upstream resource not found
    UpstreamNotFound = 1004,
    /// Upstream response could not be decoded
    InvalidResponse = 1005,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order detail document is malformed
    MalformedOrderDetail = 4002,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// I/O error (export file write)
    IoError = 9002,
    /// Serialization error
    SerializationError = 9003,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Fetch
            ErrorCode::FetchFailed => "Upstream fetch failed",
            ErrorCode::UpstreamUnauthorized => "Upstream rejected credentials",
            ErrorCode::UpstreamForbidden => "Upstream denied access",
            ErrorCode::UpstreamNotFound => "Upstream resource not found",
            ErrorCode::InvalidResponse => "Upstream response could not be decoded",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::MalformedOrderDetail => "Order detail document is malformed",

            // Product
            ErrorCode::ProductNotFound => "Product not found",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::IoError => "I/O error",
            ErrorCode::SerializationError => "Serialization error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Fetch
            1001 => Ok(ErrorCode::FetchFailed),
            1002 => Ok(ErrorCode::UpstreamUnauthorized),
            1003 => Ok(ErrorCode::UpstreamForbidden),
            1004 => Ok(ErrorCode::UpstreamNotFound),
            1005 => Ok(ErrorCode::InvalidResponse),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::MalformedOrderDetail),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::IoError),
            9003 => Ok(ErrorCode::SerializationError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::FetchFailed.code(), 1001);
        assert_eq!(ErrorCode::InvalidResponse.code(), 1005);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_error_code_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::InvalidRequest,
            ErrorCode::FetchFailed,
            ErrorCode::UpstreamUnauthorized,
            ErrorCode::UpstreamForbidden,
            ErrorCode::UpstreamNotFound,
            ErrorCode::InvalidResponse,
            ErrorCode::OrderNotFound,
            ErrorCode::MalformedOrderDetail,
            ErrorCode::ProductNotFound,
            ErrorCode::InternalError,
            ErrorCode::IoError,
            ErrorCode::SerializationError,
            ErrorCode::ConfigError,
        ] {
            let value: u16 = code.into();
            assert_eq!(ErrorCode::try_from(value), Ok(code));
        }
    }

    #[test]
    fn test_invalid_error_code() {
        assert_eq!(ErrorCode::try_from(12345), Err(InvalidErrorCode(12345)));
        assert_eq!(
            InvalidErrorCode(12345).to_string(),
            "invalid error code: 12345"
        );
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::FetchFailed.is_success());
    }
}
