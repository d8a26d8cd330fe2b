//! Type-safe error codes for API responses.
//!
//! Each code carries a SCREAMING_SNAKE_CASE identifier for clients, an integer
//! for logs and dashboards, and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// A field failed a domain rule
    ValidationError,

    /// Identifier in the path is empty or malformed
    InvalidId,

    /// Body is not JSON, or not the expected shape
    InvalidJson,

    NotFound,

    /// Missing, malformed, or expired credentials
    Unauthorized,

    // Server errors
    InternalError,

    // Database errors (2000-2999)
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for structured logs.
    ///
    /// - 1000-1999: client and generic server errors
    /// - 2000-2999: storage errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidId => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::Unauthorized => 1006,
            Self::DatabaseError => 2003,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidId => "Invalid identifier",
            Self::InvalidJson => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::Unauthorized => "Authentication required",
            Self::InternalError => "An internal server error occurred",
            Self::DatabaseError => "Database error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
