//! Error types for permission table construction
//!
//! Resolution itself never fails: an unknown role or an odd permission
//! string simply resolves to a denial. These errors only surface while
//! building a table from configuration or when a caller asks for a
//! validated [`Permission`](crate::Permission).

use thiserror::Error;

/// RBAC error types.
#[derive(Debug, Error)]
pub enum RbacError {
    /// Configuration names a role that is not part of the role set
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Configuration lists the same role under more than one key
    #[error("Duplicate role: {0}")]
    DuplicateRole(String),

    /// Grant pattern cannot be used in a permission table
    #[error("Invalid grant pattern: {0:?}")]
    InvalidPattern(String),

    /// Permission string is empty, has empty segments, or contains a wildcard
    #[error("Malformed permission: {0:?}")]
    MalformedPermission(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for RBAC operations.
pub type RbacResult<T> = Result<T, RbacError>;

impl From<serde_json::Error> for RbacError {
    fn from(err: serde_json::Error) -> Self {
        RbacError::Config(err.to_string())
    }
}

impl RbacError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            RbacError::UnknownRole(_) => "UNKNOWN_ROLE",
            RbacError::DuplicateRole(_) => "DUPLICATE_ROLE",
            RbacError::InvalidPattern(_) => "INVALID_PATTERN",
            RbacError::MalformedPermission(_) => "MALFORMED_PERMISSION",
            RbacError::Config(_) => "CONFIG_ERROR",
        }
    }
}
