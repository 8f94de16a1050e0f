//! Error types for session operations
//!
//! This module defines the errors that can occur while logging in and
//! while gating an action on the current user's permissions.

use crm_rbac::RbacError;
use thiserror::Error;

/// Authentication error types.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No user is logged in
    #[error("Not authenticated")]
    Unauthenticated,

    /// The current user's role does not grant the permission
    #[error("Forbidden: missing permission {permission}")]
    Forbidden {
        /// The permission that was checked
        permission: String,
    },

    /// Identity provider error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Permission table error
    #[error(transparent)]
    Rbac(#[from] RbacError),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

impl AuthError {
    /// Check if this error should be logged at error level.
    ///
    /// Denials and bad credentials are expected and are not server errors.
    pub fn is_server_error(&self) -> bool {
        matches!(self, AuthError::Provider(_) | AuthError::Rbac(_))
    }

    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials | AuthError::Unauthenticated => 401,
            AuthError::Forbidden { .. } => 403,
            AuthError::Provider(_) | AuthError::Rbac(_) => 500,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::Unauthenticated => "UNAUTHENTICATED",
            AuthError::Forbidden { .. } => "FORBIDDEN",
            AuthError::Provider(_) => "PROVIDER_ERROR",
            AuthError::Rbac(err) => err.error_code(),
        }
    }
}
