//! Identity providers
//!
//! [`Authenticator`] is the seam a real identity backend plugs into.
//! [`DemoAuthenticator`] is the stand-in used until one exists: it accepts
//! any credentials and returns a fixed user.

use async_trait::async_trait;

use crate::error::{AuthError, AuthResult};
use crate::user::User;

/// Trait for identity provider implementations.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Log in with email and password.
    async fn login(&self, email: &str, password: &str) -> AuthResult<User>;

    /// Log in through Google.
    async fn login_with_google(&self) -> AuthResult<User>;
}

/// Authenticator that logs every attempt in as the same user.
#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    user: User,
}

impl DemoAuthenticator {
    /// Create an authenticator that logs in as `user`.
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// The user every login resolves to.
    pub fn user(&self) -> &User {
        &self.user
    }
}

impl Default for DemoAuthenticator {
    fn default() -> Self {
        Self::new(User::demo())
    }
}

#[async_trait]
impl Authenticator for DemoAuthenticator {
    async fn login(&self, email: &str, _password: &str) -> AuthResult<User> {
        if email.trim().is_empty() {
            return Err(AuthError::InvalidCredentials);
        }
        tracing::debug!(email, "Demo login accepted");
        Ok(self.user.clone())
    }

    async fn login_with_google(&self) -> AuthResult<User> {
        tracing::debug!("Demo Google login accepted");
        Ok(self.user.clone())
    }
}
