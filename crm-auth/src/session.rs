//! Current-user session
//!
//! A [`Session`] tracks who is logged in and answers permission questions
//! for that user against a [`PermissionTable`]. It is an ordinary owned
//! value; callers pass it to whatever needs to know the current user.

use crm_rbac::{PermissionTable, Role};

use crate::authenticator::Authenticator;
use crate::error::{AuthError, AuthResult};
use crate::user::User;

/// The logged-in user, if any, plus the table their role is checked against.
///
/// Every check fails closed: with nobody logged in, `has_role` and `can`
/// return `false` and `require` returns `AuthError::Unauthenticated`.
///
/// # Examples
///
/// ```
/// use crm_auth::{Session, User};
/// use crm_rbac::{PermissionTable, Role};
///
/// let user = User::new("Ana", "ana@example.com", Role::Embajador);
/// let session = Session::with_user(PermissionTable::builtin(), user);
///
/// assert!(session.can("leads.own"));
/// assert!(!session.can("leads"));
/// assert!(session.has_role(&[Role::Embajador, Role::Gerente]));
/// ```
#[derive(Debug, Clone)]
pub struct Session<'t> {
    user: Option<User>,
    table: &'t PermissionTable,
}

impl<'t> Session<'t> {
    /// Create a session with nobody logged in.
    pub fn new(table: &'t PermissionTable) -> Self {
        Self { user: None, table }
    }

    /// Create a session with `user` already logged in.
    pub fn with_user(table: &'t PermissionTable, user: User) -> Self {
        Self {
            user: Some(user),
            table,
        }
    }

    /// Log in through `authenticator` with email and password.
    ///
    /// On failure the session is left logged out.
    ///
    /// # Errors
    ///
    /// Whatever the authenticator returns, typically `AuthError::InvalidCredentials`.
    pub async fn login(
        &mut self,
        authenticator: &dyn Authenticator,
        email: &str,
        password: &str,
    ) -> AuthResult<&User> {
        let result = authenticator.login(email, password).await;
        self.establish(result)
    }

    /// Log in through `authenticator`'s Google flow.
    ///
    /// On failure the session is left logged out.
    pub async fn login_with_google(
        &mut self,
        authenticator: &dyn Authenticator,
    ) -> AuthResult<&User> {
        let result = authenticator.login_with_google().await;
        self.establish(result)
    }

    fn establish(&mut self, result: AuthResult<User>) -> AuthResult<&User> {
        match result {
            Ok(user) => {
                tracing::info!(user_id = %user.id, role = %user.role, "User logged in");
                Ok(&*self.user.insert(user))
            }
            Err(err) => {
                self.user = None;
                tracing::warn!(error = %err, "Login failed");
                Err(err)
            }
        }
    }

    /// Log out the current user, if any.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = %user.id, "User logged out");
        }
    }

    /// Get the logged-in user.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Get the logged-in user's role.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// Check if someone is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Check if the logged-in user holds any of `roles`.
    pub fn has_role(&self, roles: &[Role]) -> bool {
        self.role().is_some_and(|role| roles.contains(&role))
    }

    /// Check if the logged-in user's role grants `permission`.
    pub fn can(&self, permission: &str) -> bool {
        self.role()
            .is_some_and(|role| self.table.is_authorized(role, permission))
    }

    /// Require that the logged-in user's role grants `permission`.
    ///
    /// # Errors
    ///
    /// - `AuthError::Unauthenticated` if nobody is logged in
    /// - `AuthError::Forbidden` if the role does not grant `permission`
    pub fn require(&self, permission: &str) -> AuthResult<()> {
        let role = self.role().ok_or(AuthError::Unauthenticated)?;
        if self.table.is_authorized(role, permission) {
            Ok(())
        } else {
            Err(AuthError::Forbidden {
                permission: permission.to_string(),
            })
        }
    }

    /// Get the table this session checks against.
    pub fn table(&self) -> &'t PermissionTable {
        self.table
    }
}

impl Session<'static> {
    /// Session against the built-in table, already logged in as the demo user.
    pub fn demo() -> Self {
        Self::with_user(PermissionTable::builtin(), User::demo())
    }
}
