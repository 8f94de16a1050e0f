//! # CRM Authentication
//!
//! This crate tracks the current CRM user and gates screens and actions on
//! that user's role.
//!
//! ## Overview
//!
//! The crm-auth crate handles:
//! - **Users**: Identity and role of a CRM user
//! - **Authenticators**: The identity-provider seam, with a demo implementation
//! - **Sessions**: Login, logout and permission checks for the current user
//! - **Navigation**: Which sidebar entries each role may see
//!
//! ## Usage
//!
//! ```rust
//! use crm_auth::{Session, User};
//! use crm_rbac::{PermissionTable, Role};
//!
//! // Demo session starts logged in as an administrator
//! let mut session = Session::demo();
//! assert!(session.can("settings.branding"));
//!
//! session.logout();
//! assert!(session.require("dashboard").is_err());
//!
//! // Sessions for specific users
//! let user = User::new("Pedro", "pedro@example.com", Role::Cobrador);
//! let session = Session::with_user(PermissionTable::builtin(), user);
//! assert!(session.can("cobranza"));
//! assert!(!session.can("settings.users"));
//! ```
//!
//! ## Integration with crm-rbac
//!
//! Permission checks delegate to [`crm_rbac::PermissionTable`]. A session
//! borrows its table, so the built-in table and tables loaded from
//! configuration work the same way.

pub mod authenticator;
pub mod error;
pub mod navigation;
pub mod session;
pub mod user;

// Re-export main types
pub use authenticator::{Authenticator, DemoAuthenticator};
pub use error::{AuthError, AuthResult};
pub use navigation::{visible_nav_items, NavItem, NAV_ITEMS};
pub use session::Session;
pub use user::User;
