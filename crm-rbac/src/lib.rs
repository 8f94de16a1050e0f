//! # CRM RBAC (Role-Based Access Control)
//!
//! This crate decides which CRM screens and actions each user role may use.
//!
//! ## Overview
//!
//! The crm-rbac crate handles:
//! - **Roles**: The closed set of user roles (admin, ceo, gerente, embajador, cobrador)
//! - **Permissions**: Dot-separated identifiers of screens and actions
//! - **Grant Patterns**: Exact, prefix-wildcard and global-wildcard entries
//! - **Permission Table**: The static role → patterns mapping and its resolver
//!
//! ## Architecture
//!
//! ```text
//! Permission = segment [. segment]*
//!
//! Patterns:
//!   "*"                - Every permission
//!   "settings.*"       - settings.users, settings.alerts.email, ...
//!   "dashboard.own"    - Exactly dashboard.own
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use crm_rbac::{has_permission, PermissionTable, Role};
//!
//! // Built-in table
//! assert!(has_permission(Role::Ceo, "settings.users"));
//! assert!(!has_permission(Role::Ceo, "settings.integrations"));
//!
//! // Which pattern matched
//! let grant = PermissionTable::builtin().resolve(Role::Admin, "settings.branding");
//! assert_eq!(grant.map(|g| g.pattern()), Some("*".to_string()));
//! ```
//!
//! ## Fail-closed
//!
//! Resolution never errors. Unknown roles, roles missing from a table and
//! malformed permission strings all resolve to a denial unless a pattern
//! grants them outright.

pub mod config;
pub mod error;
pub mod permissions;
pub mod roles;
pub mod table;

// Re-export main types for convenience
pub use config::RbacConfig;
pub use error::{RbacError, RbacResult};
pub use permissions::{GrantPattern, Permission, PermissionSet};
pub use roles::Role;
pub use table::{has_permission, Grant, PermissionTable};
