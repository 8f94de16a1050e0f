//! Role-gated navigation
//!
//! The sidebar entries of the CRM and which roles may see them. Entries
//! without a role list are visible to every logged-in or anonymous user.

use crm_rbac::Role;
use serde::Serialize;

use crate::session::Session;

/// A sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Route path
    pub href: &'static str,
    /// Label shown in the sidebar
    pub label: &'static str,
    /// Roles allowed to see the entry; `None` means everyone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<&'static [Role]>,
}

impl NavItem {
    /// Check if the entry is shown to a user with `role`.
    ///
    /// Restricted entries are hidden when there is no role.
    pub fn is_visible_to(&self, role: Option<Role>) -> bool {
        match (self.roles, role) {
            (None, _) => true,
            (Some(allowed), Some(role)) => allowed.contains(&role),
            (Some(_), None) => false,
        }
    }
}

/// Sidebar entries, in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        href: "/",
        label: "Dashboard",
        roles: None,
    },
    NavItem {
        href: "/embajadores",
        label: "Embajadores",
        roles: Some(&[Role::Admin, Role::Ceo, Role::Gerente]),
    },
    NavItem {
        href: "/leads",
        label: "Leads/CRM",
        roles: None,
    },
    NavItem {
        href: "/propiedades",
        label: "Propiedades",
        roles: None,
    },
    NavItem {
        href: "/cobranza",
        label: "Cobranza",
        roles: Some(&[Role::Admin, Role::Ceo, Role::Gerente, Role::Cobrador]),
    },
    NavItem {
        href: "/chat",
        label: "Chat IA",
        roles: None,
    },
    NavItem {
        href: "/configuracion",
        label: "Configuración",
        roles: Some(&[Role::Admin, Role::Ceo]),
    },
];

/// Get the sidebar entries visible in `session`.
///
/// # Example
///
/// ```
/// use crm_auth::{visible_nav_items, Session, User};
/// use crm_rbac::{PermissionTable, Role};
///
/// let user = User::new("Ana", "ana@example.com", Role::Embajador);
/// let session = Session::with_user(PermissionTable::builtin(), user);
///
/// let hrefs: Vec<_> = visible_nav_items(&session).iter().map(|item| item.href).collect();
/// assert_eq!(hrefs, vec!["/", "/leads", "/propiedades", "/chat"]);
/// ```
pub fn visible_nav_items(session: &Session<'_>) -> Vec<&'static NavItem> {
    let role = session.role();
    NAV_ITEMS
        .iter()
        .filter(|item| item.is_visible_to(role))
        .collect()
}
