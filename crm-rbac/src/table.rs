//! # Permission table and resolver
//!
//! The table maps every [`Role`] to the [`PermissionSet`] it holds and
//! answers "may this role do that?" for dot-separated permission strings.
//!
//! ## Resolution order
//!
//! 1. The global wildcard `"*"` grants everything.
//! 2. An exact pattern equal to the requested string grants it.
//! 3. Prefix wildcards are tried from the longest prefix down to a single
//!    segment: for `"a.b.c"` the candidates are `"a.b.*"` then `"a.*"`.
//! 4. Otherwise the request is denied.
//!
//! A requested string that is empty or has an empty segment (`"a..b"`,
//! `".a"`, `"a."`) only takes steps 1 and 2.
//!
//! A prefix wildcard never grants its bare prefix: `"settings.*"` grants
//! `"settings.alerts"` but not `"settings"`.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::config::RbacConfig;
use crate::error::{RbacError, RbacResult};
use crate::permissions::{is_well_formed, GrantPattern, PermissionSet, SEPARATOR, WILDCARD_SUFFIX};
use crate::roles::Role;

/// Grants of the built-in table, in role declaration order.
pub(crate) const BUILTIN_GRANTS: &[(Role, &[&str])] = &[
    (Role::Admin, &["*"]),
    (
        Role::Ceo,
        &[
            "dashboard",
            "embajadores",
            "leads",
            "propiedades",
            "cobranza",
            "chat",
            "settings.users",
            "settings.alerts",
            "settings.branding",
        ],
    ),
    (
        Role::Gerente,
        &["dashboard", "embajadores", "leads", "propiedades", "cobranza.view"],
    ),
    (Role::Embajador, &["dashboard.own", "propiedades", "leads.own"]),
    (
        Role::Cobrador,
        &["dashboard.cobranza", "propiedades", "cobranza"],
    ),
];

static BUILTIN: OnceLock<PermissionTable> = OnceLock::new();

/// The pattern that granted a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grant {
    /// Granted by `"*"`
    Global,
    /// Granted by a pattern equal to the requested string
    Exact(String),
    /// Granted by a prefix wildcard; holds the prefix without `".*"`
    Prefix(String),
}

impl Grant {
    /// Get the matching pattern in its source form.
    pub fn pattern(&self) -> String {
        match self {
            Grant::Global => "*".to_string(),
            Grant::Exact(s) => s.clone(),
            Grant::Prefix(prefix) => format!("{prefix}{WILDCARD_SUFFIX}"),
        }
    }
}

/// Read-only mapping from role to granted patterns.
///
/// Build it once, then share it freely: every query takes `&self`.
///
/// # Example
///
/// ```
/// use crm_rbac::{PermissionSet, PermissionTable, Role};
///
/// let table = PermissionTable::new()
///     .with_role(Role::Ceo, PermissionSet::from_strings(&["settings.*"]));
///
/// assert!(table.is_authorized(Role::Ceo, "settings.alerts.email"));
/// assert!(!table.is_authorized(Role::Ceo, "settings"));
/// assert!(!table.is_authorized(Role::Gerente, "settings.alerts"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PermissionTable {
    roles: HashMap<Role, PermissionSet>,
}

impl PermissionTable {
    /// Create a table in which no role holds anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the table with `role` holding `permissions`, replacing any
    /// set it held before.
    pub fn with_role(mut self, role: Role, permissions: PermissionSet) -> Self {
        self.roles.insert(role, permissions);
        self
    }

    /// The process-wide built-in table.
    ///
    /// Built on first use and never modified afterwards.
    pub fn builtin() -> &'static PermissionTable {
        BUILTIN.get_or_init(|| {
            BUILTIN_GRANTS
                .iter()
                .fold(PermissionTable::new(), |table, (role, patterns)| {
                    table.with_role(*role, PermissionSet::from_strings(patterns))
                })
        })
    }

    /// Build a table from configuration.
    ///
    /// # Errors
    ///
    /// - `RbacError::UnknownRole` if a key is not a role name
    /// - `RbacError::DuplicateRole` if two keys name the same role (`"ceo"` and `"CEO"`)
    /// - `RbacError::InvalidPattern` if a pattern is empty
    pub fn from_config(config: &RbacConfig) -> RbacResult<Self> {
        let mut table = PermissionTable::new();
        for (name, patterns) in &config.roles {
            let role = Role::parse(name).ok_or_else(|| RbacError::UnknownRole(name.clone()))?;
            if table.roles.contains_key(&role) {
                return Err(RbacError::DuplicateRole(name.clone()));
            }
            let mut set = PermissionSet::new();
            for pattern in patterns {
                if pattern.is_empty() {
                    return Err(RbacError::InvalidPattern(pattern.clone()));
                }
                set.add(GrantPattern::parse(pattern));
            }
            table.roles.insert(role, set);
        }
        tracing::debug!(roles = table.roles.len(), "Loaded permission table");
        Ok(table)
    }

    /// Get the patterns held by a role, if the table has an entry for it.
    pub fn permissions(&self, role: Role) -> Option<&PermissionSet> {
        self.roles.get(&role)
    }

    /// Find the pattern that grants `requested` to `role`.
    ///
    /// # Returns
    ///
    /// The first matching grant in resolution order, or `None` if the
    /// request is denied. A role without an entry is denied everything.
    ///
    /// # Example
    ///
    /// ```
    /// use crm_rbac::{Grant, PermissionSet, PermissionTable, Role};
    ///
    /// let table = PermissionTable::new().with_role(
    ///     Role::Gerente,
    ///     PermissionSet::from_strings(&["leads.*", "leads.team.*"]),
    /// );
    ///
    /// assert_eq!(
    ///     table.resolve(Role::Gerente, "leads.team.export"),
    ///     Some(Grant::Prefix("leads.team".to_string()))
    /// );
    /// assert_eq!(table.resolve(Role::Gerente, "leads"), None);
    /// ```
    pub fn resolve(&self, role: Role, requested: &str) -> Option<Grant> {
        let set = self.roles.get(&role)?;
        let grant = find_grant(set, requested);
        match &grant {
            Some(grant) => tracing::trace!(
                role = %role,
                permission = requested,
                pattern = %grant.pattern(),
                "Permission granted"
            ),
            None => tracing::debug!(role = %role, permission = requested, "Permission denied"),
        }
        grant
    }

    /// Check whether `role` may perform `requested`.
    pub fn is_authorized(&self, role: Role, requested: &str) -> bool {
        self.resolve(role, requested).is_some()
    }

    /// Check a role given by name.
    ///
    /// A name that is not a role is denied everything.
    pub fn is_authorized_str(&self, role: &str, requested: &str) -> bool {
        match Role::parse(role) {
            Some(role) => self.is_authorized(role, requested),
            None => {
                tracing::debug!(role, permission = requested, "Unknown role denied");
                false
            }
        }
    }

    /// Get every role the table authorizes for `requested`, in declaration order.
    pub fn roles_with(&self, requested: &str) -> Vec<Role> {
        Role::all()
            .into_iter()
            .filter(|role| self.is_authorized(*role, requested))
            .collect()
    }
}

fn find_grant(set: &PermissionSet, requested: &str) -> Option<Grant> {
    if set.is_global() {
        return Some(Grant::Global);
    }
    if set.contains(requested) {
        return Some(Grant::Exact(requested.to_string()));
    }
    if !is_well_formed(requested) {
        return None;
    }

    // The text before each separator is a candidate prefix; walking the
    // separators right to left yields the longest prefix first.
    requested
        .rmatch_indices(SEPARATOR)
        .find_map(|(idx, _)| {
            let prefix = &requested[..idx];
            set.contains(&format!("{prefix}{WILDCARD_SUFFIX}"))
                .then(|| Grant::Prefix(prefix.to_string()))
        })
}

/// Check a permission against the built-in table.
///
/// # Example
///
/// ```
/// use crm_rbac::{has_permission, Role};
///
/// assert!(has_permission(Role::Admin, "settings.branding"));
/// assert!(has_permission(Role::Embajador, "leads.own"));
/// assert!(!has_permission(Role::Embajador, "leads"));
/// ```
pub fn has_permission(role: Role, permission: &str) -> bool {
    PermissionTable::builtin().is_authorized(role, permission)
}
