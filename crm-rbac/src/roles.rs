//! User roles
//!
//! This module defines the closed set of roles a CRM user can hold.
//! Roles carry no implicit hierarchy: what a role may do is decided
//! entirely by its entry in the [`PermissionTable`](crate::PermissionTable).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a CRM user.
///
/// # Roles
///
/// - **Admin**: Full access to every screen and action
/// - **Ceo**: Company-wide visibility plus user, alert and branding settings
/// - **Gerente**: Sales manager; sees the team, leads and collections (read-only)
/// - **Embajador**: Ambassador (salesperson); sees only their own dashboard and leads
/// - **Cobrador**: Collections agent; works the collections screen
///
/// # Examples
///
/// ```
/// use crm_rbac::Role;
///
/// let role = Role::parse("embajador").unwrap();
/// assert_eq!(role, Role::Embajador);
/// assert_eq!(role.display_name(), "Embajador");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// System administrator
    Admin,

    /// Chief executive
    Ceo,

    /// Sales manager
    Gerente,

    /// Ambassador (salesperson)
    Embajador,

    /// Collections agent
    Cobrador,
}

impl Role {
    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(Role)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use crm_rbac::Role;
    ///
    /// assert_eq!(Role::parse("admin"), Some(Role::Admin));
    /// assert_eq!(Role::parse("GERENTE"), Some(Role::Gerente));
    /// assert_eq!(Role::parse("vendedor"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "ceo" => Some(Self::Ceo),
            "gerente" => Some(Self::Gerente),
            "embajador" => Some(Self::Embajador),
            "cobrador" => Some(Self::Cobrador),
            _ => None,
        }
    }

    /// Get string representation of the role.
    ///
    /// This is the name used in configuration files and serialized data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Ceo => "ceo",
            Self::Gerente => "gerente",
            Self::Embajador => "embajador",
            Self::Cobrador => "cobrador",
        }
    }

    /// Get the label shown next to the user's name in the UI.
    ///
    /// # Examples
    ///
    /// ```
    /// use crm_rbac::Role;
    ///
    /// assert_eq!(Role::Admin.display_name(), "Administrador");
    /// assert_eq!(Role::Ceo.display_name(), "CEO");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Admin => "Administrador",
            Self::Ceo => "CEO",
            Self::Gerente => "Gerente",
            Self::Embajador => "Embajador",
            Self::Cobrador => "Cobrador",
        }
    }

    /// Get all roles, in declaration order.
    pub fn all() -> [Self; 5] {
        [
            Self::Admin,
            Self::Ceo,
            Self::Gerente,
            Self::Embajador,
            Self::Cobrador,
        ]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("CEO"), Some(Role::Ceo));
        assert_eq!(Role::parse("Cobrador"), Some(Role::Cobrador));
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("invalid"), None);
    }

    #[test]
    fn test_role_as_str_round_trips() {
        for role in Role::all() {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_role_display_names() {
        assert_eq!(Role::Gerente.display_name(), "Gerente");
        assert_eq!(Role::Embajador.display_name(), "Embajador");
        assert_eq!(Role::Cobrador.display_name(), "Cobrador");
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&Role::Embajador).unwrap();
        assert_eq!(json, "\"embajador\"");

        let role: Role = serde_json::from_str("\"gerente\"").unwrap();
        assert_eq!(role, Role::Gerente);
    }
}
