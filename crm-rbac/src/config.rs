//! Permission table configuration
//!
//! A table can be described in JSON as a map from role name to the list of
//! grant patterns that role holds:
//!
//! ```json
//! {
//!   "roles": {
//!     "admin": ["*"],
//!     "embajador": ["dashboard.own", "propiedades", "leads.own"]
//!   }
//! }
//! ```
//!
//! Roles absent from the map grant nothing. Role names are matched
//! case-insensitively, and two keys naming the same role are rejected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::RbacResult;
use crate::table::BUILTIN_GRANTS;

/// Serializable description of a [`PermissionTable`](crate::PermissionTable).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Role name to grant patterns. Roles are kept sorted by name; each
    /// pattern list keeps the order it was written in.
    #[serde(default)]
    pub roles: BTreeMap<String, Vec<String>>,
}

impl RbacConfig {
    /// Parse a configuration from JSON.
    ///
    /// Only the JSON shape is checked here; role names and patterns are
    /// validated by [`PermissionTable::from_config`](crate::PermissionTable::from_config).
    ///
    /// # Example
    ///
    /// ```
    /// use crm_rbac::RbacConfig;
    ///
    /// let config = RbacConfig::from_json(r#"{"roles": {"gerente": ["cobranza.view"]}}"#).unwrap();
    /// assert_eq!(config.roles["gerente"], vec!["cobranza.view".to_string()]);
    /// ```
    pub fn from_json(json: &str) -> RbacResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> RbacResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The configuration of the built-in table.
    pub fn builtin() -> Self {
        let roles = BUILTIN_GRANTS
            .iter()
            .map(|(role, patterns)| {
                (
                    role.as_str().to_string(),
                    patterns.iter().map(|p| p.to_string()).collect(),
                )
            })
            .collect();
        Self { roles }
    }
}
