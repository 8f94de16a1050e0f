//! # Permissions
//!
//! Permission strings, grant patterns and the per-role sets that hold them.
//!
//! A permission is a dot-separated identifier of a screen or action
//! (`"dashboard.own"`, `"settings.alerts"`). A grant pattern is what a role
//! holds: an exact permission, a prefix wildcard (`"settings.*"`) or the
//! global wildcard (`"*"`).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{RbacError, RbacResult};

/// Segment separator in permission strings.
pub const SEPARATOR: char = '.';

/// The global wildcard pattern.
pub const GLOBAL_WILDCARD: &str = "*";

/// Suffix that turns a prefix into a prefix wildcard.
pub const WILDCARD_SUFFIX: &str = ".*";

/// A requested permission string.
///
/// `Permission::new` accepts any string, which is all the resolver needs.
/// `Permission::parse` additionally rejects strings that could never be
/// granted through a wildcard, for callers that want that checked up front.
///
/// # Example
///
/// ```
/// use crm_rbac::Permission;
///
/// let perm = Permission::parse("settings.alerts.email").unwrap();
/// assert_eq!(perm.segments().collect::<Vec<_>>(), vec!["settings", "alerts", "email"]);
///
/// assert!(Permission::parse("settings..alerts").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Permission(String);

impl Permission {
    /// Wrap a permission string without validation.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Parse a permission string, rejecting malformed input.
    ///
    /// # Errors
    ///
    /// Returns `RbacError::MalformedPermission` if the string is empty, has an
    /// empty segment (leading, trailing or consecutive dots), or contains `*`.
    pub fn parse(s: &str) -> RbacResult<Self> {
        if !is_well_formed(s) || s.contains('*') {
            return Err(RbacError::MalformedPermission(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Get the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the dot-separated segments, left to right.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// Check that the string is non-empty and has no empty segments.
    pub fn is_well_formed(&self) -> bool {
        is_well_formed(&self.0)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Permission {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Permission {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Non-empty with no empty segments.
pub(crate) fn is_well_formed(s: &str) -> bool {
    !s.is_empty() && s.split(SEPARATOR).all(|segment| !segment.is_empty())
}

/// An entry in a role's permission list.
///
/// # Example
///
/// ```
/// use crm_rbac::GrantPattern;
///
/// assert_eq!(GrantPattern::parse("*"), GrantPattern::Global);
/// assert_eq!(GrantPattern::parse("settings.*"), GrantPattern::Prefix("settings".into()));
/// assert_eq!(GrantPattern::parse("leads.own"), GrantPattern::Exact("leads.own".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GrantPattern {
    /// `"*"`: grants every permission
    Global,
    /// `"<prefix>.*"`: grants every permission nested under `prefix`
    Prefix(String),
    /// Grants only this exact string
    Exact(String),
}

impl GrantPattern {
    /// Classify a pattern string. Never fails; anything that is not a
    /// wildcard form is an exact pattern.
    pub fn parse(s: &str) -> Self {
        if s == GLOBAL_WILDCARD {
            return GrantPattern::Global;
        }
        match s.strip_suffix(WILDCARD_SUFFIX) {
            Some(prefix) if !prefix.is_empty() => GrantPattern::Prefix(prefix.to_string()),
            _ => GrantPattern::Exact(s.to_string()),
        }
    }

    /// Get the pattern in its source form (`"*"`, `"settings.*"`, `"leads.own"`).
    pub fn as_str(&self) -> String {
        match self {
            GrantPattern::Global => GLOBAL_WILDCARD.to_string(),
            GrantPattern::Prefix(prefix) => format!("{prefix}{WILDCARD_SUFFIX}"),
            GrantPattern::Exact(s) => s.clone(),
        }
    }

    /// Check if this is a wildcard (global or prefix) pattern.
    pub fn is_wildcard(&self) -> bool {
        !matches!(self, GrantPattern::Exact(_))
    }
}

impl fmt::Display for GrantPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrantPattern::Global => f.write_str(GLOBAL_WILDCARD),
            GrantPattern::Prefix(prefix) => write!(f, "{prefix}{WILDCARD_SUFFIX}"),
            GrantPattern::Exact(s) => f.write_str(s),
        }
    }
}

/// The grant patterns held by one role.
///
/// Keeps insertion order for listing and a string index for the
/// membership tests the resolver performs.
///
/// # Example
///
/// ```
/// use crm_rbac::PermissionSet;
///
/// let set = PermissionSet::from_strings(&["dashboard.own", "leads.own"]);
/// assert!(set.contains("leads.own"));
/// assert!(!set.contains("leads"));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PermissionSet {
    patterns: Vec<GrantPattern>,
    index: HashSet<String>,
}

impl PermissionSet {
    /// Create a new empty permission set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern to the set.
    ///
    /// # Returns
    ///
    /// `true` if the pattern was not already present
    pub fn add(&mut self, pattern: GrantPattern) -> bool {
        if !self.index.insert(pattern.as_str()) {
            return false;
        }
        self.patterns.push(pattern);
        true
    }

    /// Add multiple patterns to the set.
    pub fn add_all<I>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = GrantPattern>,
    {
        for pattern in patterns {
            self.add(pattern);
        }
    }

    /// Check whether the set holds exactly this pattern string.
    ///
    /// This is a plain membership test: `contains("settings.alerts")` is
    /// `false` for a set holding only `"settings.*"`. Wildcard resolution
    /// lives in [`PermissionTable::resolve`](crate::PermissionTable::resolve).
    pub fn contains(&self, pattern: &str) -> bool {
        self.index.contains(pattern)
    }

    /// Check whether the set holds the global wildcard.
    pub fn is_global(&self) -> bool {
        self.contains(GLOBAL_WILDCARD)
    }

    /// Get the patterns in insertion order.
    pub fn patterns(&self) -> &[GrantPattern] {
        &self.patterns
    }

    /// Create from a list of pattern strings.
    pub fn from_strings(patterns: &[&str]) -> Self {
        patterns.iter().map(|s| GrantPattern::parse(s)).collect()
    }

    /// Get the count of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl FromIterator<GrantPattern> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = GrantPattern>>(iter: T) -> Self {
        let mut set = PermissionSet::new();
        set.add_all(iter);
        set
    }
}

impl From<Vec<String>> for PermissionSet {
    fn from(patterns: Vec<String>) -> Self {
        patterns.iter().map(|s| GrantPattern::parse(s)).collect()
    }
}

impl From<PermissionSet> for Vec<String> {
    fn from(set: PermissionSet) -> Self {
        set.patterns.iter().map(GrantPattern::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_segments() {
        let perm = Permission::new("settings.alerts.email");
        assert_eq!(
            perm.segments().collect::<Vec<_>>(),
            vec!["settings", "alerts", "email"]
        );
        assert_eq!(Permission::new("dashboard").segments().count(), 1);
    }

    #[test]
    fn test_permission_well_formed() {
        assert!(Permission::new("dashboard.own").is_well_formed());
        assert!(!Permission::new("").is_well_formed());
        assert!(!Permission::new("a..b").is_well_formed());
        assert!(!Permission::new(".leads").is_well_formed());
        assert!(!Permission::new("leads.").is_well_formed());
    }

    #[test]
    fn test_permission_parse() {
        assert_eq!(
            Permission::parse("cobranza.view").unwrap().as_str(),
            "cobranza.view"
        );
        assert!(matches!(
            Permission::parse(""),
            Err(RbacError::MalformedPermission(_))
        ));
        assert!(matches!(
            Permission::parse("settings.*"),
            Err(RbacError::MalformedPermission(_))
        ));
        assert!(Permission::parse("a..b").is_err());
    }

    #[test]
    fn test_grant_pattern_parse() {
        assert_eq!(GrantPattern::parse("*"), GrantPattern::Global);
        assert_eq!(
            GrantPattern::parse("settings.*"),
            GrantPattern::Prefix("settings".to_string())
        );
        assert_eq!(
            GrantPattern::parse("a.b.*"),
            GrantPattern::Prefix("a.b".to_string())
        );
        assert_eq!(
            GrantPattern::parse("settings"),
            GrantPattern::Exact("settings".to_string())
        );
        // A bare ".*" has no prefix to match against.
        assert_eq!(
            GrantPattern::parse(".*"),
            GrantPattern::Exact(".*".to_string())
        );
    }

    #[test]
    fn test_grant_pattern_as_str() {
        for s in ["*", "settings.*", "leads.own", "a.b.*", ".*"] {
            assert_eq!(GrantPattern::parse(s).as_str(), s);
            assert_eq!(GrantPattern::parse(s).to_string(), s);
        }
        assert!(GrantPattern::Global.is_wildcard());
        assert!(!GrantPattern::parse("leads").is_wildcard());
    }

    #[test]
    fn test_permission_set_dedup_and_order() {
        let mut set = PermissionSet::new();
        assert!(set.add(GrantPattern::parse("leads")));
        assert!(set.add(GrantPattern::parse("dashboard")));
        assert!(!set.add(GrantPattern::parse("leads")));

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.patterns(),
            &[
                GrantPattern::Exact("leads".to_string()),
                GrantPattern::Exact("dashboard".to_string()),
            ]
        );
    }

    #[test]
    fn test_permission_set_contains_is_literal() {
        let set = PermissionSet::from_strings(&["settings.*"]);
        assert!(set.contains("settings.*"));
        assert!(!set.contains("settings.alerts"));
        assert!(!set.is_global());

        let admin = PermissionSet::from_strings(&["*"]);
        assert!(admin.is_global());
    }

    #[test]
    fn test_permission_set_serde() {
        let set = PermissionSet::from_strings(&["dashboard.own", "leads.*"]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["dashboard.own","leads.*"]"#);

        let back: PermissionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back.patterns(), set.patterns());
        assert!(back.contains("leads.*"));
    }
}
