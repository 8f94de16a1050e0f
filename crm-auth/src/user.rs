//! CRM users
//!
//! The identity attached to a session. A user holds exactly one [`Role`],
//! which is what permission checks are evaluated against.

use chrono::{DateTime, Utc};
use crm_rbac::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A CRM user.
///
/// # Example
///
/// ```
/// use crm_auth::User;
/// use crm_rbac::Role;
///
/// let user = User::new("Ana López", "ana@example.com", Role::Gerente)
///     .with_whatsapp("+52 55 1234 5678");
/// assert_eq!(user.initials(), "AL");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User ID
    pub id: Uuid,

    /// Full name
    pub name: String,

    /// Login email
    pub email: String,

    /// Role the user acts under
    pub role: Role,

    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// WhatsApp number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,

    /// Avatar image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// When the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh ID.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            email: email.into(),
            role,
            phone: None,
            whatsapp: None,
            avatar: None,
            created_at: Utc::now(),
        }
    }

    /// The user the demo authenticator logs in as.
    pub fn demo() -> Self {
        Self::new("Usuario Demo", "demo@shitoushui.mx", Role::Admin)
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the WhatsApp number.
    pub fn with_whatsapp(mut self, whatsapp: impl Into<String>) -> Self {
        self.whatsapp = Some(whatsapp.into());
        self
    }

    /// Set the avatar URL.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Up to two uppercase initials, taken from the first words of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        let user = User::new("María José Pérez", "mj@example.com", Role::Embajador);
        assert_eq!(user.initials(), "MJ");

        let single = User::new("carlos", "c@example.com", Role::Cobrador);
        assert_eq!(single.initials(), "C");

        let spaced = User::new("  luis   ramírez ", "l@example.com", Role::Ceo);
        assert_eq!(spaced.initials(), "LR");

        let empty = User::new("", "e@example.com", Role::Ceo);
        assert_eq!(empty.initials(), "");
    }

    #[test]
    fn test_builders() {
        let user = User::new("Ana", "ana@example.com", Role::Gerente)
            .with_phone("555")
            .with_whatsapp("556")
            .with_avatar("https://cdn.example.com/ana.png");
        assert_eq!(user.phone.as_deref(), Some("555"));
        assert_eq!(user.whatsapp.as_deref(), Some("556"));
        assert!(user.avatar.is_some());
    }

    #[test]
    fn test_serde_shape() {
        let user = User::new("Ana", "ana@example.com", Role::Gerente);
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["role"], "gerente");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("phone").is_none());

        let back: User = serde_json::from_value(value).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_demo_user() {
        let demo = User::demo();
        assert_eq!(demo.role, Role::Admin);
        assert_eq!(demo.initials(), "UD");
    }
}
