//! End-to-end session tests.
//!
//! These tests drive a session through login, permission checks,
//! navigation and logout, against both the built-in table and a table
//! loaded from JSON configuration.

use async_trait::async_trait;
use crm_auth::{
    visible_nav_items, AuthError, AuthResult, Authenticator, DemoAuthenticator, Session, User,
};
use crm_rbac::{PermissionTable, RbacConfig, Role};

/// Authenticator whose backend is always unavailable.
struct UnavailableAuthenticator;

#[async_trait]
impl Authenticator for UnavailableAuthenticator {
    async fn login(&self, _email: &str, _password: &str) -> AuthResult<User> {
        Err(AuthError::Provider("backend unavailable".to_string()))
    }

    async fn login_with_google(&self) -> AuthResult<User> {
        Err(AuthError::Provider("backend unavailable".to_string()))
    }
}

#[tokio::test]
async fn embajador_flow() {
    let auth = DemoAuthenticator::new(User::new(
        "Ana Torres",
        "ana@example.com",
        Role::Embajador,
    ));
    let mut session = Session::new(PermissionTable::builtin());

    session
        .login(&auth, "ana@example.com", "secreto")
        .await
        .unwrap();

    assert!(session.can("dashboard.own"));
    assert!(session.can("propiedades"));
    assert!(session.can("leads.own"));
    assert!(!session.can("leads"));
    assert!(!session.can("cobranza"));
    assert!(matches!(
        session.require("embajadores"),
        Err(AuthError::Forbidden { .. })
    ));

    let labels: Vec<_> = visible_nav_items(&session)
        .iter()
        .map(|item| item.label)
        .collect();
    assert_eq!(labels, vec!["Dashboard", "Leads/CRM", "Propiedades", "Chat IA"]);

    session.logout();
    assert!(matches!(
        session.require("leads.own"),
        Err(AuthError::Unauthenticated)
    ));
}

#[tokio::test]
async fn provider_failure_leaves_session_logged_out() {
    let mut session = Session::demo();
    let err = session
        .login_with_google(&UnavailableAuthenticator)
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 500);
    assert!(err.is_server_error());
    assert!(!session.is_authenticated());
    assert!(!session.can("dashboard"));
}

#[tokio::test]
async fn configured_table() {
    let config = RbacConfig::from_json(
        r#"{
            "roles": {
                "admin": ["*"],
                "gerente": ["dashboard", "leads.*", "cobranza.view"]
            }
        }"#,
    )
    .unwrap();
    let table = PermissionTable::from_config(&config).unwrap();

    let auth = DemoAuthenticator::new(User::new(
        "Rosa Méndez",
        "rosa@example.com",
        Role::Gerente,
    ));
    let mut session = Session::new(&table);
    session.login(&auth, "rosa@example.com", "pw").await.unwrap();

    assert!(session.can("leads.team.export"));
    assert!(!session.can("leads"));
    assert!(session.can("cobranza.view"));
    assert!(!session.can("cobranza"));

    // Cobrador is absent from this table.
    let cobrador = Session::with_user(
        &table,
        User::new("Pedro", "pedro@example.com", Role::Cobrador),
    );
    assert!(!cobrador.can("cobranza"));
}
