use super::*;
use crate::net::testing::{anonymous_client, client_with_token};
use crate::util::storage::MemoryStorage;
use futures::executor::block_on;
use serde_json::json;

fn credentials() -> Credentials {
    Credentials { email: "ana@example.com".to_owned(), password: "secreto".to_owned() }
}

#[test]
fn pending_state_is_loading_and_signed_out() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn restore_reads_token_user_and_permissions() {
    let store = MemoryStorage::with_token("jwt");
    store.set(USER_KEY, r#"{"id":1,"name":"Ana","email":"ana@example.com"}"#);
    store.set(PERMISSIONS_KEY, r#"["roles.read"]"#);

    let state = AuthState::restore(&store);
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.display_name(), "Ana");
    assert!(state.has_permission("roles.read"));
    assert!(!state.has_permission("roles.write"));
}

#[test]
fn restore_without_token_is_signed_out() {
    let store = MemoryStorage::new();
    let state = AuthState::restore(&store);
    assert!(!state.is_authenticated());
    assert_eq!(state.display_name(), "—");
}

#[test]
fn login_persists_session_keys() {
    let (client, transport) = anonymous_client();
    transport.reply_json(
        200,
        json!({ "token": "jwt", "user": { "id": 1, "name": "Ana", "email": "ana@example.com" }, "permissions": ["users.read"] }),
    );

    let outcome = block_on(login(&client, &credentials()));

    let LoginOutcome::Success(state) = outcome else { panic!("expected success") };
    assert!(state.is_authenticated());
    assert_eq!(state.permissions, vec!["users.read".to_owned()]);
    let store = client.storage();
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("jwt"));
    assert!(store.get(USER_KEY).is_some_and(|u| u.contains("Ana")));
    assert_eq!(store.get(PERMISSIONS_KEY).as_deref(), Some(r#"["users.read"]"#));
}

#[test]
fn login_failure_carries_backend_message() {
    let (client, transport) = anonymous_client();
    transport.reply_json(401, json!({ "message": "Credenciales inválidas" }));

    let outcome = block_on(login(&client, &credentials()));

    assert_eq!(outcome, LoginOutcome::Failure(Some("Credenciales inválidas".to_owned())));
    assert_eq!(client.storage().get(TOKEN_KEY), None);
}

#[test]
fn login_failure_with_empty_message_has_no_error() {
    let (client, transport) = anonymous_client();
    transport.reply(Err(String::new()));
    assert_eq!(block_on(login(&client, &credentials())), LoginOutcome::Failure(None));
}

#[test]
fn failure_message_renders_error_or_fallback() {
    assert_eq!(login_failure_message(Some("Credenciales inválidas")), "Credenciales inválidas");
    assert_eq!(login_failure_message(None), "Error al iniciar sesión");
    assert_eq!(login_failure_message(Some("  ")), "Error al iniciar sesión");
}

#[test]
fn logout_removes_session_keys_only() {
    let (client, _) = client_with_token("jwt");
    let store = client.storage();
    store.set(USER_KEY, "{}");
    store.set(PERMISSIONS_KEY, "[]");
    store.set("theme", "dark");

    let state = logout(store.as_ref());

    assert_eq!(state, AuthState::default());
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
    assert_eq!(store.get(PERMISSIONS_KEY), None);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}
