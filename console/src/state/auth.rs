//! Auth-session state for the current console operator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the admin layout to coordinate login redirects
//! and identity-dependent rendering. The session itself is the bearer token
//! in storage; this struct is its in-memory mirror.
//!
//! The server render never sees browser storage, so the app starts in a
//! `loading` state and restores the session from storage once hydrated.
//! Redirect guards wait for `loading == false` to avoid bouncing a signed-in
//! user to `/login` during hydration.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::client::ApiClient;
use crate::net::transport::Transport;
use crate::net::types::{Credentials, User};
use crate::util::storage::{KeyValueStore, PERMISSIONS_KEY, SESSION_KEYS, TOKEN_KEY, USER_KEY, load_json, save_json};

/// Shown when a login attempt fails without a usable message.
pub const LOGIN_FALLBACK_ERROR: &str = "Error al iniciar sesión";

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub permissions: Vec<String>,
    pub token_present: bool,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before storage has been read.
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Rebuild the session mirror from persisted keys.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        Self {
            user: load_json(store, USER_KEY),
            permissions: load_json(store, PERMISSIONS_KEY).unwrap_or_default(),
            token_present: store.get(TOKEN_KEY).is_some_and(|t| !t.is_empty()),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token_present
    }

    pub fn has_permission(&self, name: &str) -> bool {
        self.permissions.iter().any(|p| p == name)
    }

    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "—".to_owned(), |u| u.name.clone())
    }
}

/// Result of a login attempt, shaped after the auth-context contract
/// `{success, error?}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Success(AuthState),
    Failure(Option<String>),
}

/// Exchange credentials for a session and persist it.
pub async fn login<T: Transport>(client: &ApiClient<T>, credentials: &Credentials) -> LoginOutcome {
    match client.auth().login(credentials).await {
        Ok(session) => {
            let store = client.storage().as_ref();
            store.set(TOKEN_KEY, &session.token);
            save_json(store, USER_KEY, &session.user);
            save_json(store, PERMISSIONS_KEY, &session.permissions);
            log::info!("auth: signed in as user {}", session.user.id);
            LoginOutcome::Success(AuthState::restore(store))
        }
        Err(err) => {
            let message = err.to_string();
            LoginOutcome::Failure(Some(message).filter(|m| !m.trim().is_empty()))
        }
    }
}

/// Drop the persisted session and return the signed-out state.
pub fn logout(store: &dyn KeyValueStore) -> AuthState {
    for key in SESSION_KEYS {
        store.remove(key);
    }
    AuthState::default()
}

/// Banner text for a failed login.
pub fn login_failure_message(error: Option<&str>) -> String {
    error
        .filter(|m| !m.trim().is_empty())
        .map_or_else(|| LOGIN_FALLBACK_ERROR.to_owned(), str::to_owned)
}
