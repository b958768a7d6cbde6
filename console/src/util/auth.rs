//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: protected screens
//! bounce to `/login`, and the login screen bounces signed-in operators to
//! the default landing route.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Route used when no session is present.
pub const LOGIN_ROUTE: &str = "/login";
/// Landing route after sign-in.
pub const HOME_ROUTE: &str = "/progress";

/// True once storage has been read and no session token exists.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

pub fn should_redirect_authenticated(state: &AuthState) -> bool {
    !state.loading && state.is_authenticated()
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_ROUTE, replace());
        }
    });
}

/// Redirect away from the login screen when a session already exists.
pub fn install_authenticated_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authenticated(&auth.get()) {
            navigate(HOME_ROUTE, replace());
        }
    });
}
