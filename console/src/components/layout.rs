//! Authenticated shell: navigation, operator identity, logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin route renders inside `AdminLayout`, which owns the
//! unauthenticated redirect so pages never repeat it.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::client::BrowserClient;
use crate::state::auth::{AuthState, logout};
use crate::util::auth::{LOGIN_ROUTE, install_unauth_redirect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/progress", label: "Progreso" },
    NavItem { href: "/roles", label: "Roles" },
    NavItem { href: "/permissions", label: "Permisos" },
    NavItem { href: "/users", label: "Usuarios" },
];

#[component]
pub fn AdminLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<BrowserClient>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let on_logout = move |_| {
        auth.set(logout(client.storage().as_ref()));
        log::info!("auth: signed out");
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <div class="admin">
            <aside class="admin__sidebar">
                <div class="admin__brand">"HabitHive"</div>
                <nav class="admin__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <A href=item.href attr:class="admin__nav-link">{item.label}</A> })
                        .collect_view()}
                </nav>
            </aside>
            <div class="admin__main">
                <header class="admin__header">
                    <h1>{title}</h1>
                    <div class="admin__user">
                        <span class="admin__user-name">{move || auth.with(AuthState::display_name)}</span>
                        <button class="btn btn--small" on:click=on_logout>
                            "Cerrar sesión"
                        </button>
                    </div>
                </header>
                <main class="admin__content">{children()}</main>
            </div>
        </div>
    }
}
