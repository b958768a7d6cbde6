//! Email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_builder::{FieldDef, FieldKind, FormBuilder, FormValues};
use crate::net::client::BrowserClient;
use crate::net::types::Credentials;
use crate::state::auth::{AuthState, LoginOutcome, login, login_failure_message};
use crate::util::auth::install_authenticated_redirect;
use crate::util::task;

pub fn login_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("email", "Correo electrónico", FieldKind::Email).required().placeholder("admin@habithive.com"),
        FieldDef::new("password", "Contraseña", FieldKind::Password).required(),
    ]
}

/// Trimmed email plus raw password; `None` if either is blank.
pub fn credentials_from(values: &FormValues) -> Option<Credentials> {
    let email = values.non_empty("email")?;
    let password = values.text("password");
    if password.is_empty() {
        return None;
    }
    Some(Credentials { email, password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<BrowserClient>();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Also covers the post-login redirect once `auth` flips to signed in.
    install_authenticated_redirect(auth, use_navigate());

    let on_submit = Callback::new(move |values: FormValues| {
        if busy.get_untracked() {
            return;
        }
        let Some(credentials) = credentials_from(&values) else {
            error.set(Some(login_failure_message(None)));
            return;
        };
        busy.set(true);
        error.set(None);
        let client = client.clone();
        task::spawn(async move {
            match login(&client, &credentials).await {
                LoginOutcome::Success(state) => {
                    auth.try_set(state);
                }
                LoginOutcome::Failure(message) => {
                    error.try_set(Some(login_failure_message(message.as_deref())));
                }
            }
            busy.try_set(false);
        });
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"HabitHive"</h1>
                <p class="login-card__subtitle">"Panel de administración"</p>
                <Show when=move || error.with(Option::is_some)>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <FormBuilder fields=login_fields() on_submit=on_submit is_loading=busy submit_label="Iniciar sesión" />
            </div>
        </div>
    }
}
