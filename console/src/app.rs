//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ConsoleConfig;
use crate::net::client::BrowserClient;
use crate::pages::{
    login::LoginPage, permissions::PermissionsPage, progress::ProgressPage, roles::RolesPage, users::UsersPage,
};
use crate::state::auth::AuthState;
use crate::util::auth::HOME_ROUTE;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session signal, the API client, and the console config, then
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ConsoleConfig::from_build_env();
    let client = BrowserClient::browser(&config);
    let auth = RwSignal::new(AuthState::pending());

    // Storage is only readable in the browser; restore once hydrated.
    {
        let client = client.clone();
        Effect::new(move || auth.set(AuthState::restore(client.storage().as_ref())));
    }

    provide_context(config);
    provide_context(client);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/habithive.css"/>
        <Title text="HabitHive Admin"/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_ROUTE/> }/>
                <Route path=StaticSegment("progress") view=ProgressPage/>
                <Route path=StaticSegment("roles") view=RolesPage/>
                <Route path=StaticSegment("permissions") view=PermissionsPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
            </Routes>
        </Router>
    }
}
