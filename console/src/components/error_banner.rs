//! Inline dismissable error banner.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="error-banner" role="alert">
                <span class="error-banner__message">{move || error.get().unwrap_or_default()}</span>
                <button class="error-banner__dismiss" on:click=move |_| on_dismiss.run(()) title="Cerrar">
                    "✕"
                </button>
            </div>
        </Show>
    }
}
