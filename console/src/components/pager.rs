//! Previous/next pagination controls.

use leptos::prelude::*;

use crate::state::snapshot::PageCursor;

#[component]
pub fn Pager(cursor: RwSignal<PageCursor>, #[prop(into)] rows_on_page: Signal<usize>) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                class="btn btn--small"
                disabled=move || !cursor.get().has_prev()
                on:click=move |_| cursor.update(|c| *c = c.prev())
            >
                "Anterior"
            </button>
            <span class="pager__page">{move || format!("Página {}", cursor.get().page_number())}</span>
            <button
                class="btn btn--small"
                disabled=move || !cursor.get().has_next(rows_on_page.get())
                on:click=move |_| cursor.update(|c| *c = c.next())
            >
                "Siguiente"
            </button>
        </div>
    }
}
