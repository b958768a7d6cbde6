//! Overlay dialog hosting arbitrary content.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl ModalSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Small => "modal modal--sm",
            Self::Medium => "modal modal--md",
            Self::Large => "modal modal--lg",
            Self::ExtraLarge => "modal modal--xl",
        }
    }
}

pub fn closes_on_key(key: &str) -> bool {
    key == "Escape"
}

/// Window-level keydowns reach every mounted modal; only open ones react.
pub fn dismisses(is_open: bool, key: &str) -> bool {
    is_open && closes_on_key(key)
}

/// Controlled modal. Renders nothing while `is_open` is false.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: Signal<String>,
    #[prop(optional)] size: ModalSize,
    children: ChildrenFn,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if dismisses(is_open.get_untracked(), &ev.key()) {
                ev.prevent_default();
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Show when=move || is_open.get()>
            <div class="modal__backdrop" on:click=move |_| on_close.run(())>
                <div class=size.class() on:click=move |ev| ev.stop_propagation()>
                    <div class="modal__header">
                        <h2>{move || title.get()}</h2>
                        <button class="modal__close" on:click=move |_| on_close.run(()) title="Cerrar">
                            "✕"
                        </button>
                    </div>
                    <div class="modal__body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

/// Small confirmation dialog for destructive actions.
#[component]
pub fn ConfirmModal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] message: Signal<String>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <Modal is_open=is_open on_close=on_close title="Confirmar eliminación" size=ModalSize::Small>
            <p class="modal__message">{move || message.get()}</p>
            <div class="modal__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Cancelar"
                </button>
                <button class="btn btn--danger" disabled=move || busy.get() on:click=move |_| on_confirm.run(())>
                    "Eliminar"
                </button>
            </div>
        </Modal>
    }
}
