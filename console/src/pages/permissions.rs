//! Permission catalogue: list, create, edit, delete.

use leptos::prelude::*;

use super::forms::{delete_prompt, name_fields, name_initial, name_payload};
use crate::components::data_table::{Column, DataTable};
use crate::components::error_banner::ErrorBanner;
use crate::components::form_builder::{FormBuilder, FormValues};
use crate::components::layout::AdminLayout;
use crate::components::modal::{ConfirmModal, Modal};
use crate::components::pager::Pager;
use crate::config::ConsoleConfig;
use crate::net::client::BrowserClient;
use crate::net::types::Permission;
use crate::state::dialog::Editor;
use crate::state::snapshot::{PageCursor, Snapshot, load, settle};
use crate::util::task;

fn columns() -> Vec<Column<Permission>> {
    vec![Column::new("name", "Nombre"), Column::new("description", "Descripción")]
}

#[component]
pub fn PermissionsPage() -> impl IntoView {
    let client = expect_context::<BrowserClient>();
    let config = expect_context::<ConsoleConfig>();

    let snapshot = RwSignal::new(Snapshot::<Permission>::default());
    let cursor = RwSignal::new(PageCursor::first(config.page_size));
    let editor = RwSignal::new(Editor::<Permission>::Closed);
    let deleting = RwSignal::new(None::<Permission>);
    let saving = RwSignal::new(false);

    let refresh = {
        let client = client.clone();
        Callback::new(move |()| {
            let client = client.clone();
            let PageCursor { limit, offset } = cursor.get_untracked();
            load(snapshot, move || async move { client.permissions().get_all(limit, offset).await });
        })
    };

    // Fetch on mount and whenever the page changes.
    Effect::new(move || {
        cursor.track();
        refresh.run(());
    });

    let on_save = {
        let client = client.clone();
        Callback::new(move |values: FormValues| {
            let payload = match name_payload(&values) {
                Ok(payload) => payload,
                Err(message) => {
                    snapshot.update(|s| s.fail(message));
                    return;
                }
            };
            let target = editor.with_untracked(|e| e.record().map(|p| p.id.clone()));
            let client = client.clone();
            saving.set(true);
            task::spawn(async move {
                let api = client.permissions();
                let result = match target {
                    Some(id) => api.update(&id, &payload).await,
                    None => api.create(&payload).await,
                };
                settle(snapshot, saving, result, move || {
                    editor.set(Editor::Closed);
                    refresh.run(());
                });
            });
        })
    };

    let on_confirm_delete = Callback::new(move |()| {
        let Some(target) = deleting.get_untracked() else {
            return;
        };
        let client = client.clone();
        saving.set(true);
        task::spawn(async move {
            let result = client.permissions().delete(&target.id).await;
            settle(snapshot, saving, result, move || {
                deleting.set(None);
                refresh.run(());
            });
        });
    });

    view! {
        <AdminLayout title="Permisos">
            <ErrorBanner
                error=Signal::derive(move || snapshot.with(|s| s.error.clone()))
                on_dismiss=Callback::new(move |()| snapshot.update(Snapshot::dismiss_error))
            />
            <div class="toolbar">
                <button class="btn btn--primary" on:click=move |_| editor.set(Editor::Create)>
                    "Nuevo permiso"
                </button>
                <button class="btn" on:click=move |_| refresh.run(())>
                    "Actualizar"
                </button>
            </div>
            <DataTable
                data=Signal::derive(move || snapshot.with(|s| s.items.clone()))
                columns=columns()
                loading=Signal::derive(move || snapshot.with(|s| s.loading))
                on_edit=Callback::new(move |p: Permission| editor.set(Editor::Edit(p)))
                on_delete=Callback::new(move |p: Permission| deleting.set(Some(p)))
            />
            <Pager cursor=cursor rows_on_page=Signal::derive(move || snapshot.with(|s| s.items.len())) />
            <Modal
                is_open=Signal::derive(move || editor.with(Editor::is_open))
                on_close=Callback::new(move |()| editor.set(Editor::Closed))
                title=Signal::derive(move || editor.with(|e| e.title("Nuevo permiso", "Editar permiso").to_owned()))
            >
                {move || {
                    let initial = editor
                        .with_untracked(|e| e.record().map(|p| name_initial(&p.name, p.description.as_deref())))
                        .unwrap_or_default();
                    view! { <FormBuilder fields=name_fields() initial_values=initial on_submit=on_save is_loading=saving /> }
                }}
            </Modal>
            <ConfirmModal
                is_open=Signal::derive(move || deleting.with(Option::is_some))
                message=Signal::derive(move || deleting.with(|p| p.as_ref().map(|p| delete_prompt(&p.name)).unwrap_or_default()))
                on_confirm=on_confirm_delete
                on_close=Callback::new(move |()| deleting.set(None))
                busy=saving
            />
        </AdminLayout>
    }
}
