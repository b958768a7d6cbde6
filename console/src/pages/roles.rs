//! Role management, including the per-role permission assignment modal.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use leptos::prelude::*;

use super::forms::{delete_prompt, name_fields, name_initial, name_payload};
use crate::components::data_table::{Column, DataTable};
use crate::components::error_banner::ErrorBanner;
use crate::components::form_builder::{FormBuilder, FormValues};
use crate::components::layout::AdminLayout;
use crate::components::modal::{ConfirmModal, Modal, ModalSize};
use crate::components::pager::Pager;
use crate::config::ConsoleConfig;
use crate::net::client::BrowserClient;
use crate::net::types::{Id, Permission, Role};
use crate::state::dialog::Editor;
use crate::state::snapshot::{PageCursor, Snapshot, load, settle};
use crate::util::task;

/// Upper bound on permissions listed in the assignment modal.
pub const CATALOGUE_LIMIT: u32 = 200;

fn columns() -> Vec<Column<Role>> {
    vec![Column::new("name", "Nombre"), Column::new("description", "Descripción")]
}

/// Pair every catalogue permission with whether the role holds it.
pub fn permission_toggles(catalogue: &[Permission], assigned: &[Permission]) -> Vec<(Permission, bool)> {
    catalogue
        .iter()
        .map(|permission| {
            let held = assigned.iter().any(|a| a.id == permission.id);
            (permission.clone(), held)
        })
        .collect()
}

/// The toggle list waits for the catalogue and for the first assignment
/// fetch of the role being managed.
pub fn toggles_pending(catalogue: &Snapshot<Permission>, assigned: &Snapshot<Permission>) -> bool {
    catalogue.loading || (assigned.loading && assigned.is_empty())
}

#[component]
pub fn RolesPage() -> impl IntoView {
    let client = expect_context::<BrowserClient>();
    let config = expect_context::<ConsoleConfig>();

    let snapshot = RwSignal::new(Snapshot::<Role>::default());
    let cursor = RwSignal::new(PageCursor::first(config.page_size));
    let editor = RwSignal::new(Editor::<Role>::Closed);
    let deleting = RwSignal::new(None::<Role>);
    let saving = RwSignal::new(false);

    let managing = RwSignal::new(None::<Role>);
    let catalogue = RwSignal::new(Snapshot::<Permission>::default());
    let assigned = RwSignal::new(Snapshot::<Permission>::default());
    let toggling = RwSignal::new(false);

    let refresh = {
        let client = client.clone();
        Callback::new(move |()| {
            let client = client.clone();
            let PageCursor { limit, offset } = cursor.get_untracked();
            load(snapshot, move || async move { client.roles().get_all(limit, offset).await });
        })
    };

    Effect::new(move || {
        cursor.track();
        refresh.run(());
    });

    let reload_assigned = {
        let client = client.clone();
        Callback::new(move |role_id: Id| {
            let client = client.clone();
            load(assigned, move || async move { client.roles().get_permissions(&role_id).await });
        })
    };

    let open_permissions = {
        let client = client.clone();
        Callback::new(move |role: Role| {
            let client = client.clone();
            assigned.update(Snapshot::clear);
            load(catalogue, move || async move { client.permissions().get_all(CATALOGUE_LIMIT, 0).await });
            reload_assigned.run(role.id.clone());
            managing.set(Some(role));
        })
    };

    let on_toggle = {
        let client = client.clone();
        Callback::new(move |(permission_id, held): (Id, bool)| {
            let Some(role_id) = managing.with_untracked(|m| m.as_ref().map(|r| r.id.clone())) else {
                return;
            };
            let client = client.clone();
            toggling.set(true);
            task::spawn(async move {
                let api = client.roles();
                let result = if held {
                    api.revoke_permission(&role_id, &permission_id).await
                } else {
                    api.assign_permission(&role_id, &permission_id).await
                };
                settle(assigned, toggling, result, move || reload_assigned.run(role_id));
            });
        })
    };

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
            let target = editor.with_untracked(|e| e.record().map(|r| r.id.clone()));
            let client = client.clone();
            saving.set(true);
            task::spawn(async move {
                let api = client.roles();
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
            let result = client.roles().delete(&target.id).await;
            settle(snapshot, saving, result, move || {
                deleting.set(None);
                refresh.run(());
            });
        });
    });

    let permission_rows = move || {
        let rows = catalogue.with(|c| assigned.with(|a| permission_toggles(&c.items, &a.items)));
        rows.into_iter()
            .map(|(permission, held)| {
                let id = permission.id.clone();
                view! {
                    <label class="permission-toggle">
                        <input
                            type="checkbox"
                            prop:checked=held
                            disabled=move || toggling.get() || assigned.with(|a| a.loading)
                            on:change=move |_| on_toggle.run((id.clone(), held))
                        />
                        <span class="permission-toggle__name">{permission.name}</span>
                        <span class="permission-toggle__description">{permission.description.unwrap_or_default()}</span>
                    </label>
                }
            })
            .collect_view()
    };

    let catalogue_loading = move || catalogue.with(|c| assigned.with(|a| toggles_pending(c, a)));

    view! {
        <AdminLayout title="Roles">
            <ErrorBanner
                error=Signal::derive(move || snapshot.with(|s| s.error.clone()))
                on_dismiss=Callback::new(move |()| snapshot.update(Snapshot::dismiss_error))
            />
            <div class="toolbar">
                <button class="btn btn--primary" on:click=move |_| editor.set(Editor::Create)>
                    "Nuevo rol"
                </button>
                <button class="btn" on:click=move |_| refresh.run(())>
                    "Actualizar"
                </button>
            </div>
            <DataTable
                data=Signal::derive(move || snapshot.with(|s| s.items.clone()))
                columns=columns()
                loading=Signal::derive(move || snapshot.with(|s| s.loading))
                on_view=open_permissions
                on_edit=Callback::new(move |r: Role| editor.set(Editor::Edit(r)))
                on_delete=Callback::new(move |r: Role| deleting.set(Some(r)))
            />
            <Pager cursor=cursor rows_on_page=Signal::derive(move || snapshot.with(|s| s.items.len())) />
            <Modal
                is_open=Signal::derive(move || editor.with(Editor::is_open))
                on_close=Callback::new(move |()| editor.set(Editor::Closed))
                title=Signal::derive(move || editor.with(|e| e.title("Nuevo rol", "Editar rol").to_owned()))
            >
                {move || {
                    let initial = editor
                        .with_untracked(|e| e.record().map(|r| name_initial(&r.name, r.description.as_deref())))
                        .unwrap_or_default();
                    view! { <FormBuilder fields=name_fields() initial_values=initial on_submit=on_save is_loading=saving /> }
                }}
            </Modal>
            <Modal
                is_open=Signal::derive(move || managing.with(Option::is_some))
                on_close=Callback::new(move |()| managing.set(None))
                title=Signal::derive(move || {
                    managing.with(|m| m.as_ref().map(|r| format!("Permisos de {}", r.name)).unwrap_or_default())
                })
                size=ModalSize::Large
            >
                <ErrorBanner
                    error=Signal::derive(move || assigned.with(|a| a.error.clone()).or_else(|| catalogue.with(|c| c.error.clone())))
                    on_dismiss=Callback::new(move |()| {
                        assigned.update(Snapshot::dismiss_error);
                        catalogue.update(Snapshot::dismiss_error);
                    })
                />
                <Show when=catalogue_loading fallback=permission_rows>
                    <div class="data-table__loading">
                        <div class="spinner"></div>
                    </div>
                </Show>
            </Modal>
            <ConfirmModal
                is_open=Signal::derive(move || deleting.with(Option::is_some))
                message=Signal::derive(move || deleting.with(|r| r.as_ref().map(|r| delete_prompt(&r.name)).unwrap_or_default()))
                on_confirm=on_confirm_delete
                on_close=Callback::new(move |()| deleting.set(None))
                busy=saving
            />
        </AdminLayout>
    }
}
