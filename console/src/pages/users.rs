//! Console user management.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use super::forms::delete_prompt;
use crate::components::data_table::{Column, DataTable};
use crate::components::error_banner::ErrorBanner;
use crate::components::form_builder::{FieldDef, FieldKind, FormBuilder, FormValues, SelectOption};
use crate::components::layout::AdminLayout;
use crate::components::modal::{ConfirmModal, Modal};
use crate::components::pager::Pager;
use crate::config::ConsoleConfig;
use crate::net::client::BrowserClient;
use crate::net::types::{Role, User, UserPayload};
use crate::state::dialog::Editor;
use crate::state::snapshot::{PageCursor, Snapshot, load, settle};
use crate::util::task;

const ROLE_OPTIONS_LIMIT: u32 = 200;

pub const NAME_EMAIL_REQUIRED: &str = "Nombre y correo son obligatorios";
pub const PASSWORD_REQUIRED: &str = "La contraseña es obligatoria para usuarios nuevos";

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Nombre"),
        Column::new("email", "Correo"),
        Column::new("role.name", "Rol"),
        Column::new("createdAt", "Creado"),
    ]
}

pub fn role_options(roles: &[Role]) -> Vec<SelectOption> {
    roles.iter().map(|r| SelectOption::new(r.id.clone(), r.name.clone())).collect()
}

/// Password is only required when creating; leaving it blank on edit keeps
/// the current one.
pub fn user_fields(roles: &[Role], creating: bool) -> Vec<FieldDef> {
    let password = FieldDef::new("password", "Contraseña", FieldKind::Password);
    let password = if creating { password.required() } else { password.placeholder("Dejar en blanco para mantener") };
    vec![
        FieldDef::new("name", "Nombre", FieldKind::Text).required(),
        FieldDef::new("email", "Correo", FieldKind::Email).required(),
        password,
        FieldDef::new("roleId", "Rol", FieldKind::Select(role_options(roles))),
    ]
}

/// The user form needs the role list; it opens once the first roles fetch
/// has finished, successfully or not.
pub fn roles_settled(roles: &Snapshot<Role>) -> bool {
    roles.generation() > 0 && !roles.loading
}

pub fn user_initial(user: &User) -> FormValues {
    FormValues::default()
        .with_text("name", user.name.clone())
        .with_text("email", user.email.clone())
        .with_text("roleId", user.role_id.clone().unwrap_or_default())
}

/// # Errors
///
/// Returns a banner message for missing name/email, or a missing password on
/// create.
pub fn user_payload(values: &FormValues, creating: bool) -> Result<UserPayload, &'static str> {
    let (Some(name), Some(email)) = (values.non_empty("name"), values.non_empty("email")) else {
        return Err(NAME_EMAIL_REQUIRED);
    };
    let password = Some(values.text("password").to_owned()).filter(|p| !p.is_empty());
    if creating && password.is_none() {
        return Err(PASSWORD_REQUIRED);
    }
    Ok(UserPayload { name, email, password, role_id: values.non_empty("roleId") })
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let client = expect_context::<BrowserClient>();
    let config = expect_context::<ConsoleConfig>();

    let snapshot = RwSignal::new(Snapshot::<User>::default());
    let roles = RwSignal::new(Snapshot::<Role>::default());
    let cursor = RwSignal::new(PageCursor::first(config.page_size));
    let editor = RwSignal::new(Editor::<User>::Closed);
    let deleting = RwSignal::new(None::<User>);
    let saving = RwSignal::new(false);

    let refresh = {
        let client = client.clone();
        Callback::new(move |()| {
            let client = client.clone();
            let PageCursor { limit, offset } = cursor.get_untracked();
            load(snapshot, move || async move { client.users().get_all(limit, offset).await });
        })
    };

    Effect::new(move || {
        cursor.track();
        refresh.run(());
    });

    {
        let client = client.clone();
        Effect::new(move || {
            let client = client.clone();
            load(roles, move || async move { client.roles().get_all(ROLE_OPTIONS_LIMIT, 0).await });
        });
    }

    let roles_ready = Signal::derive(move || roles.with(roles_settled));

    let on_save = {
        let client = client.clone();
        Callback::new(move |values: FormValues| {
            let target = editor.with_untracked(|e| e.record().map(|u| u.id.clone()));
            let payload = match user_payload(&values, target.is_none()) {
                Ok(payload) => payload,
                Err(message) => {
                    snapshot.update(|s| s.fail(message));
                    return;
                }
            };
            let client = client.clone();
            saving.set(true);
            task::spawn(async move {
                let api = client.users();
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
            let result = client.users().delete(&target.id).await;
            settle(snapshot, saving, result, move || {
                deleting.set(None);
                refresh.run(());
            });
        });
    });

    view! {
        <AdminLayout title="Usuarios">
            <ErrorBanner
                error=Signal::derive(move || snapshot.with(|s| s.error.clone()).or_else(|| roles.with(|r| r.error.clone())))
                on_dismiss=Callback::new(move |()| {
                    snapshot.update(Snapshot::dismiss_error);
                    roles.update(Snapshot::dismiss_error);
                })
            />
            <div class="toolbar">
                <button
                    class="btn btn--primary"
                    disabled=move || !roles_ready.get()
                    on:click=move |_| editor.set(Editor::Create)
                >
                    "Nuevo usuario"
                </button>
                <button class="btn" on:click=move |_| refresh.run(())>
                    "Actualizar"
                </button>
            </div>
            <DataTable
                data=Signal::derive(move || snapshot.with(|s| s.items.clone()))
                columns=columns()
                loading=Signal::derive(move || snapshot.with(|s| s.loading))
                on_edit=Callback::new(move |u: User| {
                    if roles_ready.get_untracked() {
                        editor.set(Editor::Edit(u));
                    }
                })
                on_delete=Callback::new(move |u: User| deleting.set(Some(u)))
            />
            <Pager cursor=cursor rows_on_page=Signal::derive(move || snapshot.with(|s| s.items.len())) />
            <Modal
                is_open=Signal::derive(move || editor.with(Editor::is_open))
                on_close=Callback::new(move |()| editor.set(Editor::Closed))
                title=Signal::derive(move || editor.with(|e| e.title("Nuevo usuario", "Editar usuario").to_owned()))
            >
                {move || {
                    let (initial, creating) = editor
                        .with_untracked(|e| (e.record().map(user_initial).unwrap_or_default(), e.record().is_none()));
                    let fields = roles.with_untracked(|r| user_fields(&r.items, creating));
                    view! { <FormBuilder fields=fields initial_values=initial on_submit=on_save is_loading=saving /> }
                }}
            </Modal>
            <ConfirmModal
                is_open=Signal::derive(move || deleting.with(Option::is_some))
                message=Signal::derive(move || deleting.with(|u| u.as_ref().map(|u| delete_prompt(&u.name)).unwrap_or_default()))
                on_confirm=on_confirm_delete
                on_close=Callback::new(move |()| deleting.set(None))
                busy=saving
            />
        </AdminLayout>
    }
}
