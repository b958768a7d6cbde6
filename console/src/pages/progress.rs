//! Progress records: paginated list, create with optional evidence, detail
//! view, status/verification edits, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Status changes and verification go through their dedicated PATCH routes
//! rather than the generic update, matching how the backend audits them.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use leptos::prelude::*;

use super::forms::delete_prompt;
use crate::components::data_table::{Column, DataTable};
use crate::components::error_banner::ErrorBanner;
use crate::components::form_builder::{FieldDef, FieldKind, FormBuilder, FormValues, SelectOption};
use crate::components::layout::AdminLayout;
use crate::components::modal::{ConfirmModal, Modal, ModalSize};
use crate::components::pager::Pager;
use crate::config::ConsoleConfig;
use crate::net::client::BrowserClient;
use crate::net::error::ApiResult;
use crate::net::progress::ProgressApi;
use crate::net::transport::Transport;
use crate::net::types::{CreateProgress, EvidenceFile, Id, Progress, ProgressStatus};
use crate::state::auth::AuthState;
use crate::state::dialog::Editor;
use crate::state::snapshot::{PageCursor, Snapshot, load, settle};
use crate::util::task;
use crate::util::value_path::MISSING_CELL;

pub const IDS_AND_DATE_REQUIRED: &str = "Colmena, usuario, hábito y fecha son obligatorios";
pub const INVALID_STATUS: &str = "Estado no válido";
pub const VERIFIER_UNKNOWN: &str = "No se pudo identificar al verificador; inicia sesión de nuevo";

const VERIFY_FIELD: &str = "verify";

fn columns() -> Vec<Column<Progress>> {
    vec![
        Column::new("user.name", "Usuario"),
        Column::new("habit.name", "Hábito"),
        Column::new("hive.name", "Colmena"),
        Column::new("date", "Fecha"),
        Column::new("status", "Estado").render(|p: &Progress| {
            let status = p.status;
            view! { <span class=status_class(status)>{status.label()}</span> }.into_any()
        }),
        Column::new("verifier.name", "Verificado por"),
    ]
}

pub fn status_class(status: ProgressStatus) -> String {
    format!("status status--{}", status.as_str())
}

pub fn status_options() -> Vec<SelectOption> {
    ProgressStatus::ALL.iter().map(|s| SelectOption::new(s.as_str(), s.label())).collect()
}

pub fn create_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("hiveId", "Colmena", FieldKind::Text).required(),
        FieldDef::new("userId", "Usuario", FieldKind::Text).required(),
        FieldDef::new("habitId", "Hábito", FieldKind::Text).required(),
        FieldDef::new("date", "Fecha", FieldKind::Date).required(),
        FieldDef::new("status", "Estado", FieldKind::Select(status_options())),
    ]
}

fn parse_status(values: &FormValues) -> Result<Option<ProgressStatus>, &'static str> {
    values.non_empty("status").map(|s| s.parse().map_err(|_| INVALID_STATUS)).transpose()
}

/// # Errors
///
/// Returns a banner message when a required value is missing or the status
/// is not one of the known values.
pub fn create_payload(values: &FormValues, evidence: Option<EvidenceFile>) -> Result<CreateProgress, &'static str> {
    let (Some(hive_id), Some(user_id), Some(habit_id), Some(date)) = (
        values.non_empty("hiveId"),
        values.non_empty("userId"),
        values.non_empty("habitId"),
        values.non_empty("date"),
    ) else {
        return Err(IDS_AND_DATE_REQUIRED);
    };
    Ok(CreateProgress { hive_id, user_id, habit_id, date, status: parse_status(values)?, evidence_file: evidence })
}

fn summary_name(name: Option<&str>, id: &str) -> String {
    match name.filter(|n| !n.is_empty()) {
        Some(name) => name.to_owned(),
        None => id.to_owned(),
    }
}

/// Label/value rows for the detail modal.
pub fn detail_rows(progress: &Progress) -> Vec<(&'static str, String)> {
    let optional = |value: Option<&str>| value.unwrap_or(MISSING_CELL).to_owned();
    vec![
        ("ID", progress.id.clone()),
        ("Usuario", summary_name(progress.user.as_ref().map(|u| u.name.as_str()), &progress.user_id)),
        ("Hábito", summary_name(progress.habit.as_ref().map(|h| h.name.as_str()), &progress.habit_id)),
        ("Colmena", summary_name(progress.hive.as_ref().map(|h| h.name.as_str()), &progress.hive_id)),
        ("Fecha", progress.date.clone()),
        ("Estado", progress.status.label().to_owned()),
        (
            "Verificado por",
            match (&progress.verifier, &progress.verified_by) {
                (Some(v), _) => v.name.clone(),
                (None, Some(id)) => id.clone(),
                (None, None) => MISSING_CELL.to_owned(),
            },
        ),
        ("Creado", optional(progress.created_at.as_deref())),
        ("Actualizado", optional(progress.updated_at.as_deref())),
    ]
}

pub fn edit_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("status", "Estado", FieldKind::Select(status_options())).required(),
        FieldDef::new(VERIFY_FIELD, "Marcar como verificado", FieldKind::Checkbox),
    ]
}

pub fn edit_initial(progress: &Progress) -> FormValues {
    FormValues::default()
        .with_text("status", progress.status.as_str())
        .with_flag(VERIFY_FIELD, progress.verified_by.is_some())
}

/// Transitions to apply after the edit form is submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditPlan {
    pub status: Option<ProgressStatus>,
    pub verify_as: Option<Id>,
}

impl EditPlan {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.verify_as.is_none()
    }
}

/// Diff the edit form against the current record. Verification is one-way:
/// unticking the box on a verified record changes nothing.
///
/// # Errors
///
/// Returns a banner message for an unknown status, or when verification is
/// requested without a signed-in operator.
pub fn edit_plan(current: &Progress, values: &FormValues, operator: Option<&str>) -> Result<EditPlan, &'static str> {
    let status = parse_status(values)?.filter(|s| *s != current.status);
    let verify_as = if values.flag(VERIFY_FIELD) && current.verified_by.is_none() {
        Some(operator.filter(|id| !id.is_empty()).ok_or(VERIFIER_UNKNOWN)?.to_owned())
    } else {
        None
    };
    Ok(EditPlan { status, verify_as })
}

/// Outcome of applying an [`EditPlan`]. `landed` is true once any PATCH
/// succeeded, even if a later one failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub landed: bool,
    pub result: ApiResult<()>,
}

/// Run the status change, then verification, stopping at the first failure.
pub async fn apply_edit_plan<T: Transport>(api: &ProgressApi<'_, T>, id: &str, plan: &EditPlan) -> EditOutcome {
    let mut landed = false;
    if let Some(status) = plan.status {
        if let Err(err) = api.update_status(id, status).await {
            return EditOutcome { landed, result: Err(err) };
        }
        landed = true;
    }
    if let Some(verifier) = &plan.verify_as {
        if let Err(err) = api.verify(id, verifier).await {
            return EditOutcome { landed, result: Err(err) };
        }
        landed = true;
    }
    EditOutcome { landed, result: Ok(()) }
}

#[cfg(feature = "hydrate")]
async fn read_evidence(file: web_sys::File) -> Result<EvidenceFile, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(EvidenceFile { file_name: file.name(), content_type: file.type_(), bytes: js_sys::Uint8Array::new(&buffer).to_vec() })
}

#[component]
fn EvidencePicker(evidence: RwSignal<Option<EvidenceFile>>) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let file = event_target::<web_sys::HtmlInputElement>(&ev).files().and_then(|files| files.get(0));
            let Some(file) = file else {
                evidence.set(None);
                return;
            };
            task::spawn(async move {
                match read_evidence(file).await {
                    Ok(file) => {
                        evidence.try_set(Some(file));
                    }
                    Err(e) => log::warn!("progress: failed to read evidence file: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <div class="form__group">
            <label class="form__label" for="evidence">"Evidencia"</label>
            <input class="form__control" type="file" id="evidence" name="evidence" on:change=on_change />
            <Show when=move || evidence.with(Option::is_some)>
                <span class="form__hint">
                    {move || evidence.with(|e| e.as_ref().map(|f| format!("{} ({} bytes)", f.file_name, f.bytes.len())))}
                </span>
            </Show>
        </div>
    }
}

#[component]
pub fn ProgressPage() -> impl IntoView {
    let client = expect_context::<BrowserClient>();
    let config = expect_context::<ConsoleConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let snapshot = RwSignal::new(Snapshot::<Progress>::default());
    let cursor = RwSignal::new(PageCursor::first(config.page_size));
    let creating = RwSignal::new(false);
    let evidence = RwSignal::new(None::<EvidenceFile>);
    let editor = RwSignal::new(Editor::<Progress>::Closed);
    let viewing = RwSignal::new(None::<Progress>);
    let deleting = RwSignal::new(None::<Progress>);
    let saving = RwSignal::new(false);

    let refresh = {
        let client = client.clone();
        Callback::new(move |()| {
            let client = client.clone();
            let PageCursor { limit, offset } = cursor.get_untracked();
            load(snapshot, move || async move { client.progress().get_all(limit, offset).await });
        })
    };

    Effect::new(move || {
        cursor.track();
        refresh.run(());
    });

    let on_create = {
        let client = client.clone();
        Callback::new(move |values: FormValues| {
            let payload = match create_payload(&values, evidence.get_untracked()) {
                Ok(payload) => payload,
                Err(message) => {
                    snapshot.update(|s| s.fail(message));
                    return;
                }
            };
            let client = client.clone();
            saving.set(true);
            task::spawn(async move {
                let result = client.progress().create(&payload).await;
                settle(snapshot, saving, result, move || {
                    creating.set(false);
                    evidence.set(None);
                    refresh.run(());
                });
            });
        })
    };

    let on_edit = {
        let client = client.clone();
        Callback::new(move |values: FormValues| {
            let Some(current) = editor.with_untracked(|e| e.record().cloned()) else {
                return;
            };
            let operator = auth.with_untracked(|a| a.user.as_ref().map(|u| u.id.clone()));
            let plan = match edit_plan(&current, &values, operator.as_deref()) {
                Ok(plan) => plan,
                Err(message) => {
                    snapshot.update(|s| s.fail(message));
                    return;
                }
            };
            if plan.is_empty() {
                editor.set(Editor::Closed);
                return;
            }
            let client = client.clone();
            saving.set(true);
            task::spawn(async move {
                let EditOutcome { landed, result } = apply_edit_plan(&client.progress(), &current.id, &plan).await;
                let failed = result.is_err();
                settle(snapshot, saving, result, move || {
                    editor.set(Editor::Closed);
                    refresh.run(());
                });
                if failed && landed && !snapshot.is_disposed() {
                    refresh.run(());
                }
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
            let result = client.progress().delete(&target.id).await;
            settle(snapshot, saving, result, move || {
                deleting.set(None);
                refresh.run(());
            });
        });
    });

    let open_create = move |_| {
        evidence.set(None);
        creating.set(true);
    };

    view! {
        <AdminLayout title="Progreso">
            <ErrorBanner
                error=Signal::derive(move || snapshot.with(|s| s.error.clone()))
                on_dismiss=Callback::new(move |()| snapshot.update(Snapshot::dismiss_error))
            />
            <div class="toolbar">
                <button class="btn btn--primary" on:click=open_create>
                    "Registrar progreso"
                </button>
                <button class="btn" on:click=move |_| refresh.run(())>
                    "Actualizar"
                </button>
            </div>
            <DataTable
                data=Signal::derive(move || snapshot.with(|s| s.items.clone()))
                columns=columns()
                loading=Signal::derive(move || snapshot.with(|s| s.loading))
                empty_message="No hay registros de progreso"
                on_view=Callback::new(move |p: Progress| viewing.set(Some(p)))
                on_edit=Callback::new(move |p: Progress| editor.set(Editor::Edit(p)))
                on_delete=Callback::new(move |p: Progress| deleting.set(Some(p)))
            />
            <Pager cursor=cursor rows_on_page=Signal::derive(move || snapshot.with(|s| s.items.len())) />
            <Modal
                is_open=creating
                on_close=Callback::new(move |()| creating.set(false))
                title="Registrar progreso"
                size=ModalSize::Large
            >
                <FormBuilder
                    fields=create_fields()
                    on_submit=on_create
                    is_loading=saving
                    extra=move || view! { <EvidencePicker evidence=evidence /> }
                />
            </Modal>
            <Modal
                is_open=Signal::derive(move || editor.with(Editor::is_open))
                on_close=Callback::new(move |()| editor.set(Editor::Closed))
                title="Editar progreso"
            >
                {move || {
                    let initial = editor.with_untracked(|e| e.record().map(edit_initial)).unwrap_or_default();
                    view! { <FormBuilder fields=edit_fields() initial_values=initial on_submit=on_edit is_loading=saving /> }
                }}
            </Modal>
            <Modal
                is_open=Signal::derive(move || viewing.with(Option::is_some))
                on_close=Callback::new(move |()| viewing.set(None))
                title="Detalle de progreso"
                size=ModalSize::Large
            >
                <dl class="detail-list">
                    {move || {
                        viewing
                            .with(|v| v.as_ref().map(detail_rows).unwrap_or_default())
                            .into_iter()
                            .map(|(label, value)| view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            })
                            .collect_view()
                    }}
                </dl>
            </Modal>
            <ConfirmModal
                is_open=Signal::derive(move || deleting.with(Option::is_some))
                message=Signal::derive(move || {
                    deleting.with(|p| p.as_ref().map(|p| delete_prompt(&format!("{} ({})", p.date, p.status.label()))).unwrap_or_default())
                })
                on_confirm=on_confirm_delete
                on_close=Callback::new(move |()| deleting.set(None))
                busy=saving
            />
        </AdminLayout>
    }
}
