//! Declarative form rendered from field descriptors.
//!
//! DESIGN
//! ======
//! Values are seeded once at mount from `initial_values` and never re-synced,
//! so pages remount the form (by toggling its modal) to load another record.
//! Validation is limited to the native `required` attribute.

#[cfg(test)]
#[path = "form_builder_test.rs"]
mod form_builder_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

pub const DEFAULT_SUBMIT_LABEL: &str = "Guardar";
pub const BUSY_SUBMIT_LABEL: &str = "Guardando...";
const SELECT_PLACEHOLDER: &str = "Seleccione...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// Control kind for a field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Date,
    Select(Vec<SelectOption>),
    Checkbox,
    Textarea,
}

impl FieldKind {
    /// `type` attribute for kinds rendered as `<input>`.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            Self::Text | Self::Select(_) | Self::Textarea => "text",
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, Self::Checkbox)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl FieldDef {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: false, placeholder: None }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// A single form value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl FieldValue {
    /// Checkbox coercion: non-empty text is truthy.
    pub fn truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(t) => !t.is_empty(),
        }
    }

    fn into_text(self) -> String {
        match self {
            Self::Text(t) => t,
            Self::Bool(b) => b.to_string(),
        }
    }
}

/// Form values keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    #[must_use]
    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, FieldValue::Text(value.into()));
        self
    }

    #[must_use]
    pub fn with_flag(mut self, name: &str, value: bool) -> Self {
        self.set(name, FieldValue::Bool(value));
        self
    }

    pub fn set(&mut self, name: &str, value: FieldValue) {
        self.0.insert(name.to_owned(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Text value, or `""` for missing and boolean entries.
    pub fn text(&self, name: &str) -> &str {
        match self.0.get(name) {
            Some(FieldValue::Text(t)) => t,
            _ => "",
        }
    }

    /// Trimmed text, `None` when blank.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        Some(self.text(name).trim()).filter(|t| !t.is_empty()).map(str::to_owned)
    }

    pub fn flag(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(FieldValue::truthy)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Initial state: one entry per field, defaulted and coerced to its kind.
pub fn seed_values(fields: &[FieldDef], initial: &FormValues) -> FormValues {
    let mut seeded = FormValues::default();
    for field in fields {
        let given = initial.get(field.name).cloned();
        let value = if field.kind.is_checkbox() {
            FieldValue::Bool(given.is_some_and(|v| v.truthy()))
        } else {
            FieldValue::Text(given.map(FieldValue::into_text).unwrap_or_default())
        };
        seeded.set(field.name, value);
    }
    seeded
}

pub fn submit_button_label(busy: bool, label: &str) -> &str {
    if busy { BUSY_SUBMIT_LABEL } else { label }
}

fn render_control(field: FieldDef, values: RwSignal<FormValues>) -> AnyView {
    let name = field.name;
    let set_text = move |text: String| values.update(|v| v.set(name, FieldValue::Text(text)));
    match field.kind {
        FieldKind::Select(options) => view! {
            <select class="form__control" id=name name=name required=field.required on:change=move |ev| set_text(event_target_value(&ev))>
                <option value="">{SELECT_PLACEHOLDER}</option>
                {options
                    .into_iter()
                    .map(|opt| {
                        let selected_value = opt.value.clone();
                        view! {
                            <option
                                value=opt.value
                                selected=move || values.with(|v| v.text(name) == selected_value)
                            >
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <input
                class="form__checkbox"
                type="checkbox"
                id=name
                name=name
                prop:checked=move || values.with(|v| v.flag(name))
                on:change=move |ev| values.update(|v| v.set(name, FieldValue::Bool(event_target_checked(&ev))))
            />
        }
        .into_any(),
        FieldKind::Textarea => view! {
            <textarea
                class="form__control"
                id=name
                name=name
                rows="4"
                placeholder=field.placeholder
                required=field.required
                prop:value=move || values.with(|v| v.text(name).to_owned())
                on:input=move |ev| set_text(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        kind => view! {
            <input
                class="form__control"
                type=kind.input_type()
                id=name
                name=name
                placeholder=field.placeholder
                required=field.required
                prop:value=move || values.with(|v| v.text(name).to_owned())
                on:input=move |ev| set_text(event_target_value(&ev))
            />
        }
        .into_any(),
    }
}

/// Form with one control per field and a submit button.
///
/// `extra` renders between the fields and the submit button, for controls the
/// descriptors cannot express (file pickers).
#[component]
pub fn FormBuilder(
    fields: Vec<FieldDef>,
    #[prop(optional)] initial_values: FormValues,
    on_submit: Callback<FormValues>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(optional, into)] submit_label: Option<String>,
    #[prop(optional, into)] extra: ViewFn,
) -> impl IntoView {
    let values = RwSignal::new(seed_values(&fields, &initial_values));
    let submit_label = submit_label.unwrap_or_else(|| DEFAULT_SUBMIT_LABEL.to_owned());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(values.get_untracked());
    };

    let rows = fields
        .into_iter()
        .map(|field| {
            let name = field.name;
            let label = field.label;
            let required = field.required;
            view! {
                <div class="form__group">
                    <label class="form__label" for=name>
                        {label}
                        {required.then(|| view! { <span class="form__required">" *"</span> })}
                    </label>
                    {render_control(field, values)}
                </div>
            }
        })
        .collect_view();

    view! {
        <form class="form" on:submit=on_form_submit>
            {rows}
            {extra.run()}
            <div class="form__actions">
                <button type="submit" class="btn btn--primary" disabled=move || is_loading.get()>
                    {move || submit_button_label(is_loading.get(), &submit_label).to_owned()}
                </button>
            </div>
        </form>
    }
}
