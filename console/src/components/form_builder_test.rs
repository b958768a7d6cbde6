use super::*;

fn fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("name", "Nombre", FieldKind::Text).required(),
        FieldDef::new("email", "Correo", FieldKind::Email),
        FieldDef::new("date", "Fecha", FieldKind::Date),
        FieldDef::new("status", "Estado", FieldKind::Select(vec![SelectOption::new("pending", "Pendiente")])),
        FieldDef::new("active", "Activo", FieldKind::Checkbox),
        FieldDef::new("notes", "Notas", FieldKind::Textarea).placeholder("Opcional"),
    ]
}

#[test]
fn input_type_matches_kind() {
    assert_eq!(FieldKind::Text.input_type(), "text");
    assert_eq!(FieldKind::Email.input_type(), "email");
    assert_eq!(FieldKind::Password.input_type(), "password");
    assert_eq!(FieldKind::Date.input_type(), "date");
    assert_eq!(FieldKind::Checkbox.input_type(), "checkbox");
}

#[test]
fn builder_sets_required_and_placeholder() {
    let field = FieldDef::new("notes", "Notas", FieldKind::Textarea).required().placeholder("Opcional");
    assert!(field.required);
    assert_eq!(field.placeholder, Some("Opcional"));
    assert!(!FieldDef::new("x", "X", FieldKind::Text).required);
}

#[test]
fn seeding_without_initial_values_defaults_every_field() {
    let seeded = seed_values(&fields(), &FormValues::default());
    assert_eq!(seeded.len(), 6);
    for name in ["name", "email", "date", "status", "notes"] {
        assert_eq!(seeded.get(name), Some(&FieldValue::Text(String::new())), "{name}");
    }
    assert_eq!(seeded.get("active"), Some(&FieldValue::Bool(false)));
}

#[test]
fn seeding_keeps_initial_values_and_coerces_checkboxes() {
    let initial = FormValues::default()
        .with_text("name", "Lectores")
        .with_text("active", "yes")
        .with_flag("email", true)
        .with_text("unknown", "ignored");

    let seeded = seed_values(&fields(), &initial);

    assert_eq!(seeded.text("name"), "Lectores");
    assert!(seeded.flag("active"));
    assert_eq!(seeded.text("email"), "true");
    assert_eq!(seeded.get("unknown"), None);
}

#[test]
fn empty_text_is_falsy_for_checkbox() {
    let initial = FormValues::default().with_text("active", "");
    assert!(!seed_values(&fields(), &initial).flag("active"));
}

#[test]
fn text_accessors_handle_missing_and_blank() {
    let values = FormValues::default().with_text("name", "  Ana ").with_text("blank", "   ").with_flag("on", true);
    assert_eq!(values.text("missing"), "");
    assert_eq!(values.text("on"), "");
    assert_eq!(values.non_empty("name").as_deref(), Some("Ana"));
    assert_eq!(values.non_empty("blank"), None);
    assert!(values.flag("on"));
    assert!(!values.flag("missing"));
}

#[test]
fn submit_label_switches_while_busy() {
    assert_eq!(submit_button_label(false, DEFAULT_SUBMIT_LABEL), "Guardar");
    assert_eq!(submit_button_label(true, DEFAULT_SUBMIT_LABEL), "Guardando...");
    assert_eq!(submit_button_label(false, "Iniciar sesión"), "Iniciar sesión");
}
