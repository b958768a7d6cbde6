use super::*;
use crate::components::form_builder::seed_values;

#[test]
fn name_fields_require_only_name() {
    let fields = name_fields();
    assert_eq!(fields.len(), 2);
    assert!(fields[0].required);
    assert!(!fields[1].required);
}

#[test]
fn payload_trims_and_drops_blank_description() {
    let values = FormValues::default().with_text("name", " admin ").with_text("description", "  ");
    assert_eq!(name_payload(&values), Ok(NamePayload { name: "admin".to_owned(), description: None }));
}

#[test]
fn payload_keeps_description() {
    let values = name_initial("editor", Some("Edita contenido"));
    let payload = name_payload(&values).unwrap();
    assert_eq!(payload.description.as_deref(), Some("Edita contenido"));
}

#[test]
fn blank_name_is_rejected() {
    let values = seed_values(&name_fields(), &FormValues::default());
    assert_eq!(name_payload(&values), Err(NAME_REQUIRED));
}

#[test]
fn delete_prompt_names_the_record() {
    assert!(delete_prompt("admin").contains("\"admin\""));
}
