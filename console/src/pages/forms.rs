//! Form descriptors and payload mapping shared by the role and permission
//! screens, which edit the same `{name, description}` shape.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::components::form_builder::{FieldDef, FieldKind, FormValues};
use crate::net::types::NamePayload;

pub const NAME_REQUIRED: &str = "El nombre es obligatorio";

pub fn name_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("name", "Nombre", FieldKind::Text).required(),
        FieldDef::new("description", "Descripción", FieldKind::Textarea),
    ]
}

pub fn name_initial(name: &str, description: Option<&str>) -> FormValues {
    FormValues::default()
        .with_text("name", name)
        .with_text("description", description.unwrap_or_default())
}

/// # Errors
///
/// Returns a banner message when the name is blank.
pub fn name_payload(values: &FormValues) -> Result<NamePayload, &'static str> {
    let name = values.non_empty("name").ok_or(NAME_REQUIRED)?;
    Ok(NamePayload { name, description: values.non_empty("description") })
}

pub fn delete_prompt(name: &str) -> String {
    format!("¿Seguro que deseas eliminar \"{name}\"? Esta acción no se puede deshacer.")
}
