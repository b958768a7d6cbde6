use std::sync::{Arc, Mutex};

use serde_json::json;

use super::*;

#[test]
fn table_view_prefers_loading_then_empty() {
    assert_eq!(table_view(true, 0), TableView::Loading);
    assert_eq!(table_view(true, 3), TableView::Loading);
    assert_eq!(table_view(false, 0), TableView::Empty);
    assert_eq!(table_view(false, 3), TableView::Populated);
}

#[test]
fn row_key_uses_id_or_index() {
    assert_eq!(row_key(&json!({ "id": "abc" }), 4), "abc");
    assert_eq!(row_key(&json!({ "id": 17 }), 4), "17");
    assert_eq!(row_key(&json!({ "id": null }), 4), "#4");
    assert_eq!(row_key(&json!({ "name": "x" }), 0), "#0");
}

#[test]
fn cell_text_renders_dash_for_missing_nested_key() {
    let row = json!({ "id": 1, "name": "Ana" });
    assert_eq!(cell_text(&row, "nested.value"), "-");
}

#[test]
fn cell_text_resolves_nested_paths_and_scalars() {
    let row = json!({ "user": { "name": "Ana" }, "count": 3, "active": true, "verifiedBy": null });
    assert_eq!(cell_text(&row, "user.name"), "Ana");
    assert_eq!(cell_text(&row, "count"), "3");
    assert_eq!(cell_text(&row, "active"), "true");
    assert_eq!(cell_text(&row, "verifiedBy"), "-");
}

#[test]
fn column_builder_attaches_renderer() {
    let plain = Column::<serde_json::Value>::new("name", "Nombre");
    assert!(plain.render.is_none());

    let custom = plain.clone().render(|_| "x".into_any());
    assert_eq!(custom.key, "name");
    assert_eq!(custom.header, "Nombre");
    assert!(custom.render.is_some());
}

#[test]
fn action_labels_are_spanish() {
    assert_eq!(RowAction::View.label(), "Ver");
    assert_eq!(RowAction::Edit.label(), "Editar");
    assert_eq!(RowAction::Delete.label(), "Eliminar");
}

#[test]
fn no_callbacks_means_no_action_column() {
    let actions = RowActions::<serde_json::Value> { on_view: None, on_edit: None, on_delete: None };
    assert!(actions.visible().is_empty());
}

#[test]
fn delete_dispatches_full_row_to_on_delete_only() {
    let owner = Owner::new();
    owner.with(|| {
        let deleted = Arc::new(Mutex::new(Vec::new()));
        let edited = Arc::new(Mutex::new(Vec::new()));
        let on_delete = {
            let deleted = Arc::clone(&deleted);
            Callback::new(move |row: serde_json::Value| deleted.lock().unwrap().push(row))
        };
        let on_edit = {
            let edited = Arc::clone(&edited);
            Callback::new(move |row: serde_json::Value| edited.lock().unwrap().push(row))
        };
        let actions = RowActions { on_view: None, on_edit: Some(on_edit), on_delete: Some(on_delete) };

        assert_eq!(actions.visible(), vec![RowAction::Edit, RowAction::Delete]);

        let row = json!({ "id": 9, "name": "Leer", "nested": { "value": 1 } });
        actions.dispatch(RowAction::Delete, row.clone());
        actions.dispatch(RowAction::View, row.clone());

        assert_eq!(*deleted.lock().unwrap(), vec![row]);
        assert!(edited.lock().unwrap().is_empty());
    });
}

#[test]
fn unserializable_row_renders_missing_cells() {
    let mut row = std::collections::BTreeMap::new();
    row.insert(vec![1u8], 1u8);

    let value = row_value(&row);

    assert_eq!(value, Value::Null);
    assert_eq!(row_key(&value, 4), "#4");
    assert_eq!(cell_text(&value, "name"), "-");
}
