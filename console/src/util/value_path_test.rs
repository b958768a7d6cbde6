use super::*;
use serde_json::json;

#[test]
fn resolves_top_level_and_nested_keys() {
    let row = json!({ "id": 7, "user": { "name": "Ana", "role": { "name": "admin" } } });
    assert_eq!(resolve_path(&row, "id"), Some(&json!(7)));
    assert_eq!(resolve_path(&row, "user.name"), Some(&json!("Ana")));
    assert_eq!(resolve_path(&row, "user.role.name"), Some(&json!("admin")));
}

#[test]
fn missing_intermediate_segment_renders_dash() {
    let row = json!({ "id": 1, "other": true });
    assert_eq!(resolve_path(&row, "nested.value"), None);
    assert_eq!(path_text(&row, "nested.value"), "-");
}

#[test]
fn null_leaf_renders_dash() {
    let row = json!({ "verifiedBy": null });
    assert_eq!(path_text(&row, "verifiedBy"), "-");
}

#[test]
fn scalar_in_the_middle_of_a_path_is_missing() {
    let row = json!({ "name": "Ana" });
    assert_eq!(path_text(&row, "name.first"), "-");
}

#[test]
fn numeric_segments_index_arrays() {
    let row = json!({ "tags": ["a", "b"] });
    assert_eq!(path_text(&row, "tags.1"), "b");
    assert_eq!(path_text(&row, "tags.5"), "-");
}

#[test]
fn display_formats_scalars_and_containers() {
    assert_eq!(display_value(Some(&json!("text"))), "text");
    assert_eq!(display_value(Some(&json!(false))), "false");
    assert_eq!(display_value(Some(&json!(2.5))), "2.5");
    assert_eq!(display_value(Some(&json!({ "a": 1 }))), r#"{"a":1}"#);
}
