//! Dot-path lookups over generic JSON values.
//!
//! Table columns name their cell by a path such as `user.name`; rows are
//! serialized to `serde_json::Value` and walked one segment at a time.

#[cfg(test)]
#[path = "value_path_test.rs"]
mod value_path_test;

use serde_json::Value;

/// Placeholder rendered for missing or null cells.
pub const MISSING_CELL: &str = "-";

/// Resolve `path` against `value`. Empty segments are ignored, numeric
/// segments index into arrays.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(value, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

/// Text shown for a resolved value: strings verbatim, scalars via display,
/// containers as compact JSON, null/missing as `-`.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_CELL.to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Resolve and format in one step.
pub fn path_text(value: &Value, path: &str) -> String {
    display_value(resolve_path(value, path))
}
