//! Generic record table with optional per-row actions.
//!
//! DESIGN
//! ======
//! Rows are any `Serialize` record. Unless a column supplies its own renderer,
//! its cell text comes from resolving the column key as a dot-path against the
//! row serialized to JSON, so one table works for every resource without
//! per-type accessors.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use std::sync::Arc;

use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;

use crate::util::value_path::path_text;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No hay datos disponibles";

/// Custom cell renderer receiving the typed row.
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// One table column: a dot-path key, a header, and an optional renderer.
pub struct Column<T> {
    pub key: &'static str,
    pub header: &'static str,
    pub render: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    pub fn new(key: &'static str, header: &'static str) -> Self {
        Self { key, header, render: None }
    }

    #[must_use]
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> AnyView + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self { key: self.key, header: self.header, render: self.render.clone() }
    }
}

/// Which of the three mutually exclusive table states to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableView {
    Loading,
    Empty,
    Populated,
}

/// Loading wins over empty, empty over populated.
pub fn table_view(loading: bool, row_count: usize) -> TableView {
    if loading {
        TableView::Loading
    } else if row_count == 0 {
        TableView::Empty
    } else {
        TableView::Populated
    }
}

/// JSON view of a row for cell lookup. A row that fails to serialize renders
/// as all-missing cells.
pub fn row_value<T: Serialize>(item: &T) -> Value {
    serde_json::to_value(item).unwrap_or_else(|err| {
        log::warn!("data table: could not serialize row: {err}");
        Value::Null
    })
}

/// Keyed-render identity: the row's `id` when it is a string or number,
/// otherwise the positional index.
pub fn row_key(row: &Value, index: usize) -> String {
    match row.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => format!("#{index}"),
    }
}

/// Default cell text for `key` over a serialized row.
pub fn cell_text(row: &Value, key: &str) -> String {
    path_text(row, key)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::View => "Ver",
            Self::Edit => "Editar",
            Self::Delete => "Eliminar",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::View => "btn btn--small",
            Self::Edit => "btn btn--small btn--primary",
            Self::Delete => "btn btn--small btn--danger",
        }
    }
}

/// Row callbacks supplied by the page. Only the supplied ones get a button.
pub struct RowActions<T: 'static> {
    pub on_view: Option<Callback<T>>,
    pub on_edit: Option<Callback<T>>,
    pub on_delete: Option<Callback<T>>,
}

impl<T: 'static> Clone for RowActions<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RowActions<T> {}

impl<T: 'static> RowActions<T> {
    fn callback(&self, action: RowAction) -> Option<Callback<T>> {
        match action {
            RowAction::View => self.on_view,
            RowAction::Edit => self.on_edit,
            RowAction::Delete => self.on_delete,
        }
    }

    /// Actions to render, in display order.
    pub fn visible(&self) -> Vec<RowAction> {
        [RowAction::View, RowAction::Edit, RowAction::Delete]
            .into_iter()
            .filter(|action| self.callback(*action).is_some())
            .collect()
    }

    /// Invoke the callback for `action` with the full row.
    pub fn dispatch(&self, action: RowAction, row: T) {
        if let Some(callback) = self.callback(action) {
            callback.run(row);
        }
    }
}

/// Record table with loading, empty, and populated states.
#[component]
pub fn DataTable<T>(
    #[prop(into)] data: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional, into)] empty_message: Option<String>,
    #[prop(optional)] on_view: Option<Callback<T>>,
    #[prop(optional)] on_edit: Option<Callback<T>>,
    #[prop(optional)] on_delete: Option<Callback<T>>,
) -> impl IntoView
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    let columns = Arc::new(columns);
    let actions = RowActions { on_view, on_edit, on_delete };
    let empty_message = empty_message.unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_owned());

    move || match table_view(loading.get(), data.with(Vec::len)) {
        TableView::Loading => view! {
            <div class="data-table__loading">
                <div class="spinner"></div>
            </div>
        }
        .into_any(),
        TableView::Empty => view! { <div class="data-table__empty">{empty_message.clone()}</div> }.into_any(),
        TableView::Populated => {
            let visible = actions.visible();
            let has_actions = !visible.is_empty();
            let header_columns = Arc::clone(&columns);
            let row_columns = Arc::clone(&columns);
            let rows = move || {
                data.get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let value = row_value(&item);
                        (row_key(&value, index), item, value)
                    })
                    .collect::<Vec<_>>()
            };

            view! {
                <div class="data-table">
                    <table class="data-table__table">
                        <thead>
                            <tr>
                                {header_columns.iter().map(|col| view! { <th>{col.header}</th> }).collect_view()}
                                {has_actions.then(|| view! { <th class="data-table__actions-header">"Acciones"</th> })}
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=rows
                                key=|(key, _, _)| key.clone()
                                children=move |(_, item, value)| {
                                    let cells = row_columns
                                        .iter()
                                        .map(|col| {
                                            let cell = match &col.render {
                                                Some(render) => render(&item),
                                                None => cell_text(&value, col.key).into_any(),
                                            };
                                            view! { <td>{cell}</td> }
                                        })
                                        .collect_view();
                                    let buttons = visible
                                        .iter()
                                        .map(|action| {
                                            let action = *action;
                                            let row = item.clone();
                                            view! {
                                                <button
                                                    class=action.class()
                                                    on:click=move |_| actions.dispatch(action, row.clone())
                                                >
                                                    {action.label()}
                                                </button>
                                            }
                                        })
                                        .collect_view();
                                    view! {
                                        <tr>
                                            {cells}
                                            {has_actions.then(|| view! { <td class="data-table__actions">{buttons}</td> })}
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            }
            .into_any()
        }
    }
}
