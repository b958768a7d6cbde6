//! Open/closed state for a page's create-or-edit modal.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Editor<T> {
    #[default]
    Closed,
    Create,
    Edit(T),
}

impl<T> Editor<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Record being edited, if any.
    pub fn record(&self) -> Option<&T> {
        match self {
            Self::Edit(record) => Some(record),
            Self::Closed | Self::Create => None,
        }
    }

    pub fn title<'a>(&self, create: &'a str, edit: &'a str) -> &'a str {
        if matches!(self, Self::Edit(_)) { edit } else { create }
    }
}
