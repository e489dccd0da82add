//! Generic pages shared by every school resource.
//!
//! A resource plugs in by implementing [`ListColumns`] (table layout) and
//! [`EditableEntity`] (form layout and draft conversion).

pub mod details_page;
pub mod entity_form;
pub mod form_values;
pub mod list_page;

use contracts::domain::common::Entity;
use contracts::shared::validation::Validate;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use details_page::entity_details_page;
pub use entity_form::entity_form_modal;
pub use form_values::{FieldKind, FormField};
pub use list_page::entity_list_page;

/// One table column. `sort_field` is the backend field sent as `sortBy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub sort_field: &'static str,
}

impl Column {
    pub const fn new(label: &'static str, sort_field: &'static str) -> Self {
        Self { label, sort_field }
    }
}

pub trait ListColumns: Entity {
    fn columns() -> &'static [Column];

    /// Cell texts, one per column
    fn cells(&self) -> Vec<String>;

    /// Label/value pairs of the detail page; the table columns by default
    fn detail_rows(&self) -> Vec<(&'static str, String)> {
        Self::columns()
            .iter()
            .map(|c| c.label)
            .zip(self.cells())
            .collect()
    }
}

pub trait EditableEntity: ListColumns + Clone + DeserializeOwned + Send + Sync + 'static {
    type Draft: Validate + Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static;

    fn form_fields() -> &'static [FormField];

    fn to_draft(&self) -> Self::Draft;
}

/// "Activo" / "Inactivo"
pub fn status_label(active: bool) -> String {
    if active { "Activo" } else { "Inactivo" }.to_string()
}

/// Empty optional values render as a dash
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_for_missing_values() {
        assert_eq!(or_dash(None::<i64>), "-");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(Some(4)), "4");
        assert_eq!(status_label(false), "Inactivo");
    }
}
