//! Decoding of the backend's JSON envelopes.
//!
//! List responses look like `{ message, <listField>: [...], total?, totalPages? }`
//! and single-entity responses like `{ message, <EntityField>: {...} }`.

use crate::domain::common::Entity;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvelopeError {
    #[error("La respuesta del servidor no es un objeto JSON")]
    NotAnObject,
    #[error("La respuesta del servidor no contiene `{field}`")]
    MissingField { field: String },
    #[error("Formato inesperado en `{field}`: {reason}")]
    Shape { field: String, reason: String },
}

/// One page of a remote list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<E> {
    pub items: Vec<E>,
    pub total: u64,
    pub total_pages: u32,
}

impl<E> Default for ListPage<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            total_pages: 0,
        }
    }
}

impl<E: Entity> ListPage<E> {
    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(Entity::id_string).collect()
    }
}

/// Non-empty `message` of an envelope, if any
pub fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Whether the list field is present and actually an array.
/// A `false` here means `decode_list_page` degraded to an empty list.
pub fn has_list_field(body: &Value, list_field: &str) -> bool {
    body.get(list_field).is_some_and(Value::is_array)
}

/// Decodes a list envelope.
///
/// A missing, `null` or non-array list field is treated as an empty list.
/// Array elements that do not match `E` are reported as an error. Missing
/// `total`/`totalPages` are derived from the received items, which is only
/// a lower bound of the real total.
pub fn decode_list_page<E: DeserializeOwned>(
    body: &Value,
    list_field: &str,
    page_size: u32,
) -> Result<ListPage<E>, EnvelopeError> {
    if !body.is_object() {
        return Err(EnvelopeError::NotAnObject);
    }

    let items: Vec<E> = match body.get(list_field) {
        Some(Value::Array(raw)) => raw
            .iter()
            .map(|v| serde_json::from_value(v.clone()))
            .collect::<Result<_, _>>()
            .map_err(|e| EnvelopeError::Shape {
                field: list_field.to_string(),
                reason: e.to_string(),
            })?,
        _ => Vec::new(),
    };

    let total = body
        .get("total")
        .and_then(Value::as_u64)
        .unwrap_or(items.len() as u64);

    let total_pages = body
        .get("totalPages")
        .and_then(Value::as_u64)
        .map(|p| u32::try_from(p).unwrap_or(u32::MAX))
        .unwrap_or_else(|| derive_total_pages(items.len() as u64, page_size));

    Ok(ListPage {
        items,
        total,
        total_pages,
    })
}

pub fn derive_total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(page_size as u64)).unwrap_or(u32::MAX)
}

/// Decodes `{ message, <entityField>: {...} }`, matching the field name
/// case-insensitively.
pub fn decode_entity<E: DeserializeOwned>(body: &Value, entity_field: &str) -> Result<E, EnvelopeError> {
    let object = body.as_object().ok_or(EnvelopeError::NotAnObject)?;

    let raw = object
        .iter()
        .find(|(k, v)| k.eq_ignore_ascii_case(entity_field) && !v.is_null())
        .map(|(_, v)| v)
        .ok_or_else(|| EnvelopeError::MissingField {
            field: entity_field.to_string(),
        })?;

    serde_json::from_value(raw.clone()).map_err(|e| EnvelopeError::Shape {
        field: entity_field.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Resource;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: i64,
    }

    impl Entity for Row {
        const RESOURCE: Resource = Resource::Grades;

        fn id(&self) -> i64 {
            self.id
        }

        fn display_name(&self) -> String {
            format!("#{}", self.id)
        }
    }

    #[test]
    fn decodes_full_envelope() {
        let body = json!({
            "message": "ok",
            "grados": [{"id": 1}, {"id": 2}],
            "total": 42,
            "totalPages": 5
        });
        let page: ListPage<Row> = decode_list_page(&body, "grados", 10).unwrap();
        assert_eq!(page.items, vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(page.total, 42);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.ids(), vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn null_or_non_array_list_field_is_empty() {
        for body in [
            json!({"message": "ok", "grados": null}),
            json!({"message": "ok", "grados": {"id": 1}}),
            json!({"message": "ok", "grados": "nada"}),
            json!({"message": "ok"}),
        ] {
            let page: ListPage<Row> = decode_list_page(&body, "grados", 10).unwrap();
            assert!(page.items.is_empty());
            assert_eq!(page.total, 0);
            assert_eq!(page.total_pages, 0);
            assert!(!has_list_field(&body, "grados"));
        }
    }

    #[test]
    fn missing_totals_are_derived_from_items() {
        let body = json!({"grados": [{"id": 1}, {"id": 2}, {"id": 3}]});
        let page: ListPage<Row> = decode_list_page(&body, "grados", 2).unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn mismatched_items_surface_an_error() {
        let body = json!({"grados": [{"id": "uno"}]});
        let err = decode_list_page::<Row>(&body, "grados", 10).unwrap_err();
        assert!(matches!(err, EnvelopeError::Shape { ref field, .. } if field == "grados"));
    }

    #[test]
    fn non_object_body_is_an_error() {
        let err = decode_list_page::<Row>(&json!([1, 2]), "grados", 10).unwrap_err();
        assert_eq!(err, EnvelopeError::NotAnObject);
    }

    #[test]
    fn entity_field_is_case_insensitive() {
        let body = json!({"message": "ok", "Alumno": {"id": 9}});
        let row: Row = decode_entity(&body, "alumno").unwrap();
        assert_eq!(row.id, 9);

        let body = json!({"message": "ok", "catedratico": {"id": 4}});
        let row: Row = decode_entity(&body, "Catedratico").unwrap();
        assert_eq!(row.id, 4);
    }

    #[test]
    fn missing_entity_is_an_error() {
        let err = decode_entity::<Row>(&json!({"message": "no encontrado", "curso": null}), "curso")
            .unwrap_err();
        assert_eq!(
            err,
            EnvelopeError::MissingField {
                field: "curso".to_string()
            }
        );
    }

    #[test]
    fn server_message_ignores_blank() {
        assert_eq!(server_message(&json!({"message": "  "})), None);
        assert_eq!(
            server_message(&json!({"message": "Alumno no encontrado"})),
            Some("Alumno no encontrado".to_string())
        );
        assert_eq!(server_message(&json!({"message": 5})), None);
    }

    #[test]
    fn oversized_total_pages_saturate() {
        let body = json!({"grados": [], "total": 0, "totalPages": 5_000_000_000u64});
        let page: ListPage<Row> = decode_list_page(&body, "grados", 10).unwrap();
        assert_eq!(page.total_pages, u32::MAX);
    }

    #[test]
    fn derive_total_pages_rounds_up() {
        assert_eq!(derive_total_pages(0, 10), 0);
        assert_eq!(derive_total_pages(10, 10), 1);
        assert_eq!(derive_total_pages(11, 10), 2);
        assert_eq!(derive_total_pages(11, 0), 0);
    }
}
