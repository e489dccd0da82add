//! Form field descriptors and the conversion between a draft and the raw
//! string values held by the form inputs.
//!
//! Text inputs always hold strings. On submit the values are turned back
//! into a JSON object using each field's kind, then deserialized into the
//! draft. Empty optional inputs become `null`; empty required numeric inputs
//! are reported as field errors instead of being sent.

use std::collections::BTreeMap;

use contracts::domain::common::Resource;
use contracts::shared::validation::{FieldErrors, REQUIRED};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::shared::date_utils::{format_time, to_input_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Email,
    Password,
    Integer,
    Decimal,
    Date,
    Time,
    Bool,
    /// Fixed choices as (value, label)
    Select(&'static [(&'static str, &'static str)]),
    /// Id of another resource, picked from its options
    Reference(Resource),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Required fields map to non-optional draft fields
    pub required: bool,
}

impl FormField {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: true }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: false }
    }

    pub fn input_type(&self) -> &'static str {
        match self.kind {
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Integer | FieldKind::Decimal => "number",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            _ => "text",
        }
    }
}

pub type FormValues = BTreeMap<&'static str, String>;

/// Raw input values for a draft
pub fn draft_to_values<D: Serialize>(draft: &D, fields: &[FormField]) -> FormValues {
    let object = match serde_json::to_value(draft) {
        Ok(Value::Object(object)) => object,
        _ => Map::new(),
    };
    fields
        .iter()
        .map(|field| {
            let raw = match object.get(field.name) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) if field.kind == FieldKind::Date => to_input_date(s),
                Some(Value::String(s)) if field.kind == FieldKind::Time => format_time(s),
                Some(Value::String(s)) => s.clone(),
                Some(Value::Bool(b)) => b.to_string(),
                Some(other) => other.to_string(),
            };
            (field.name, raw)
        })
        .collect()
}

fn field_value(field: &FormField, raw: &str, errors: &mut FieldErrors) -> Value {
    let raw = raw.trim();
    let empty = raw.is_empty();
    match field.kind {
        FieldKind::Bool => Value::Bool(raw == "true"),
        FieldKind::Integer | FieldKind::Reference(_) if empty => {
            if field.required {
                errors.add(field.name, REQUIRED);
            }
            Value::Null
        }
        FieldKind::Integer | FieldKind::Reference(_) => match raw.parse::<i64>() {
            Ok(n) => Value::Number(n.into()),
            Err(_) => {
                errors.add(field.name, "Debe ser un número entero");
                Value::Null
            }
        },
        FieldKind::Decimal if empty => {
            if field.required {
                errors.add(field.name, REQUIRED);
            }
            Value::Null
        }
        FieldKind::Decimal => match raw.parse::<f64>().ok().and_then(Number::from_f64) {
            Some(n) => Value::Number(n),
            None => {
                errors.add(field.name, "Debe ser un número");
                Value::Null
            }
        },
        _ if empty && !field.required => Value::Null,
        _ => Value::String(raw.to_string()),
    }
}

/// Builds the draft from raw input values. Conversion problems are returned
/// as per-field errors; the draft's own validation runs afterwards.
pub fn values_to_draft<D: DeserializeOwned>(
    values: &FormValues,
    fields: &[FormField],
) -> Result<D, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut object = Map::new();
    for field in fields {
        let raw = values.get(field.name).map(String::as_str).unwrap_or_default();
        object.insert(field.name.to_string(), field_value(field, raw, &mut errors));
    }
    errors.into_result()?;

    serde_json::from_value(Value::Object(object)).map_err(|err| {
        log::warn!("form values do not match the draft shape: {}", err);
        let mut errors = FieldErrors::new();
        errors.add("_form", "Datos del formulario inválidos");
        errors
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_course::CourseDraft;
    use contracts::domain::a006_shift::{Shift, ShiftDraft};
    use contracts::domain::a008_cycle::CycleDraft;
    use contracts::shared::validation::Validate;

    const COURSE_FIELDS: &[FormField] = &[
        FormField::required("nombre", "Nombre", FieldKind::Text),
        FormField::optional("id_grado", "Grado", FieldKind::Reference(Resource::Grades)),
        FormField::optional("id_catedratico", "Catedrático", FieldKind::Reference(Resource::Teachers)),
        FormField::required("nota_aprobacion", "Nota de aprobación", FieldKind::Decimal),
        FormField::required("nota_maxima", "Nota máxima", FieldKind::Decimal),
    ];

    #[test]
    fn default_draft_fills_inputs() {
        let values = draft_to_values(&CourseDraft::default(), COURSE_FIELDS);
        assert_eq!(values["nombre"], "");
        assert_eq!(values["id_grado"], "");
        assert_eq!(values["nota_aprobacion"], "60.0");
        assert_eq!(values["nota_maxima"], "100.0");
    }

    #[test]
    fn inputs_build_typed_draft() {
        let mut values = draft_to_values(&CourseDraft::default(), COURSE_FIELDS);
        values.insert("nombre", " Matemática ".into());
        values.insert("id_grado", "3".into());
        values.insert("nota_aprobacion", "61".into());

        let draft: CourseDraft = values_to_draft(&values, COURSE_FIELDS).unwrap();
        assert_eq!(draft.nombre, "Matemática");
        assert_eq!(draft.id_grado, Some(3));
        assert_eq!(draft.id_catedratico, None);
        assert_eq!(draft.nota_aprobacion, 61.0);
        assert_eq!(draft.nota_maxima, 100.0);
    }

    #[test]
    fn unparsable_and_missing_numbers_are_field_errors() {
        let mut values = draft_to_values(&CourseDraft::default(), COURSE_FIELDS);
        values.insert("id_grado", "tres".into());
        values.insert("nota_maxima", "".into());

        let errors = values_to_draft::<CourseDraft>(&values, COURSE_FIELDS).unwrap_err();
        assert_eq!(errors.get("id_grado"), Some("Debe ser un número entero"));
        assert_eq!(errors.get("nota_maxima"), Some(REQUIRED));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn dates_and_bools_round_trip_through_inputs() {
        let fields = &[
            FormField::required("anio", "Año", FieldKind::Integer),
            FormField::optional("descripcion", "Descripción", FieldKind::TextArea),
            FormField::required("fecha_inicio", "Inicio", FieldKind::Date),
            FormField::required("fecha_fin", "Fin", FieldKind::Date),
            FormField::required("activo", "Activo", FieldKind::Bool),
        ];
        let draft = CycleDraft {
            anio: 2025,
            descripcion: None,
            fecha_inicio: "2025-01-15T00:00:00.000Z".into(),
            fecha_fin: "2025-10-31".into(),
            activo: true,
        };
        let values = draft_to_values(&draft, fields);
        assert_eq!(values["fecha_inicio"], "2025-01-15");
        assert_eq!(values["activo"], "true");
        assert_eq!(values["descripcion"], "");

        let back: CycleDraft = values_to_draft(&values, fields).unwrap();
        assert_eq!(back.anio, 2025);
        assert_eq!(back.descripcion, None);
        assert_eq!(back.fecha_inicio, "2025-01-15");
        assert!(back.activo);
    }

    #[test]
    fn api_times_with_seconds_edit_and_save() {
        let fields = &[
            FormField::required("nombre", "Nombre", FieldKind::Text),
            FormField::optional("hora_inicio", "Inicio", FieldKind::Time),
            FormField::optional("hora_fin", "Fin", FieldKind::Time),
        ];
        let shift = Shift {
            id_jornada: 2,
            nombre: "Vespertina".into(),
            hora_inicio: Some("13:00:00".into()),
            hora_fin: Some("18:30:00".into()),
        };
        let values = draft_to_values(&shift.to_draft(), fields);
        assert_eq!(values["hora_inicio"], "13:00");
        assert_eq!(values["hora_fin"], "18:30");

        let draft: ShiftDraft = values_to_draft(&values, fields).unwrap();
        assert!(draft.validate().is_empty());
    }
}
