use contracts::domain::a006_shift::{Shift, ShiftDraft};

use crate::shared::date_utils::format_time;
use crate::shared::entity_view::{or_dash, Column, EditableEntity, FieldKind, FormField, ListColumns};

const COLUMNS: &[Column] = &[
    Column::new("ID", "id_jornada"),
    Column::new("Nombre", "nombre"),
    Column::new("Hora de inicio", "hora_inicio"),
    Column::new("Hora de fin", "hora_fin"),
];

impl ListColumns for Shift {
    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id_jornada.to_string(),
            self.nombre.clone(),
            or_dash(self.hora_inicio.as_deref().map(format_time)),
            or_dash(self.hora_fin.as_deref().map(format_time)),
        ]
    }
}

const FIELDS: &[FormField] = &[
    FormField::required("nombre", "Nombre", FieldKind::Text),
    FormField::optional("hora_inicio", "Hora de inicio", FieldKind::Time),
    FormField::optional("hora_fin", "Hora de fin", FieldKind::Time),
];

impl EditableEntity for Shift {
    type Draft = ShiftDraft;

    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_draft(&self) -> ShiftDraft {
        Shift::to_draft(self)
    }
}
