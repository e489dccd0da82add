use contracts::domain::a008_cycle::{Cycle, CycleDraft};

use crate::shared::date_utils::format_date;
use crate::shared::entity_view::{
    or_dash, Column, EditableEntity, FieldKind, FormField, ListColumns,
};

const COLUMNS: &[Column] = &[
    Column::new("Año", "anio"),
    Column::new("Descripción", "descripcion"),
    Column::new("Inicio", "fecha_inicio"),
    Column::new("Fin", "fecha_fin"),
    Column::new("Activo", "activo"),
];

impl ListColumns for Cycle {
    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.anio.to_string(),
            or_dash(self.descripcion.as_deref()),
            format_date(&self.fecha_inicio),
            format_date(&self.fecha_fin),
            if self.activo { "Sí" } else { "No" }.to_string(),
        ]
    }
}

const FIELDS: &[FormField] = &[
    FormField::required("anio", "Año", FieldKind::Integer),
    FormField::optional("descripcion", "Descripción", FieldKind::Text),
    FormField::required("fecha_inicio", "Fecha de inicio", FieldKind::Date),
    FormField::required("fecha_fin", "Fecha de fin", FieldKind::Date),
    FormField::required("activo", "Activo", FieldKind::Bool),
];

impl EditableEntity for Cycle {
    type Draft = CycleDraft;

    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_draft(&self) -> CycleDraft {
        Cycle::to_draft(self)
    }
}
