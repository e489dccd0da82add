use contracts::domain::a004_grade::{Grade, GradeDraft};
use contracts::domain::common::Resource;

use crate::shared::entity_view::{or_dash, Column, EditableEntity, FieldKind, FormField, ListColumns};

const COLUMNS: &[Column] = &[
    Column::new("ID", "id_grado"),
    Column::new("Nombre", "nombre"),
    Column::new("Sección", "seccion"),
    Column::new("Nivel académico", "id_nivel_academico"),
    Column::new("Jornada", "id_jornada"),
];

impl ListColumns for Grade {
    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id_grado.to_string(),
            self.nombre.clone(),
            or_dash(self.seccion.as_deref()),
            or_dash(self.id_nivel_academico),
            or_dash(self.id_jornada),
        ]
    }
}

const FIELDS: &[FormField] = &[
    FormField::required("nombre", "Nombre", FieldKind::Text),
    FormField::optional("seccion", "Sección", FieldKind::Text),
    FormField::optional(
        "id_nivel_academico",
        "Nivel académico",
        FieldKind::Reference(Resource::AcademicLevels),
    ),
    FormField::optional("id_jornada", "Jornada", FieldKind::Reference(Resource::Shifts)),
];

impl EditableEntity for Grade {
    type Draft = GradeDraft;

    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_draft(&self) -> GradeDraft {
        Grade::to_draft(self)
    }
}
