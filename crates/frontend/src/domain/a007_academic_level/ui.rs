use contracts::domain::a007_academic_level::{AcademicLevel, AcademicLevelDraft};

use crate::shared::entity_view::{or_dash, Column, EditableEntity, FieldKind, FormField, ListColumns};

const COLUMNS: &[Column] = &[
    Column::new("ID", "id_nivel_academico"),
    Column::new("Nombre", "nombre"),
    Column::new("Descripción", "descripcion"),
];

impl ListColumns for AcademicLevel {
    fn columns() -> &'static [Column] {
        COLUMNS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id_nivel_academico.to_string(),
            self.nombre.clone(),
            or_dash(self.descripcion.as_deref()),
        ]
    }
}

const FIELDS: &[FormField] = &[
    FormField::required("nombre", "Nombre", FieldKind::Text),
    FormField::optional("descripcion", "Descripción", FieldKind::TextArea),
];

impl EditableEntity for AcademicLevel {
    type Draft = AcademicLevelDraft;

    fn form_fields() -> &'static [FormField] {
        FIELDS
    }

    fn to_draft(&self) -> AcademicLevelDraft {
        AcademicLevel::to_draft(self)
    }
}
